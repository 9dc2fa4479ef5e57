use crate::scenario::{Scenario, ScenarioOutcome};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Write the result lines for one scenario
///
/// ```text
/// Result of static-get: 3
/// Expected: 3 (a + b)
/// SUCCESS: getstatic support is working correctly!
/// ```
pub fn scenario_lines<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    outcome: &ScenarioOutcome,
) -> io::Result<()> {
    writeln!(out, "Result of {}: {}", scenario.name, outcome.actual())?;
    writeln!(out, "Expected: {} ({})", scenario.expected, scenario.formula)?;
    match outcome {
        ScenarioOutcome::Pass(_) => writeln!(
            out,
            "SUCCESS: {} is working correctly!",
            scenario.description
        ),
        ScenarioOutcome::Fail(mismatch) => writeln!(
            out,
            "FAILURE: {} is not working correctly! actual={}",
            scenario.description, mismatch.actual
        ),
    }
}

/// Write the one-line summary entry for a scenario (` - static-get [OK]`)
pub fn summary_line<W: WriteColor>(
    out: &mut W,
    scenario: &Scenario,
    outcome: &ScenarioOutcome,
) -> io::Result<()> {
    let (color, summary) = if outcome.is_pass() {
        (Color::Green, "OK")
    } else {
        (Color::Red, "FAILED")
    };

    out.write_all(b" - ")?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    out.write_all(scenario.name.as_bytes())?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    out.write_all(b" [")?;
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    out.write_all(summary.as_bytes())?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    out.write_all(b"]\n")?;
    out.reset()
}
