use crate::errors::Error;
use crate::scenario::{Scenario, ScenarioOutcome};
use crate::report;
use crate::settings::Settings;
use termcolor::WriteColor;

/// Runs the scenario sequence and reports on it
pub struct FieldAccessChecker {
    scenarios: Vec<Scenario>,
}

/// What happened over a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Scenario names paired with their outcome, in run order
    pub outcomes: Vec<(&'static str, ScenarioOutcome)>,
}

impl RunSummary {
    pub fn count_ok(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_pass()).count()
    }

    pub fn count_fail(&self) -> usize {
        self.outcomes.len() - self.count_ok()
    }

    /// Process exit status: any mismatch at all is a failure
    pub fn exit_code(&self) -> i32 {
        if self.count_fail() > 0 {
            1
        } else {
            0
        }
    }
}

impl FieldAccessChecker {
    /// Checker over the standard scenarios, narrowed by `settings.only`
    pub fn new(settings: &Settings) -> Result<FieldAccessChecker, Error> {
        let standard = Scenario::standard();
        if let Some(unknown) = settings
            .only
            .iter()
            .find(|name| !standard.iter().any(|s| s.name == name.as_str()))
        {
            return Err(Error::UnknownScenario(unknown.clone()));
        }

        let scenarios = standard
            .into_iter()
            .filter(|s| settings.only.is_empty() || settings.only.iter().any(|n| n == s.name))
            .collect();
        Ok(FieldAccessChecker { scenarios })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Run every selected scenario against fresh statics, then write the summary
    ///
    /// A mismatch does not stop the run. The only errors returned are failures to write output.
    pub fn run<W: WriteColor>(&self, settings: &Settings, out: &mut W) -> Result<RunSummary, Error> {
        let mut statics = settings.statics();
        log::debug!("Initial statics: {:?}", statics);

        let mut outcomes = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            let outcome = scenario.evaluate(&mut statics);
            if let ScenarioOutcome::Fail(mismatch) = &outcome {
                log::error!("{}", mismatch);
            }
            report::scenario_lines(out, scenario, &outcome)?;
            outcomes.push(outcome);
        }

        for (scenario, outcome) in self.scenarios.iter().zip(&outcomes) {
            report::summary_line(out, scenario, outcome)?;
        }

        let summary = RunSummary {
            outcomes: self
                .scenarios
                .iter()
                .map(|s| s.name)
                .zip(outcomes)
                .collect(),
        };
        log::info!(
            "{} scenario(s) passed, {} failed",
            summary.count_ok(),
            summary.count_fail()
        );
        Ok(summary)
    }
}
