use crate::errors::AssertionMismatch;
use crate::fields::{self, FieldHolder, StaticFields};

/// One isolated computation with a known expected result
pub struct Scenario {
    /// Short name, used for selection and in the summary (eg. `static-get`)
    pub name: &'static str,

    /// What is being checked, as it appears in `SUCCESS:`/`FAILURE:` lines
    pub description: &'static str,

    /// How the expected value is derived (eg. `a + b`)
    pub formula: &'static str,

    /// Value `compute` must return
    pub expected: i32,

    /// The computation itself
    ///
    /// Only statics are shared across scenarios. Instance state must be created inside `compute`
    /// so that nothing leaks between scenarios.
    pub compute: fn(&mut StaticFields) -> i32,
}

/// Result of running a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// The computed value matched
    Pass(i32),

    /// The computed value didn't match
    Fail(AssertionMismatch),
}

impl ScenarioOutcome {
    /// Value the scenario actually computed
    pub fn actual(&self) -> i32 {
        match self {
            ScenarioOutcome::Pass(actual) => *actual,
            ScenarioOutcome::Fail(mismatch) => mismatch.actual,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ScenarioOutcome::Pass(_))
    }
}

impl Scenario {
    /// Run the computation and compare it against the expected value
    pub fn evaluate(&self, statics: &mut StaticFields) -> ScenarioOutcome {
        log::debug!("Running scenario '{}'", self.name);
        let actual = (self.compute)(statics);
        if actual == self.expected {
            ScenarioOutcome::Pass(actual)
        } else {
            ScenarioOutcome::Fail(AssertionMismatch {
                scenario: self.name,
                expected: self.expected,
                actual,
            })
        }
    }

    /// The fixed sequence, in the order it must run
    pub fn standard() -> Vec<Scenario> {
        vec![
            Scenario {
                name: "static-get",
                description: "getstatic support",
                formula: "a + b",
                expected: 3,
                compute: |statics| fields::static_get(statics),
            },
            Scenario {
                name: "static-write-read",
                description: "Static field access",
                formula: "sa + sb after sb = 22",
                expected: 32,
                compute: fields::static_write_then_read,
            },
            Scenario {
                name: "instance-field",
                description: "Instance field access",
                formula: "field after field = 200",
                expected: 200,
                compute: |_| {
                    let mut holder = FieldHolder::new();
                    fields::instance_field(&mut holder)
                },
            },
        ]
    }
}
