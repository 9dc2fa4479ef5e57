use crate::fields::{GetstaticStatics, StaticFields};
use termcolor::ColorChoice;

/// Value `b` is initialised to when failure injection is on
pub const INJECTED_B: i32 = 99;

pub struct Settings {
    /// Start the `getstatic` class with `b = 99` so that `static-get` fails
    pub inject_failure: bool,

    /// Only run scenarios with these names (empty means run everything)
    ///
    /// Selection never reorders scenarios: they always run in the fixed sequence.
    pub only: Vec<String>,

    /// When to color the summary
    pub color: ColorChoice,
}

impl Settings {
    /// Initial static values for a run
    pub fn statics(&self) -> StaticFields {
        let mut statics = StaticFields::default();
        if self.inject_failure {
            statics.getstatic = GetstaticStatics {
                b: INJECTED_B,
                ..statics.getstatic
            };
        }
        statics
    }

    /// Parse a `--color` value
    pub fn parse_color(value: &str) -> Option<ColorChoice> {
        match value {
            "auto" => Some(ColorChoice::Auto),
            "always" => Some(ColorChoice::Always),
            "never" => Some(ColorChoice::Never),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            inject_failure: false,
            only: vec![],
            color: ColorChoice::Auto,
        }
    }
}
