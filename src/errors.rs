use std::fmt;
use std::io;

/// A scenario computed something other than what it expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionMismatch {
    pub scenario: &'static str,
    pub expected: i32,
    pub actual: i32,
}

impl fmt::Display for AssertionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: expected {} but got {}",
            self.scenario, self.expected, self.actual
        )
    }
}

/// Ways a run can go wrong (other than a scenario failing, which is an outcome)
#[derive(Debug)]
pub enum Error {
    /// Writing the report failed
    Io(io::Error),

    /// A scenario was selected by a name that doesn't exist
    UnknownScenario(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO - {}", err),
            Error::UnknownScenario(name) => write!(f, "Unknown scenario '{}'", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
