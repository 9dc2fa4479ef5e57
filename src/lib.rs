//! Check that static and instance field accesses compute what they should
//!
//! Each scenario stands in for a compiled method doing `getstatic`/`putstatic` or
//! `getfield`/`putfield`, and asserts on the arithmetic result:
//!
//! ```
//! use fieldcheck::*;
//!
//! let settings = Settings::default();
//! let checker = FieldAccessChecker::new(&settings).unwrap();
//! let mut out = termcolor::Buffer::no_color();
//! let summary = checker.run(&settings, &mut out).unwrap();
//! assert_eq!(summary.exit_code(), 0);
//! ```

mod checker;
mod errors;
mod fields;
mod scenario;
mod settings;

pub mod report;

pub use checker::*;
pub use errors::*;
pub use fields::*;
pub use scenario::*;
pub use settings::*;
