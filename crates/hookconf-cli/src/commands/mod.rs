//! Command implementations for hookconf-cli
//!
//! Each command renders its output to a `String`; `main` prints it.

pub mod get;
pub mod identity;
pub mod readme;
pub mod sections;

pub use get::run_get;
pub use identity::{run_secret, run_whoami};
pub use readme::run_readme;
pub use sections::run_sections;
