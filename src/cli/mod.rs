//! Command-line interface module.

mod args;
mod run;

pub use args::{Cli, Commands, StateCommand};
pub use run::run;
