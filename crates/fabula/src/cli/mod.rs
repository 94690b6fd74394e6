//! CLI command handling.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run;
