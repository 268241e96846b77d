//! kb-cli library
//!
//! Command definitions and the command runner, exported for the `kb` binary and tests.

pub(crate) mod board_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod output;
pub(crate) mod runner;
pub(crate) mod task_commands;
pub(crate) mod workflow_commands;

#[cfg(test)]
mod tests;

pub use board_commands::BoardCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use output::CommandOutput;
pub use runner::run;
pub use task_commands::TaskCommands;
pub use workflow_commands::WorkflowCommands;
