//! kb - Kanban task board CLI
//!
//! # Examples
//!
//! ```bash
//! # Show a project board
//! kb board show <project-id>
//!
//! # Move a task one column forward
//! kb --user-id alice board move <project-id> <task-id> "In Progress"
//!
//! # Close a finished task as the project owner
//! kb --owner board approve <project-id> <task-id>
//!
//! # Ask the workflow policy without touching the server
//! kb workflow check "To Do" Testing
//! ```

use kb_cli::{Cli, CliResult, logger};
use kb_config::Config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match kb_cli::run(&cli, &config).await {
        Ok(output) => {
            if output.success {
                println!("{}", output.text);
                ExitCode::SUCCESS
            } else {
                // JSON stays on stdout for callers that parse it
                if cli.json {
                    println!("{}", output.text);
                } else {
                    eprintln!("{}", output.text);
                }
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    )?;
    if log::log_enabled!(log::Level::Debug) {
        config.log_summary();
    }

    Ok(config)
}
