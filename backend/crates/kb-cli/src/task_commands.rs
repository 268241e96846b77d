use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Get a task by ID
    Get {
        /// Task ID
        id: String,
    },
}
