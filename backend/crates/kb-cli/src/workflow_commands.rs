use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum WorkflowCommands {
    /// Check whether a column move is allowed
    Check {
        /// Current status
        from: String,
        /// Target status
        to: String,
    },
}
