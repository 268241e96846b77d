use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Show the board columns and summary
    Show {
        /// Project ID
        project_id: String,
    },
    /// Drag a task onto a status column
    Move {
        /// Project ID
        project_id: String,
        /// Task ID
        task_id: String,
        /// Target column (e.g. "In Progress", in-progress, testing)
        status: String,
    },
    /// Approve a Done task, closing it (owners only)
    Approve {
        /// Project ID
        project_id: String,
        /// Task ID
        task_id: String,
    },
}
