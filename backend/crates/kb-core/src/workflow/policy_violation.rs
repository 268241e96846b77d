use crate::{TaskId, TaskStatus, describe_workflow};

use thiserror::Error;

/// Reasons the board refuses a move. All of them are recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Tasks cannot be moved out of 'Done' or 'Closed' column. Once done, always done!")]
    Sealed { status: TaskStatus },

    #[error("{}", skipped_step_message(.from, .to, .required))]
    SkippedStep {
        from: TaskStatus,
        to: TaskStatus,
        required: Option<TaskStatus>,
    },

    #[error("'{to}' is not part of the board workflow")]
    OutsideWorkflow { from: TaskStatus, to: TaskStatus },

    #[error("Only the project owner or the assignee can move task {task_id}")]
    NotPermitted { task_id: TaskId },

    #[error("Only tasks in 'Done' can be approved, task is '{status}'")]
    NotDone { status: TaskStatus },

    #[error("Task {task_id} is not on this board")]
    UnknownTask { task_id: TaskId },

    #[error("Task {task_id} is still being saved")]
    MoveInFlight { task_id: TaskId },
}

fn skipped_step_message(from: &TaskStatus, to: &TaskStatus, required: &Option<TaskStatus>) -> String {
    let mut message = format!(
        "Invalid workflow transition: {from} → {to}. Workflow: {}",
        describe_workflow()
    );
    if let Some(required) = required {
        message.push_str(&format!(". Move to {required} first"));
    }
    message
}
