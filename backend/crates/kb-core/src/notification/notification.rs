use crate::{PolicyViolation, TaskId, TaskStatus};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// User feedback emitted by the board. Advisory only; nothing reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Moved { task_id: TaskId, to: TaskStatus },
    Approved { task_id: TaskId },
    Rejected { task_id: TaskId, violation: PolicyViolation },
    Failed { task_id: TaskId, message: String },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Moved { .. } | Self::Approved { .. } => Severity::Success,
            Self::Rejected { .. } | Self::Failed { .. } => Severity::Error,
        }
    }

    pub fn task_id(&self) -> &TaskId {
        match self {
            Self::Moved { task_id, .. }
            | Self::Approved { task_id }
            | Self::Rejected { task_id, .. }
            | Self::Failed { task_id, .. } => task_id,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moved { to, .. } => write!(f, "Task moved to {to}"),
            Self::Approved { .. } => write!(f, "Task approved and closed"),
            Self::Rejected { violation, .. } => write!(f, "{violation}"),
            Self::Failed { message, .. } => write!(f, "Failed to update task: {message}"),
        }
    }
}
