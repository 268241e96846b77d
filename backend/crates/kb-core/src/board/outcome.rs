use crate::{GatewayError, PendingMove, PolicyViolation, TaskId, TaskStatus};

/// Result of releasing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No gesture was in progress.
    Ignored,
    /// Released outside any target.
    Cancelled,
    /// Dropped where it started. No network call.
    Unchanged,
    Rejected(PolicyViolation),
    Pending(PendingMove),
}

/// Result of resolving a [`PendingMove`] with the gateway's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResolution {
    Persisted { task_id: TaskId, status: TaskStatus },
    RolledBack { task_id: TaskId, error: GatewayError },
    /// The board was unmounted or reloaded while the call was outstanding.
    Stale,
}

/// Whole-gesture result for callers that await the gateway inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored,
    Cancelled,
    Unchanged,
    Rejected(PolicyViolation),
    Persisted(TaskStatus),
    RolledBack(GatewayError),
    Stale,
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Persisted(_) | Self::Unchanged)
    }
}

impl From<MoveResolution> for MoveOutcome {
    fn from(resolution: MoveResolution) -> Self {
        match resolution {
            MoveResolution::Persisted { status, .. } => Self::Persisted(status),
            MoveResolution::RolledBack { error, .. } => Self::RolledBack(error),
            MoveResolution::Stale => Self::Stale,
        }
    }
}
