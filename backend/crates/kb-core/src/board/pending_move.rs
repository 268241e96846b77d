use crate::{GatewayError, TaskGateway, TaskId, TaskPatch, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Drag,
    Approval,
}

/// A validated move waiting for the persistence gateway.
///
/// Hand it back to [`crate::BoardController::complete`] with the gateway result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub task_id: TaskId,
    pub from: TaskStatus,
    pub to: TaskStatus,
    pub kind: MoveKind,
    pub(crate) epoch: u64,
    pub(crate) seq: u64,
}

impl PendingMove {
    pub fn patch(&self) -> TaskPatch {
        TaskPatch::status(self.to)
    }

    /// Issue the gateway call for this move.
    pub async fn send(&self, gateway: &dyn TaskGateway) -> Result<(), GatewayError> {
        match self.kind {
            MoveKind::Drag => gateway.update_task(&self.task_id, &self.patch()).await,
            MoveKind::Approval => gateway.approve_task(&self.task_id).await,
        }
    }
}
