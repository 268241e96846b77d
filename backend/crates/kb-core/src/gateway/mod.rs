//! Persistence gateway: the network operations the board depends on.

use crate::{TaskId, TaskPatch};

use async_trait::async_trait;
use thiserror::Error;

/// Human-readable persistence failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Persist a partial update of one task.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), GatewayError>;

    /// Approve a `Done` task, moving it to `Closed`.
    async fn approve_task(&self, id: &TaskId) -> Result<(), GatewayError>;
}
