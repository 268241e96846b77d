mod models;
mod notification;
mod summary;

use crate::{GatewayError, Task, TaskGateway, TaskId, TaskPatch, TaskStatus};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Gateway double that records calls and fails on demand.
#[derive(Default, Clone)]
pub(crate) struct MockGateway {
    updates: Arc<Mutex<Vec<(TaskId, TaskPatch)>>>,
    approvals: Arc<Mutex<Vec<TaskId>>>,
    failure: Option<String>,
}

impl MockGateway {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn updates(&self) -> Vec<(TaskId, TaskPatch)> {
        self.updates.lock().unwrap().clone()
    }

    pub(crate) fn approvals(&self) -> Vec<TaskId> {
        self.approvals.lock().unwrap().clone()
    }

    fn result(&self) -> Result<(), GatewayError> {
        match self.failure {
            Some(ref message) => Err(GatewayError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TaskGateway for MockGateway {
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), GatewayError> {
        self.updates.lock().unwrap().push((id.clone(), patch.clone()));
        self.result()
    }

    async fn approve_task(&self, id: &TaskId) -> Result<(), GatewayError> {
        self.approvals.lock().unwrap().push(id.clone());
        self.result()
    }
}

/// One task per workflow column plus a closed one.
pub(crate) fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("t-todo", "Write login form").with_status(TaskStatus::ToDo),
        Task::new("t-progress", "Wire API client")
            .with_status(TaskStatus::InProgress)
            .with_assignee("alice"),
        Task::new("t-testing", "Regression pass").with_status(TaskStatus::Testing),
        Task::new("t-devcomplete", "Refactor cache").with_status(TaskStatus::DevComplete),
        Task::new("t-done", "Ship onboarding").with_status(TaskStatus::Done),
        Task::new("t-closed", "Old epic").with_status(TaskStatus::Closed),
    ]
}

pub(crate) fn id(value: &str) -> TaskId {
    TaskId::from(value)
}
