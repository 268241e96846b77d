use crate::{TaskId, TaskStatus};

/// Per-gesture state. `original` is always the server-confirmed status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
        original: TaskStatus,
    },
    Previewing {
        task_id: TaskId,
        original: TaskStatus,
        candidate: TaskStatus,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging { task_id, .. } | Self::Previewing { task_id, .. } => Some(task_id),
        }
    }
}
