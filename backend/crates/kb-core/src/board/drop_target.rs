use crate::{TaskId, TaskStatus};

/// What the pointer is over: a whole column, or another card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(TaskStatus),
    Task(TaskId),
}
