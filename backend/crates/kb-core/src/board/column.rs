use crate::{Task, TaskStatus, WORKFLOW_ORDER};

/// Tasks grouped under one workflow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// One column per workflow state, in order. Closed tasks are left out.
pub fn build_columns(tasks: &[Task]) -> Vec<Column<'_>> {
    WORKFLOW_ORDER
        .iter()
        .map(|status| Column {
            status: *status,
            tasks: tasks.iter().filter(|t| t.status == *status).collect(),
        })
        .collect()
}
