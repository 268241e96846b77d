use crate::TaskStatus;

/// Drag-and-drop column order. `Closed` is reached only by approval.
pub const WORKFLOW_ORDER: [TaskStatus; 5] = [
    TaskStatus::ToDo,
    TaskStatus::InProgress,
    TaskStatus::Testing,
    TaskStatus::DevComplete,
    TaskStatus::Done,
];

/// Index of `status` in [`WORKFLOW_ORDER`], `None` for out-of-band states.
pub fn workflow_position(status: TaskStatus) -> Option<usize> {
    WORKFLOW_ORDER.iter().position(|s| *s == status)
}

/// A move is legal when it goes backward (or stays put), or exactly one step forward.
pub fn is_valid_transition(from: TaskStatus, to: TaskStatus) -> bool {
    match (workflow_position(from), workflow_position(to)) {
        (Some(from_index), Some(to_index)) => to_index <= from_index || to_index == from_index + 1,
        _ => false,
    }
}

/// The state a task must be in before it can enter `target`.
pub fn required_predecessor(target: TaskStatus) -> Option<TaskStatus> {
    match workflow_position(target) {
        Some(index) if index > 0 => Some(WORKFLOW_ORDER[index - 1]),
        _ => None,
    }
}

pub fn describe_workflow() -> String {
    WORKFLOW_ORDER
        .iter()
        .map(TaskStatus::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}
