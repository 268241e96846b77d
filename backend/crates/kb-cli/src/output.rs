use crate::CliResult;

use kb_core::{
    BoardController, MoveOutcome, Notification, PolicyViolation, Task, TaskId, TaskStatus,
    Transition, is_valid_transition,
};

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde_json::{Value, json};

/// What a command printed and whether it should exit successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }

    fn from_json(value: &Value, success: bool) -> CliResult<Self> {
        Ok(Self {
            text: serde_json::to_string_pretty(value)?,
            success,
        })
    }
}

// =========================================================================
// Board
// =========================================================================

pub(crate) fn board(
    project_id: &str,
    board: &BoardController,
    today: NaiveDate,
    as_json: bool,
) -> CliResult<CommandOutput> {
    let summary = board.summary(today);
    let columns = board.columns();
    let closed = board.closed_tasks();

    if as_json {
        let columns: Vec<Value> = columns
            .iter()
            .map(|c| json!({ "status": c.status, "tasks": c.tasks }))
            .collect();
        return CommandOutput::from_json(
            &json!({
                "project_id": project_id,
                "columns": columns,
                "closed": closed,
                "summary": summary,
            }),
            true,
        );
    }

    let mut text = format!(
        "Project {project_id}: {} tasks ({} pending, {} done, {} closed, {} overdue)\n",
        summary.total, summary.pending, summary.done, summary.closed, summary.overdue
    );
    for column in &columns {
        let _ = writeln!(text, "\n{} ({})", column.status, column.tasks.len());
        for task in &column.tasks {
            let _ = writeln!(text, "  {}", task_line(task, today));
        }
    }
    let _ = write!(text, "\nClosed: {}", closed.len());

    Ok(CommandOutput::ok(text))
}

fn task_line(task: &Task, today: NaiveDate) -> String {
    let mut line = format!("{}  {}", task.id, task.title);
    if let Some(assignee) = task.assignee_name.as_ref().or(task.assignee_id.as_ref()) {
        let _ = write!(line, "  @{assignee}");
    }
    if task.is_overdue(today) {
        line.push_str("  (overdue)");
    }
    line
}

// =========================================================================
// Task
// =========================================================================

pub(crate) fn task(task: &Task, as_json: bool) -> CliResult<CommandOutput> {
    if as_json {
        return CommandOutput::from_json(&json!({ "task": task }), true);
    }

    let mut text = format!("{}  {}\n", task.id, task.title);
    let _ = writeln!(text, "  status:   {}", task.status);
    let _ = writeln!(text, "  type:     {}", task.issue_type);
    let _ = writeln!(text, "  priority: {}", task.priority);
    if let Some(ref assignee) = task.assignee_id {
        let _ = writeln!(text, "  assignee: {assignee}");
    }
    if let Some(due) = task.due_date {
        let _ = writeln!(text, "  due:      {due}");
    }
    if !task.labels.is_empty() {
        let labels: Vec<&str> = task.labels.iter().map(String::as_str).collect();
        let _ = writeln!(text, "  labels:   {}", labels.join(", "));
    }
    if !task.description.is_empty() {
        let _ = write!(text, "\n{}", task.description);
    }

    Ok(CommandOutput::ok(text.trim_end()))
}

// =========================================================================
// Moves
// =========================================================================

pub(crate) fn move_outcome(
    task_id: &TaskId,
    outcome: &MoveOutcome,
    notifications: &[Notification],
    as_json: bool,
) -> CliResult<CommandOutput> {
    let (label, status, message) = match outcome {
        MoveOutcome::Persisted(status) => ("persisted", Some(*status), None),
        MoveOutcome::Unchanged => ("unchanged", None, None),
        MoveOutcome::Rejected(violation) => ("rejected", None, Some(violation.to_string())),
        MoveOutcome::RolledBack(error) => ("rolled_back", None, Some(error.message.clone())),
        MoveOutcome::Cancelled => ("cancelled", None, None),
        MoveOutcome::Ignored => ("ignored", None, None),
        MoveOutcome::Stale => ("stale", None, None),
    };
    let success = outcome.is_success();

    if as_json {
        return CommandOutput::from_json(
            &json!({
                "task_id": task_id,
                "outcome": label,
                "status": status,
                "message": message,
            }),
            success,
        );
    }

    let text = if notifications.is_empty() {
        match outcome {
            MoveOutcome::Unchanged => format!("Task {task_id} is already there, nothing to do"),
            MoveOutcome::Rejected(violation) => violation.to_string(),
            MoveOutcome::RolledBack(error) => format!("Failed to update task: {error}"),
            _ => format!("Task {task_id}: {label}"),
        }
    } else {
        notifications
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(CommandOutput { text, success })
}

/// The board would not even lift the card
pub(crate) fn refused(
    task_id: &TaskId,
    violation: PolicyViolation,
    as_json: bool,
) -> CliResult<CommandOutput> {
    move_outcome(task_id, &MoveOutcome::Rejected(violation), &[], as_json)
}

// =========================================================================
// Workflow
// =========================================================================

pub(crate) fn workflow_check(
    from: TaskStatus,
    to: TaskStatus,
    as_json: bool,
) -> CliResult<CommandOutput> {
    let result = Transition::new(from, to).check();
    let allowed = result.is_ok();

    if as_json {
        return CommandOutput::from_json(
            &json!({
                "from": from,
                "to": to,
                "allowed": allowed,
                "valid_transition": is_valid_transition(from, to),
                "message": result.err().map(|v| v.to_string()),
            }),
            allowed,
        );
    }

    Ok(match result {
        Ok(()) => CommandOutput::ok(format!("Allowed: {from} → {to}")),
        Err(violation) => CommandOutput::failed(violation.to_string()),
    })
}
