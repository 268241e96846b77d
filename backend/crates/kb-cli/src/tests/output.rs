use crate::output;

use kb_core::{
    BoardController, GatewayError, MoveOutcome, Notification, PolicyViolation, RecordingNotifier,
    Task, TaskId, TaskStatus, Viewer,
};

use chrono::NaiveDate;
use serde_json::Value;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn board() -> BoardController {
    let tasks = vec![
        Task::new("t1", "Write login form"),
        Task::new("t2", "Wire API client")
            .with_status(TaskStatus::InProgress)
            .with_assignee("alice")
            .with_due_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        Task::new("t3", "Old epic").with_status(TaskStatus::Closed),
    ];
    BoardController::new(tasks, Viewer::owner("owner"), RecordingNotifier::new())
}

#[test]
fn given_board_then_text_lists_columns_in_workflow_order() {
    let rendered = output::board("p1", &board(), today(), false).unwrap();

    let text = rendered.text;
    let to_do = text.find("To Do (1)").unwrap();
    let in_progress = text.find("In Progress (1)").unwrap();
    let done = text.find("Done (0)").unwrap();
    assert!(to_do < in_progress && in_progress < done);
    assert!(text.contains("t2  Wire API client  @alice  (overdue)"));
    assert!(text.contains("Closed: 1"));
    assert!(text.starts_with("Project p1: 3 tasks"));
}

#[test]
fn given_board_as_json_then_columns_and_summary_present() {
    let rendered = output::board("p1", &board(), today(), true).unwrap();

    let value: Value = serde_json::from_str(&rendered.text).unwrap();
    assert_eq!(value["columns"].as_array().unwrap().len(), 5);
    assert_eq!(value["columns"][1]["status"], "In Progress");
    assert_eq!(value["columns"][1]["tasks"][0]["_id"], "t2");
    assert_eq!(value["closed"].as_array().unwrap().len(), 1);
    assert_eq!(value["summary"]["overdue"], 1);
}

#[test]
fn given_persisted_move_then_notification_printed() {
    let id = TaskId::from("t1");
    let notifications = [Notification::Moved {
        task_id: id.clone(),
        to: TaskStatus::InProgress,
    }];

    let rendered = output::move_outcome(
        &id,
        &MoveOutcome::Persisted(TaskStatus::InProgress),
        &notifications,
        false,
    )
    .unwrap();

    assert!(rendered.success);
    assert_eq!(rendered.text, "Task moved to In Progress");
}

#[test]
fn given_rolled_back_move_as_json_then_failure_with_message() {
    let rendered = output::move_outcome(
        &TaskId::from("t1"),
        &MoveOutcome::RolledBack(GatewayError::new("HTTP 500")),
        &[],
        true,
    )
    .unwrap();

    assert!(!rendered.success);
    let value: Value = serde_json::from_str(&rendered.text).unwrap();
    assert_eq!(value["outcome"], "rolled_back");
    assert_eq!(value["message"], "HTTP 500");
}

#[test]
fn given_unchanged_move_then_success() {
    let rendered =
        output::move_outcome(&TaskId::from("t1"), &MoveOutcome::Unchanged, &[], false).unwrap();

    assert!(rendered.success);
    assert!(rendered.text.contains("nothing to do"));
}

#[test]
fn given_refused_drag_then_failure_names_reason() {
    let id = TaskId::from("t9");

    let rendered = output::refused(
        &id,
        PolicyViolation::UnknownTask { task_id: id.clone() },
        false,
    )
    .unwrap();

    assert!(!rendered.success);
    assert_eq!(rendered.text, "Task t9 is not on this board");
}

#[test]
fn given_skipped_step_then_check_fails_with_hint() {
    let rendered = output::workflow_check(TaskStatus::ToDo, TaskStatus::Testing, false).unwrap();

    assert!(!rendered.success);
    assert!(rendered.text.contains("Move to In Progress first"));
}

#[test]
fn given_done_to_dev_complete_then_sealed_but_valid_transition_in_json() {
    let rendered =
        output::workflow_check(TaskStatus::Done, TaskStatus::DevComplete, true).unwrap();

    let value: Value = serde_json::from_str(&rendered.text).unwrap();
    assert_eq!(value["allowed"], false);
    assert_eq!(value["valid_transition"], true);
}

#[test]
fn given_one_step_forward_then_allowed() {
    let rendered =
        output::workflow_check(TaskStatus::Testing, TaskStatus::DevComplete, false).unwrap();

    assert!(rendered.success);
    assert_eq!(rendered.text, "Allowed: Testing → Dev Complete");
}
