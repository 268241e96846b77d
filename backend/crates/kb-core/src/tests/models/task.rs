use crate::{ActivityAction, IssueType, Priority, Task, TaskPatch, TaskStatus};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn given_server_payload_when_deserialized_then_fields_mapped() {
    // Given
    let payload = json!({
        "_id": "65f1c0ffee",
        "title": "Fix login redirect",
        "description": "Redirect loops on expired session",
        "project_id": "p-1",
        "issue_type": "bug",
        "priority": "High",
        "status": "In Progress",
        "assignee_id": "u-7",
        "assignee_name": "Priya",
        "due_date": "2026-03-01T00:00:00",
        "labels": ["backend", "urgent"],
        "attachments": [{ "name": "trace.txt", "url": "data:text/plain;base64,AAAA" }],
        "links": [{ "relation": "blocks", "ticket_id": "65f1c0ffef" }],
        "sprint_id": null,
        "activities": [{
            "user_id": "u-7",
            "user_name": "Priya",
            "action": "status_change",
            "comment": "",
            "old_value": "To Do",
            "new_value": "In Progress",
            "timestamp": "2026-02-20T10:15:30.123456"
        }],
        "created_at": "2026-02-19T08:00:00"
    });

    // When
    let task: Task = serde_json::from_value(payload).unwrap();

    // Then
    assert_eq!(task.id.as_str(), "65f1c0ffee");
    assert_eq!(task.issue_type, IssueType::Bug);
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 3, 1));
    assert!(task.labels.contains("urgent"));
    assert!(task.attachments[0].is_embedded());
    assert_eq!(task.links[0].ticket_id.as_str(), "65f1c0ffef");
    assert_eq!(task.activities[0].action, ActivityAction::StatusChange);
}

#[test]
fn given_minimal_payload_when_deserialized_then_defaults_applied() {
    let task: Task = serde_json::from_value(json!({
        "id": "t-1",
        "title": "Bare",
        "due_date": ""
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.due_date.is_none());
    assert!(task.labels.is_empty());
    assert!(task.activities.is_empty());
}

#[test]
fn given_unknown_activity_action_when_deserialized_then_kept_as_other() {
    let task: Task = serde_json::from_value(json!({
        "_id": "t-1",
        "title": "Linked",
        "activities": [{ "action": "git_commit", "timestamp": "2026-02-20T10:15:30" }]
    }))
    .unwrap();

    assert_eq!(
        task.activities[0].action,
        ActivityAction::Other("git_commit".to_string())
    );
}

#[test]
fn given_status_patch_when_serialized_then_only_status_sent() {
    let json = serde_json::to_value(TaskPatch::status(TaskStatus::Testing)).unwrap();
    assert_eq!(json, json!({ "status": "Testing" }));
}

#[test]
fn given_unassign_patch_when_serialized_then_null_sent() {
    let patch = TaskPatch {
        assignee_id: Some(None),
        ..TaskPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, json!({ "assignee_id": null }));
}

#[test]
fn given_patch_when_applied_then_only_set_fields_change() {
    let mut task = Task::new("t-1", "Title").with_assignee("u-1");
    let patch = TaskPatch {
        status: Some(TaskStatus::InProgress),
        priority: Some(Priority::Low),
        ..TaskPatch::default()
    };

    task.apply_patch(&patch);

    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.title, "Title");
    assert!(task.is_assigned_to("u-1"));
}

#[test]
fn given_past_due_date_when_checked_then_overdue_unless_sealed() {
    let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
    let yesterday = NaiveDate::from_ymd_opt(2026, 5, 9).unwrap();

    let open = Task::new("t-1", "Open").with_due_date(yesterday);
    let done = Task::new("t-2", "Done")
        .with_due_date(yesterday)
        .with_status(TaskStatus::Done);
    let due_today = Task::new("t-3", "Today").with_due_date(today);

    assert!(open.is_overdue(today));
    assert!(!done.is_overdue(today));
    assert!(!due_today.is_overdue(today));
}

#[test]
fn given_data_uri_attachment_then_embedded() {
    let embedded = crate::Attachment {
        name: "shot.png".into(),
        url: "data:image/png;base64,AAAA".into(),
    };
    let linked = crate::Attachment {
        name: "design".into(),
        url: "https://example.com/design.pdf".into(),
    };

    assert!(embedded.is_embedded());
    assert!(!linked.is_embedded());
}
