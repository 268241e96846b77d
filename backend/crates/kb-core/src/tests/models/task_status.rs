use crate::{IssueType, LinkKind, Priority, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::ToDo.as_str(), "To Do");
    assert_eq!(TaskStatus::InProgress.as_str(), "In Progress");
    assert_eq!(TaskStatus::DevComplete.as_str(), "Dev Complete");
    assert_eq!(TaskStatus::Closed.as_str(), "Closed");
}

#[test]
fn test_task_status_from_str_accepts_display_and_cli_forms() {
    assert_eq!(TaskStatus::from_str("In Progress").unwrap(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from_str("in_progress").unwrap(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from_str("in-progress").unwrap(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::ToDo);
    assert_eq!(TaskStatus::from_str("DEV COMPLETE").unwrap(), TaskStatus::DevComplete);
    assert!(TaskStatus::from_str("Incomplete").is_err());
}

#[test]
fn test_task_status_serializes_to_display_string() {
    let json = serde_json::to_string(&TaskStatus::DevComplete).unwrap();
    assert_eq!(json, "\"Dev Complete\"");

    let parsed: TaskStatus = serde_json::from_str("\"To Do\"").unwrap();
    assert_eq!(parsed, TaskStatus::ToDo);
}

#[test]
fn test_sealed_statuses() {
    assert!(TaskStatus::Done.is_sealed());
    assert!(TaskStatus::Closed.is_sealed());
    assert!(!TaskStatus::DevComplete.is_sealed());
    assert!(!TaskStatus::ToDo.is_sealed());
}

#[test]
fn test_issue_type_and_priority_from_str() {
    assert_eq!(IssueType::from_str("bug").unwrap(), IssueType::Bug);
    assert_eq!(IssueType::from_str("Epic").unwrap(), IssueType::Epic);
    assert!(IssueType::from_str("spike").is_err());

    assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
    assert_eq!(Priority::default(), Priority::Medium);
    assert!(Priority::from_str("critical").is_err());
}

#[test]
fn test_link_kind_from_str() {
    assert!(LinkKind::from_str("depends_on").is_err());
    assert_eq!(LinkKind::from_str("blocked_by").unwrap(), LinkKind::BlockedBy);
}
