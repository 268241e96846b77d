use crate::tests::sample_tasks;
use crate::{BoardController, BoardSummary, RecordingNotifier, Task, TaskStatus, Viewer};

use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn given_sample_board_then_counts_by_bucket() {
    let summary = BoardSummary::from_tasks(&sample_tasks(), today());

    assert_eq!(summary.total, 6);
    assert_eq!(summary.pending, 4);
    assert_eq!(summary.done, 1);
    assert_eq!(summary.closed, 1);
    assert_eq!(summary.overdue, 0);
    assert_eq!(summary.count(TaskStatus::Testing), 1);
}

#[test]
fn given_empty_board_then_every_status_reports_zero() {
    let summary = BoardSummary::from_tasks(&[], today());

    assert_eq!(summary.by_status.len(), TaskStatus::ALL.len());
    assert!(TaskStatus::ALL.iter().all(|s| summary.count(*s) == 0));
}

#[test]
fn given_past_due_dates_then_only_open_tasks_are_overdue() {
    let yesterday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let tasks = vec![
        Task::new("a", "late").with_due_date(yesterday),
        Task::new("b", "late but done")
            .with_status(TaskStatus::Done)
            .with_due_date(yesterday),
        Task::new("c", "due today").with_due_date(today()),
    ];

    let summary = BoardSummary::from_tasks(&tasks, today());

    assert_eq!(summary.overdue, 1);
}

#[test]
fn given_controller_then_summary_reflects_display() {
    let board = BoardController::new(
        sample_tasks(),
        Viewer::owner("owner"),
        RecordingNotifier::new(),
    );

    assert_eq!(board.summary(today()).total, 6);
}
