use crate::{Task, TaskStatus};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Counters shown above the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub by_status: BTreeMap<TaskStatus, usize>,
    pub total: usize,
    /// Not yet Done or Closed
    pub pending: usize,
    pub done: usize,
    pub closed: usize,
    pub overdue: usize,
}

impl BoardSummary {
    pub fn from_tasks(tasks: &[Task], today: NaiveDate) -> Self {
        let mut summary = Self {
            by_status: TaskStatus::ALL.iter().map(|s| (*s, 0)).collect(),
            ..Self::default()
        };

        for task in tasks {
            *summary.by_status.entry(task.status).or_default() += 1;
            summary.total += 1;
            match task.status {
                TaskStatus::Done => summary.done += 1,
                TaskStatus::Closed => summary.closed += 1,
                _ => summary.pending += 1,
            }
            if task.is_overdue(today) {
                summary.overdue += 1;
            }
        }

        summary
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
