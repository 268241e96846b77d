use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task on the board.
///
/// The first five variants form the drag-and-drop workflow. `Closed` is the
/// terminal state reached only through an explicit approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Dev Complete")]
    DevComplete,
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "Closed")]
    Closed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 6] = [
        Self::ToDo,
        Self::InProgress,
        Self::Testing,
        Self::DevComplete,
        Self::Done,
        Self::Closed,
    ];

    /// Wire and display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Testing => "Testing",
            Self::DevComplete => "Dev Complete",
            Self::Done => "Done",
            Self::Closed => "Closed",
        }
    }

    /// Sealed statuses cannot be left through the board.
    pub fn is_sealed(&self) -> bool {
        matches!(self, Self::Done | Self::Closed)
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "todo" => Ok(Self::ToDo),
            "inprogress" => Ok(Self::InProgress),
            "testing" => Ok(Self::Testing),
            "devcomplete" => Ok(Self::DevComplete),
            "done" => Ok(Self::Done),
            "closed" => Ok(Self::Closed),
            _ => Err(CoreError::InvalidTaskStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
