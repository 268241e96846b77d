use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Created,
    StatusChange,
    Comment,
    Assigned,
    Approved,
    #[serde(untagged)]
    Other(String),
}

/// One append-only record in a task's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "user_id", default)]
    pub author_id: Option<String>,
    #[serde(rename = "user_name", default)]
    pub author_name: Option<String>,
    pub action: ActivityAction,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    /// UTC, without offset on the wire
    pub timestamp: NaiveDateTime,
}
