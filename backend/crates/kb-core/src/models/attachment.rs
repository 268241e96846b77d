use serde::{Deserialize, Serialize};

/// File attached to a task. `url` is either a link or embedded data-URI content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

impl Attachment {
    pub fn is_embedded(&self) -> bool {
        self.url.starts_with("data:")
    }
}
