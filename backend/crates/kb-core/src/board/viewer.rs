use crate::Task;

/// Who is looking at the board. Owners may move any card, members only their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<String>,
    pub is_owner: bool,
}

impl Viewer {
    pub fn owner(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_owner: true,
        }
    }

    pub fn member(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_owner: false,
        }
    }

    pub fn can_move(&self, task: &Task) -> bool {
        if self.is_owner {
            return true;
        }
        match self.user_id {
            Some(ref user_id) => task.is_assigned_to(user_id),
            // No session: nothing to gate on
            None => true,
        }
    }

    pub fn can_approve(&self) -> bool {
        self.is_owner
    }
}
