use serde::{Deserialize, Serialize};

use super::IdentitySummary;

/// Manager assignment - links a non-owner identity to a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    /// Storage-assigned id; `0` until the assignment is first saved.
    pub id: i64,
    pub identity_id: i64,
    pub todo_id: i64,
}

impl Manager {
    pub fn new(identity_id: i64, todo_id: i64) -> Self {
        Self {
            id: 0,
            identity_id,
            todo_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// A manager assignment projected with the assigned identity's public fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagerView {
    pub id: i64,
    pub identity: IdentitySummary,
}
