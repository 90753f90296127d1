use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IdentitySummary;

/// Todo entity - a task record owned by the identity that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned id; `0` until the todo is first saved.
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    /// Set once at creation. `None` only if storage lost the owner row.
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new, unsaved todo owned by `owner_id`.
    pub fn new(title: String, contents: String, weather: String, owner_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            contents,
            weather,
            owner_id: Some(owner_id),
            created_at: now,
            modified_at: now,
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

/// A todo joined with its owner's public fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDetail {
    pub todo: Todo,
    pub owner: IdentitySummary,
}
