use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IdentitySummary;

/// Comment entity - free text left on a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Storage-assigned id; `0` until the comment is first saved.
    pub id: i64,
    pub contents: String,
    pub author_id: i64,
    pub todo_id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(contents: String, author_id: i64, todo_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            contents,
            author_id,
            todo_id,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub contents: String,
    pub author: IdentitySummary,
}
