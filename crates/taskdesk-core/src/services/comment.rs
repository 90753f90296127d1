//! Comments on todos.

use std::sync::Arc;

use crate::domain::{AuthUser, Comment, CommentView};
use crate::error::DomainError;
use crate::ports::{CommentRepository, IdentityRepository, TodoRepository};

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    identities: Arc<dyn IdentityRepository>,
    todos: Arc<dyn TodoRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        identities: Arc<dyn IdentityRepository>,
        todos: Arc<dyn TodoRepository>,
    ) -> Self {
        Self {
            comments,
            identities,
            todos,
        }
    }

    pub async fn save_comment(
        &self,
        caller: &AuthUser,
        todo_id: i64,
        contents: &str,
    ) -> Result<CommentView, DomainError> {
        let todo = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or(DomainError::TodoNotFound)?;

        let author = self
            .identities
            .find_by_id(caller.id)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        let saved = self
            .comments
            .save(Comment::new(contents.to_string(), author.id, todo.id))
            .await?;

        Ok(CommentView {
            id: saved.id,
            contents: saved.contents,
            author: author.summary(),
        })
    }

    pub async fn get_comments(&self, todo_id: i64) -> Result<Vec<CommentView>, DomainError> {
        Ok(self.comments.find_by_todo_id_with_author(todo_id).await?)
    }

    /// Privileged deletion; reached only through the admin gate.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), DomainError> {
        self.comments
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound)?;

        self.comments.delete(comment_id).await?;
        Ok(())
    }
}
