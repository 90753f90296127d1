use async_trait::async_trait;

use crate::domain::{
    Comment, CommentView, Identity, Manager, ManagerView, Page, PageRequest, Todo, TodoDetail,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `save` inserts entities whose id is `0` and returns them with the
/// storage-assigned id; any other id is an update.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Identity repository. Email uniqueness is enforced by storage and reported
/// as [`RepoError::Constraint`] from `save`.
#[async_trait]
pub trait IdentityRepository: BaseRepository<Identity, i64> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepoError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait TodoRepository: BaseRepository<Todo, i64> {
    /// Load a todo joined with its owner.
    async fn find_by_id_with_owner(&self, id: i64) -> Result<Option<TodoDetail>, RepoError>;

    /// Page through todos, most recently modified first.
    async fn find_page(&self, request: PageRequest) -> Result<Page<TodoDetail>, RepoError>;
}

#[async_trait]
pub trait ManagerRepository: BaseRepository<Manager, i64> {
    async fn find_by_todo_id_with_identity(
        &self,
        todo_id: i64,
    ) -> Result<Vec<ManagerView>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    async fn find_by_todo_id_with_author(
        &self,
        todo_id: i64,
    ) -> Result<Vec<CommentView>, RepoError>;
}
