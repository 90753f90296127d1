//! In-memory repositories - used when no database is configured, and in tests.
//!
//! All repositories share one [`InMemoryDatabase`] so joins (todo owner,
//! manager identity, comment author) see the same rows.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use taskdesk_core::domain::{
    Comment, CommentView, Identity, IdentitySummary, Manager, ManagerView, Page, PageRequest,
    Todo, TodoDetail,
};
use taskdesk_core::error::RepoError;
use taskdesk_core::ports::{
    BaseRepository, CommentRepository, IdentityRepository, ManagerRepository, TodoRepository,
};

/// Rows keyed by id plus the next id to hand out.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Insert-or-update keyed by `id`; `0` inserts under a fresh id, any
    /// other id must already exist.
    fn upsert(&mut self, id: i64, row: impl FnOnce(i64) -> T) -> Result<i64, RepoError> {
        let id = match id {
            0 => self.next_id(),
            id if self.rows.contains_key(&id) => id,
            _ => return Err(RepoError::NotFound),
        };
        self.rows.insert(id, row(id));
        Ok(id)
    }

    fn remove(&mut self, id: i64) -> Result<(), RepoError> {
        self.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

/// Shared tables behind async read/write locks.
#[derive(Default)]
pub struct InMemoryDatabase {
    identities: RwLock<Table<Identity>>,
    todos: RwLock<Table<Todo>>,
    managers: RwLock<Table<Manager>>,
    comments: RwLock<Table<Comment>>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    async fn identity_summary(&self, id: i64) -> Option<IdentitySummary> {
        self.identities
            .read()
            .await
            .rows
            .get(&id)
            .map(Identity::summary)
    }
}

pub struct InMemoryIdentityRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryIdentityRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Identity, i64> for InMemoryIdentityRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, RepoError> {
        Ok(self.db.identities.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: Identity) -> Result<Identity, RepoError> {
        let mut table = self.db.identities.write().await;

        // Unique e-mail, mirroring the `users.email` constraint.
        let taken = table
            .rows
            .values()
            .any(|row| row.email == entity.email && row.id != entity.id);
        if taken {
            return Err(RepoError::Constraint("users.email must be unique".to_string()));
        }

        entity.id = table.upsert(entity.id, |id| Identity {
            id,
            ..entity.clone()
        })?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.db.identities.write().await.remove(id)
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepoError> {
        Ok(self
            .db
            .identities
            .read()
            .await
            .rows
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        Ok(self
            .db
            .identities
            .read()
            .await
            .rows
            .values()
            .any(|row| row.email == email))
    }
}

pub struct InMemoryTodoRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryTodoRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }

    async fn with_owner(&self, todo: Todo) -> Option<TodoDetail> {
        let owner = self.db.identity_summary(todo.owner_id?).await?;
        Some(TodoDetail { todo, owner })
    }
}

#[async_trait]
impl BaseRepository<Todo, i64> for InMemoryTodoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, RepoError> {
        Ok(self.db.todos.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: Todo) -> Result<Todo, RepoError> {
        let mut table = self.db.todos.write().await;
        entity.id = table.upsert(entity.id, |id| Todo {
            id,
            ..entity.clone()
        })?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.db.todos.write().await.remove(id)
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_by_id_with_owner(&self, id: i64) -> Result<Option<TodoDetail>, RepoError> {
        let todo = self.db.todos.read().await.rows.get(&id).cloned();
        match todo {
            Some(todo) => Ok(self.with_owner(todo).await),
            None => Ok(None),
        }
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<TodoDetail>, RepoError> {
        let mut todos: Vec<Todo> = self.db.todos.read().await.rows.values().cloned().collect();
        todos.sort_by(|a, b| b.modified_at.cmp(&a.modified_at).then(b.id.cmp(&a.id)));
        let total_items = todos.len() as u64;

        let mut items = Vec::new();
        for todo in todos
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
        {
            if let Some(detail) = self.with_owner(todo).await {
                items.push(detail);
            }
        }

        Ok(Page {
            items,
            page: request.page,
            size: request.size,
            total_items,
        })
    }
}

pub struct InMemoryManagerRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryManagerRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Manager, i64> for InMemoryManagerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Manager>, RepoError> {
        Ok(self.db.managers.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: Manager) -> Result<Manager, RepoError> {
        let mut table = self.db.managers.write().await;
        entity.id = table.upsert(entity.id, |id| Manager {
            id,
            ..entity.clone()
        })?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.db.managers.write().await.remove(id)
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    async fn find_by_todo_id_with_identity(
        &self,
        todo_id: i64,
    ) -> Result<Vec<ManagerView>, RepoError> {
        let managers: Vec<Manager> = self
            .db
            .managers
            .read()
            .await
            .rows
            .values()
            .filter(|m| m.todo_id == todo_id)
            .cloned()
            .collect();

        let mut views = Vec::with_capacity(managers.len());
        for manager in managers {
            if let Some(identity) = self.db.identity_summary(manager.identity_id).await {
                views.push(ManagerView {
                    id: manager.id,
                    identity,
                });
            }
        }
        Ok(views)
    }
}

pub struct InMemoryCommentRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryCommentRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        Ok(self.db.comments.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: Comment) -> Result<Comment, RepoError> {
        let mut table = self.db.comments.write().await;
        entity.id = table.upsert(entity.id, |id| Comment {
            id,
            ..entity.clone()
        })?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.db.comments.write().await.remove(id)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_todo_id_with_author(
        &self,
        todo_id: i64,
    ) -> Result<Vec<CommentView>, RepoError> {
        let comments: Vec<Comment> = self
            .db
            .comments
            .read()
            .await
            .rows
            .values()
            .filter(|c| c.todo_id == todo_id)
            .cloned()
            .collect();

        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            if let Some(author) = self.db.identity_summary(comment.author_id).await {
                views.push(CommentView {
                    id: comment.id,
                    contents: comment.contents,
                    author,
                });
            }
        }
        Ok(views)
    }
}
