//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use taskdesk_core::domain::{
    CommentView, Identity, ManagerView, Page, PageRequest, TodoDetail,
};
use taskdesk_core::error::RepoError;
use taskdesk_core::ports::{
    CommentRepository, IdentityRepository, ManagerRepository, TodoRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::manager::{self, Entity as ManagerEntity};
use super::entity::todo::{self, Entity as TodoEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL identity repository.
pub type PostgresIdentityRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL todo repository.
pub type PostgresTodoRepository = PostgresBaseRepository<TodoEntity>;

/// PostgreSQL manager repository.
pub type PostgresManagerRepository = PostgresBaseRepository<ManagerEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Mask the local part of an e-mail to keep PII out of logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

fn detail(todo: todo::Model, owner: Option<user::Model>) -> Option<TodoDetail> {
    let owner = owner?;
    Some(TodoDetail {
        todo: todo.into(),
        owner: owner.into(),
    })
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.map(Into::into))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_by_id_with_owner(&self, id: i64) -> Result<Option<TodoDetail>, RepoError> {
        let result = TodoEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.and_then(|(todo, owner)| detail(todo, owner)))
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<TodoDetail>, RepoError> {
        let paginator = TodoEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(todo::Column::ModifiedAt)
            .order_by_desc(todo::Column::Id)
            .paginate(&self.db, request.size);

        let total_items = paginator.num_items().await.map_err(repo_err)?;
        let rows = paginator
            .fetch_page(request.page.saturating_sub(1))
            .await
            .map_err(repo_err)?;

        Ok(Page {
            items: rows
                .into_iter()
                .filter_map(|(todo, owner)| detail(todo, owner))
                .collect(),
            page: request.page,
            size: request.size,
            total_items,
        })
    }
}

#[async_trait]
impl ManagerRepository for PostgresManagerRepository {
    async fn find_by_todo_id_with_identity(
        &self,
        todo_id: i64,
    ) -> Result<Vec<ManagerView>, RepoError> {
        let rows = ManagerEntity::find()
            .filter(manager::Column::TodoId.eq(todo_id))
            .find_also_related(UserEntity)
            .order_by_asc(manager::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(manager, identity)| {
                identity.map(|identity| ManagerView {
                    id: manager.id,
                    identity: identity.into(),
                })
            })
            .collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_todo_id_with_author(
        &self,
        todo_id: i64,
    ) -> Result<Vec<CommentView>, RepoError> {
        let rows = CommentEntity::find()
            .filter(comment::Column::TodoId.eq(todo_id))
            .find_also_related(UserEntity)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| {
                author.map(|author| CommentView {
                    id: comment.id,
                    contents: comment.contents,
                    author: author.into(),
                })
            })
            .collect())
    }
}
