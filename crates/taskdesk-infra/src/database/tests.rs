use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use taskdesk_core::domain::{Identity, Manager, Role};
use taskdesk_core::error::RepoError;
use taskdesk_core::ports::{BaseRepository, IdentityRepository, ManagerRepository};

use crate::database::entity::{manager, user};
use crate::database::postgres_repo::{PostgresIdentityRepository, PostgresManagerRepository};

fn user_model(id: i64, email: &str, role: user::UserRole) -> user::Model {
    let now = chrono::Utc::now();
    user::Model {
        id,
        email: email.to_owned(),
        password: "$argon2id$stub".to_owned(),
        user_role: role,
        created_at: now.into(),
        modified_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_identity_by_id_maps_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(
            1,
            "admin@example.com",
            user::UserRole::Admin,
        )]])
        .into_connection();

    let repo = PostgresIdentityRepository::new(db);

    let identity: Option<Identity> = repo.find_by_id(1).await.unwrap();

    let identity = identity.unwrap();
    assert_eq!(identity.email, "admin@example.com");
    assert_eq!(identity.role, Role::Admin);
}

#[tokio::test]
async fn test_save_new_identity_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(
            9,
            "new@example.com",
            user::UserRole::User,
        )]])
        .into_connection();

    let repo = PostgresIdentityRepository::new(db);

    let saved = repo
        .save(Identity::new(
            "new@example.com".into(),
            "$argon2id$stub".into(),
            Role::User,
        ))
        .await
        .unwrap();

    assert_eq!(saved.id, 9);
}

#[tokio::test]
async fn test_find_by_email_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = PostgresIdentityRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_managers_joined_with_identity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![(
            manager::Model {
                id: 5,
                user_id: 2,
                todo_id: 10,
            },
            user_model(2, "b@b.com", user::UserRole::User),
        )]])
        .into_connection();

    let repo = PostgresManagerRepository::new(db);

    let managers = repo.find_by_todo_id_with_identity(10).await.unwrap();

    assert_eq!(managers.len(), 1);
    assert_eq!(managers[0].id, 5);
    assert_eq!(managers[0].identity.email, "b@b.com");
}

#[tokio::test]
async fn test_delete_missing_manager_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresManagerRepository::new(db);

    let result = BaseRepository::<Manager, i64>::delete(&repo, 5).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}
