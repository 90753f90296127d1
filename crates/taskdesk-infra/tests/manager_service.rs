mod common;

use std::collections::HashSet;

use taskdesk_core::DomainError;
use taskdesk_core::domain::{AuthUser, Manager, Role};
use taskdesk_core::ports::BaseRepository;

use common::{Harness, auth};

#[tokio::test]
async fn test_save_manager_rejects_self_assignment() {
    let harness = Harness::new();
    let owner = harness.identity("test1@naver.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;

    let result = harness
        .manager_service()
        .save_manager(&auth(&owner), todo.id, owner.id)
        .await;

    assert!(matches!(result, Err(DomainError::SelfAssignmentForbidden)));
}

#[tokio::test]
async fn test_self_assignment_is_refused_for_any_requester() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let stranger = harness.identity("c@c.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;

    let result = harness
        .manager_service()
        .save_manager(&auth(&stranger), todo.id, owner.id)
        .await;

    assert!(matches!(result, Err(DomainError::SelfAssignmentForbidden)));
}

#[tokio::test]
async fn test_save_manager_success_links_todo_and_identity() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let candidate = harness.identity("b@b.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Test Title").await;

    let saved = harness
        .manager_service()
        .save_manager(&auth(&owner), todo.id, candidate.id)
        .await
        .unwrap();

    assert_eq!(saved.identity.id, candidate.id);
    assert_eq!(saved.identity.email, "b@b.com");
    let row = harness.managers.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(row.todo_id, todo.id);
    assert_eq!(row.identity_id, candidate.id);
}

#[tokio::test]
async fn test_save_manager_missing_todo() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;

    let result = harness
        .manager_service()
        .save_manager(&auth(&owner), 404, 2)
        .await;

    assert!(matches!(result, Err(DomainError::TodoNotFound)));
}

#[tokio::test]
async fn test_save_manager_todo_without_owner() {
    let harness = Harness::new();
    let todo = harness.orphan_todo().await;

    let result = harness
        .manager_service()
        .save_manager(&AuthUser::new(1, "a@a.com", Role::User), todo.id, 2)
        .await;

    assert!(matches!(result, Err(DomainError::OwnerMissing)));
}

#[tokio::test]
async fn test_save_manager_by_non_owner() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let stranger = harness.identity("c@c.com", "Passw0rd", Role::User).await;
    let candidate = harness.identity("b@b.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;

    let result = harness
        .manager_service()
        .save_manager(&auth(&stranger), todo.id, candidate.id)
        .await;

    assert!(matches!(result, Err(DomainError::OwnerMismatch)));
}

#[tokio::test]
async fn test_save_manager_candidate_does_not_exist() {
    let harness = Harness::new();
    let owner = harness.identity("test1@naver.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;

    let result = harness
        .manager_service()
        .save_manager(&auth(&owner), todo.id, owner.id + 1)
        .await;

    assert!(matches!(result, Err(DomainError::ManagerIdentityNotFound)));
}

#[tokio::test]
async fn test_delete_manager_registered_to_other_todo() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let candidate = harness.identity("b@b.com", "Passw0rd", Role::User).await;
    let todo_ten = harness.todo(&owner, "ten").await;
    let todo_eleven = harness.todo(&owner, "eleven").await;
    let manager = harness
        .managers
        .save(Manager::new(candidate.id, todo_ten.id))
        .await
        .unwrap();

    let result = harness
        .manager_service()
        .delete_manager(owner.id, todo_eleven.id, manager.id)
        .await;

    assert!(matches!(result, Err(DomainError::ManagerTodoMismatch)));
    assert!(harness.managers.find_by_id(manager.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_manager_by_non_owner() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let stranger = harness.identity("c@c.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;

    let result = harness
        .manager_service()
        .delete_manager(stranger.id, todo.id, 1)
        .await;

    assert!(matches!(result, Err(DomainError::OwnerMismatch)));
}

#[tokio::test]
async fn test_delete_manager_unknown_requester_and_missing_rows() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;
    let service = harness.manager_service();

    assert!(matches!(
        service.delete_manager(owner.id + 100, todo.id, 1).await,
        Err(DomainError::UnknownIdentity)
    ));
    assert!(matches!(
        service.delete_manager(owner.id, todo.id + 100, 1).await,
        Err(DomainError::TodoNotFound)
    ));
    assert!(matches!(
        service.delete_manager(owner.id, todo.id, 1).await,
        Err(DomainError::ManagerNotFound)
    ));
}

#[tokio::test]
async fn test_delete_manager_success() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let candidate = harness.identity("b@b.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;
    let service = harness.manager_service();
    let saved = service
        .save_manager(&auth(&owner), todo.id, candidate.id)
        .await
        .unwrap();

    service
        .delete_manager(owner.id, todo.id, saved.id)
        .await
        .unwrap();

    assert!(service.get_managers(todo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_managers_missing_todo() {
    let harness = Harness::new();

    let result = harness.manager_service().get_managers(1).await;

    assert!(matches!(result, Err(DomainError::TodoNotFound)));
}

#[tokio::test]
async fn test_get_managers_is_stable_without_writes() {
    let harness = Harness::new();
    let owner = harness.identity("a@a.com", "Passw0rd", Role::User).await;
    let todo = harness.todo(&owner, "Title").await;
    let other_todo = harness.todo(&owner, "Other").await;
    let service = harness.manager_service();
    for email in ["b@b.com", "c@c.com", "d@d.com"] {
        let candidate = harness.identity(email, "Passw0rd", Role::User).await;
        service
            .save_manager(&auth(&owner), todo.id, candidate.id)
            .await
            .unwrap();
    }
    let unrelated = harness.identity("e@e.com", "Passw0rd", Role::User).await;
    service
        .save_manager(&auth(&owner), other_todo.id, unrelated.id)
        .await
        .unwrap();

    let first: HashSet<_> = service.get_managers(todo.id).await.unwrap().into_iter().collect();
    let second: HashSet<_> = service.get_managers(todo.id).await.unwrap().into_iter().collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert!(first.iter().all(|m| m.identity.email != "e@e.com"));
}
