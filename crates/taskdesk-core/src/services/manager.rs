//! Assignment rule engine: who may be attached to a todo as a manager.

use std::sync::Arc;

use crate::domain::{AuthUser, Manager, ManagerView};
use crate::error::DomainError;
use crate::ports::{IdentityRepository, ManagerRepository, TodoRepository};

#[derive(Clone)]
pub struct ManagerService {
    managers: Arc<dyn ManagerRepository>,
    identities: Arc<dyn IdentityRepository>,
    todos: Arc<dyn TodoRepository>,
}

impl ManagerService {
    pub fn new(
        managers: Arc<dyn ManagerRepository>,
        identities: Arc<dyn IdentityRepository>,
        todos: Arc<dyn TodoRepository>,
    ) -> Self {
        Self {
            managers,
            identities,
            todos,
        }
    }

    /// Assign `manager_identity_id` as a manager of `todo_id`.
    ///
    /// Only the todo's creator may assign managers, and never themselves.
    /// Self-assignment is refused before the requester is compared with the
    /// creator, so any requester naming the creator gets
    /// `SelfAssignmentForbidden` rather than `OwnerMismatch`.
    pub async fn save_manager(
        &self,
        requester: &AuthUser,
        todo_id: i64,
        manager_identity_id: i64,
    ) -> Result<ManagerView, DomainError> {
        let todo = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or(DomainError::TodoNotFound)?;

        let owner_id = todo.owner_id.ok_or(DomainError::OwnerMissing)?;
        if manager_identity_id == owner_id {
            return Err(DomainError::SelfAssignmentForbidden);
        }
        if owner_id != requester.id {
            return Err(DomainError::OwnerMismatch);
        }

        let candidate = self
            .identities
            .find_by_id(manager_identity_id)
            .await?
            .ok_or(DomainError::ManagerIdentityNotFound)?;

        let saved = self
            .managers
            .save(Manager::new(candidate.id, todo.id))
            .await?;

        Ok(ManagerView {
            id: saved.id,
            identity: candidate.summary(),
        })
    }

    /// Every manager of `todo_id` with the assigned identity's public fields.
    pub async fn get_managers(&self, todo_id: i64) -> Result<Vec<ManagerView>, DomainError> {
        let todo = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or(DomainError::TodoNotFound)?;

        Ok(self.managers.find_by_todo_id_with_identity(todo.id).await?)
    }

    /// Remove manager `manager_id` from `todo_id`. The requester must be the
    /// todo's creator and the manager row must belong to that todo.
    pub async fn delete_manager(
        &self,
        requester_id: i64,
        todo_id: i64,
        manager_id: i64,
    ) -> Result<(), DomainError> {
        let requester = self
            .identities
            .find_by_id(requester_id)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        let todo = self
            .todos
            .find_by_id(todo_id)
            .await?
            .ok_or(DomainError::TodoNotFound)?;

        if todo.owner_id != Some(requester.id) {
            return Err(DomainError::OwnerMismatch);
        }

        let manager = self
            .managers
            .find_by_id(manager_id)
            .await?
            .ok_or(DomainError::ManagerNotFound)?;

        if manager.todo_id != todo_id {
            return Err(DomainError::ManagerTodoMismatch);
        }

        self.managers.delete(manager.id).await?;
        Ok(())
    }
}
