//! Role authorization guard.

use std::sync::Arc;

use crate::domain::{Identity, Role};
use crate::error::DomainError;
use crate::ports::IdentityRepository;

/// Confirms a caller's stored role before a guarded operation runs, and owns
/// the only path that mutates roles.
#[derive(Clone)]
pub struct RoleGuard {
    identities: Arc<dyn IdentityRepository>,
}

impl RoleGuard {
    pub fn new(identities: Arc<dyn IdentityRepository>) -> Self {
        Self { identities }
    }

    /// Require the stored role of `identity_id` to be `required`.
    ///
    /// The role is read from storage rather than trusted from token claims,
    /// so a demoted admin loses access immediately. A caller whose identity
    /// no longer exists is forbidden.
    pub async fn require(&self, identity_id: i64, required: Role) -> Result<Identity, DomainError> {
        match self.identities.find_by_id(identity_id).await? {
            Some(identity) if identity.role == required => Ok(identity),
            _ => Err(DomainError::Forbidden),
        }
    }

    /// Set the role of `identity_id` from a role literal.
    pub async fn change_user_role(
        &self,
        identity_id: i64,
        role_literal: &str,
    ) -> Result<Identity, DomainError> {
        let mut identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        let role: Role = role_literal.parse()?;
        identity.change_role(role);

        Ok(self.identities.save(identity).await?)
    }
}
