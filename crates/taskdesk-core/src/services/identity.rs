//! Signup, signin and password management.

use std::sync::Arc;

use crate::domain::{AuthUser, Identity, IdentitySummary, Role};
use crate::error::{DomainError, PASSWORD_REUSE_MESSAGE, RepoError};
use crate::ports::{IdentityRepository, PasswordService, TokenService};

use super::password::validate_password;

/// A freshly issued token together with the identity it is bound to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub expires_in: i64,
    pub identity: IdentitySummary,
    pub role: Role,
}

#[derive(Clone)]
pub struct IdentityService {
    identities: Arc<dyn IdentityRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl IdentityService {
    pub fn new(
        identities: Arc<dyn IdentityRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            identities,
            passwords,
            tokens,
        }
    }

    /// Register a new identity and sign it in.
    ///
    /// The e-mail pre-check runs before hashing so duplicates never reach
    /// storage; a unique-constraint failure from `save` (a concurrent signup
    /// that slipped past the pre-check) reports the same error.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthSession, DomainError> {
        if self.identities.exists_by_email(email).await? {
            return Err(DomainError::DuplicateEmail);
        }

        let password_hash = self.passwords.hash(password)?;
        let identity = Identity::new(email.to_string(), password_hash, role);
        let saved = self
            .identities
            .save(identity)
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::DuplicateEmail,
                other => DomainError::Repository(other),
            })?;

        self.session_for(&saved)
    }

    /// Authenticate by e-mail and password.
    pub async fn signin(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let identity = self
            .identities
            .find_by_email(email)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        if !self.passwords.verify(password, &identity.password_hash)? {
            return Err(DomainError::BadCredential);
        }

        self.session_for(&identity)
    }

    pub async fn get_user(&self, identity_id: i64) -> Result<IdentitySummary, DomainError> {
        self.identities
            .find_by_id(identity_id)
            .await?
            .map(|identity| identity.summary())
            .ok_or(DomainError::UnknownIdentity)
    }

    /// Replace the caller's password. The new password is checked against
    /// the policy before storage is consulted.
    pub async fn change_password(
        &self,
        identity_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        validate_password(new_password)?;

        let mut identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or(DomainError::UnknownIdentity)?;

        if !self.passwords.verify(old_password, &identity.password_hash)? {
            return Err(DomainError::BadCredential);
        }

        if self.passwords.verify(new_password, &identity.password_hash)? {
            return Err(DomainError::PolicyViolation(PASSWORD_REUSE_MESSAGE));
        }

        identity.change_password(self.passwords.hash(new_password)?);
        self.identities.save(identity).await?;
        Ok(())
    }

    /// Verify a token and return its claims.
    pub fn authenticate(&self, token: &str) -> Result<AuthUser, DomainError> {
        let claims = self.tokens.parse(token)?;
        Ok(AuthUser::new(claims.identity_id, claims.email, claims.role))
    }

    fn session_for(&self, identity: &Identity) -> Result<AuthSession, DomainError> {
        let token = self
            .tokens
            .issue(identity.id, &identity.email, identity.role)?;

        Ok(AuthSession {
            token,
            expires_in: self.tokens.expiration_seconds(),
            identity: identity.summary(),
            role: identity.role,
        })
    }
}
