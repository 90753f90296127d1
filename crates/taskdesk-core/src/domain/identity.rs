use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The two-tier role model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role literals form a closed set; anything else is rejected rather than
/// defaulted.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(DomainError::InvalidArgument(format!(
                "unknown user role '{s}'"
            ))),
        }
    }
}

/// Identity entity - a registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Storage-assigned id; `0` until the identity is first saved.
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new, unsaved identity.
    pub fn new(email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            password_hash,
            role,
            created_at: now,
            modified_at: now,
        }
    }

    /// Same as [`Identity::new`] but with a known id, for rows loaded from storage.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn change_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.modified_at = Utc::now();
    }

    pub fn change_role(&mut self, role: Role) {
        self.role = role;
        self.modified_at = Utc::now();
    }

    pub fn summary(&self) -> IdentitySummary {
        IdentitySummary {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Public projection of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: i64,
    pub email: String,
}

/// The already-authenticated caller, resolved from verified token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn new(id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_known_literals() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_role_rejects_unknown_literal() {
        let err = "SUPERUSER".parse::<Role>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_identity_is_unsaved() {
        let identity = Identity::new("a@x.com".into(), "hash".into(), Role::User);
        assert!(identity.is_new());
        assert!(!identity.with_id(7).is_new());
    }
}
