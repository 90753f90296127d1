//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, WeatherError};

/// Message returned when a new password fails the strength rules.
pub const PASSWORD_POLICY_MESSAGE: &str =
    "New password must be at least 8 characters long and contain at least one digit and one uppercase letter.";

/// Message returned when a new password matches the current one.
pub const PASSWORD_REUSE_MESSAGE: &str = "New password must differ from the current password.";

/// Domain errors - business rule failures scoped to a single request.
///
/// Every variant except [`DomainError::Repository`], [`DomainError::Hashing`]
/// and [`DomainError::Weather`] is a deterministic validation outcome with a
/// fixed message. Those three wrap collaborator faults and are passed through
/// to the transport boundary as-is.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("User not found")]
    UnknownIdentity,

    #[error("Wrong password")]
    BadCredential,

    #[error("{0}")]
    PolicyViolation(&'static str),

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Manager not found")]
    ManagerNotFound,

    #[error("This manager is not registered to this todo")]
    ManagerTodoMismatch,

    #[error("The requesting user did not create this todo")]
    OwnerMismatch,

    #[error("The todo has no valid creator")]
    OwnerMissing,

    #[error("The todo creator cannot be assigned as its own manager")]
    SelfAssignmentForbidden,

    #[error("The user to be assigned as manager does not exist")]
    ManagerIdentityNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Weather lookup failed: {0}")]
    Weather(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => DomainError::Hashing(msg),
            AuthError::TokenExpired => DomainError::InvalidToken("token expired".to_string()),
            AuthError::MissingAuth => {
                DomainError::InvalidToken("missing bearer token".to_string())
            }
            AuthError::InvalidToken(msg) => DomainError::InvalidToken(msg),
        }
    }
}

impl From<WeatherError> for DomainError {
    fn from(err: WeatherError) -> Self {
        DomainError::Weather(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
