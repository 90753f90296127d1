//! Error handling - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use taskdesk_core::error::DomainError;
use taskdesk_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    /// A failure reported by the core services.
    Domain(DomainError),
    BadRequest(String),
    /// Missing or malformed credentials, before any token is parsed.
    Unauthorized(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Domain(err) => write!(f, "{}", err),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::DuplicateEmail => StatusCode::CONFLICT,
        DomainError::UnknownIdentity
        | DomainError::TodoNotFound
        | DomainError::ManagerNotFound
        | DomainError::ManagerIdentityNotFound
        | DomainError::CommentNotFound => StatusCode::NOT_FOUND,
        DomainError::BadCredential | DomainError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::PolicyViolation(_)
        | DomainError::InvalidArgument(_)
        | DomainError::ManagerTodoMismatch
        | DomainError::OwnerMismatch
        | DomainError::OwnerMissing
        | DomainError::SelfAssignmentForbidden => StatusCode::BAD_REQUEST,
        DomainError::Hashing(_) | DomainError::Weather(_) | DomainError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Stable machine-readable kind, carried in the `code` member.
fn domain_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::DuplicateEmail => "DUPLICATE_EMAIL",
        DomainError::UnknownIdentity => "UNKNOWN_IDENTITY",
        DomainError::BadCredential => "BAD_CREDENTIAL",
        DomainError::PolicyViolation(_) => "POLICY_VIOLATION",
        DomainError::Forbidden => "FORBIDDEN",
        DomainError::InvalidToken(_) => "INVALID_TOKEN",
        DomainError::InvalidArgument(_) => "INVALID_ARGUMENT",
        DomainError::TodoNotFound => "TODO_NOT_FOUND",
        DomainError::ManagerNotFound => "MANAGER_NOT_FOUND",
        DomainError::ManagerTodoMismatch => "MANAGER_TODO_MISMATCH",
        DomainError::OwnerMismatch => "OWNER_MISMATCH",
        DomainError::OwnerMissing => "OWNER_MISSING",
        DomainError::SelfAssignmentForbidden => "SELF_ASSIGNMENT_FORBIDDEN",
        DomainError::ManagerIdentityNotFound => "MANAGER_IDENTITY_NOT_FOUND",
        DomainError::CommentNotFound => "COMMENT_NOT_FOUND",
        DomainError::Hashing(_) | DomainError::Weather(_) | DomainError::Repository(_) => {
            "INTERNAL"
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => domain_status(err),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let error = match self {
            AppError::Domain(err) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = %err, "Internal error");
                ErrorResponse::internal_error()
            }
            AppError::Domain(DomainError::Forbidden) => {
                ErrorResponse::forbidden().with_code(domain_code(&DomainError::Forbidden))
            }
            AppError::Domain(err) => {
                ErrorResponse::new(status.as_u16(), status.canonical_reason().unwrap_or("Error"))
                    .with_code(domain_code(err))
                    .with_detail(err.to_string())
            }
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(status).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Domain(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use taskdesk_core::error::RepoError;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::DuplicateEmail, StatusCode::CONFLICT),
            (DomainError::UnknownIdentity, StatusCode::NOT_FOUND),
            (DomainError::BadCredential, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden, StatusCode::FORBIDDEN),
            (DomainError::OwnerMismatch, StatusCode::BAD_REQUEST),
            (DomainError::SelfAssignmentForbidden, StatusCode::BAD_REQUEST),
            (
                DomainError::Repository(RepoError::Query("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let err = AppError::from(DomainError::Repository(RepoError::Connection(
            "postgres://secret@db".into(),
        )));

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], 500);
        assert!(json.get("detail").is_none());
    }

    #[actix_web::test]
    async fn test_rule_violation_carries_code() {
        let err = AppError::from(DomainError::ManagerTodoMismatch);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["code"], "MANAGER_TODO_MISMATCH");
        assert_eq!(json["title"], "Bad Request");
    }
}
