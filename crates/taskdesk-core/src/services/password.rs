//! Password strength policy.

use crate::error::{DomainError, PASSWORD_POLICY_MESSAGE};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject passwords shorter than eight characters, or lacking an uppercase
/// letter or a digit. Runs before any hashing or storage access.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_uppercase && has_digit {
        Ok(())
    } else {
        Err(DomainError::PolicyViolation(PASSWORD_POLICY_MESSAGE))
    }
}
