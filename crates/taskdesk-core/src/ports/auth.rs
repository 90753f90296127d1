//! Credential primitives: password hashing and token signing.

use crate::domain::Role;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub identity_id: i64,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

/// Mints and parses signed identity tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token bound to the given identity.
    fn issue(&self, identity_id: i64, email: &str, role: Role) -> Result<String, AuthError>;

    /// Verify and decode a token. Tampered or malformed input is rejected
    /// whole; claims are never partially decoded.
    fn parse(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of issued tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// One-way password hashing with constant-time verification.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
