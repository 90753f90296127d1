//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod audit;
mod auth;
mod repository;
mod weather;

pub use audit::AuditSink;
pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use repository::{
    BaseRepository, CommentRepository, IdentityRepository, ManagerRepository, TodoRepository,
};
pub use weather::{WeatherClient, WeatherError};
