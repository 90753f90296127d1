//! Application services - business logic over the ports.

mod comment;
mod identity;
mod manager;
mod password;
mod role;
mod todo;

pub use comment::CommentService;
pub use identity::{AuthSession, IdentityService};
pub use manager::ManagerService;
pub use password::{MIN_PASSWORD_LENGTH, validate_password};
pub use role::RoleGuard;
pub use todo::TodoService;
