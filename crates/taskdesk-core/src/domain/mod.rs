//! Domain entities - the core business objects.

mod comment;
mod identity;
mod manager;
mod page;
mod todo;

pub use comment::{Comment, CommentView};
pub use identity::{AuthUser, Identity, IdentitySummary, Role};
pub use manager::{Manager, ManagerView};
pub use page::{Page, PageRequest};
pub use todo::{Todo, TodoDetail};
