//! Domain entities - the core business objects.

mod id;
mod post;
mod query;

pub use id::{PostId, UserId};
pub use post::{NewPost, Post, PostChanges};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, PostFilter};
