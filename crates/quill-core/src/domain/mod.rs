//! Domain entities - the core business objects.

mod category;
mod comment;
mod id;
mod post;
mod user;

pub use category::{Category, PostCategoryLink};
pub use comment::Comment;
pub use id::{CategoryId, CommentId, PostId, UserId};
pub use post::{Post, PostStatus};
pub use user::User;

use serde::{Deserialize, Serialize};

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub users: usize,
    pub posts: usize,
    pub categories: usize,
    pub links: usize,
    pub comments: usize,
}
