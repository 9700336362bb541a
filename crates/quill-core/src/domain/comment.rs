use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentId, PostId, UserId};

/// Comment entity - left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: CommentId, post_id: PostId, user_id: UserId, content: String) -> Self {
        Self {
            id,
            post_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}
