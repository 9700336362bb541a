use serde::{Deserialize, Serialize};

use super::{CategoryId, PostId};

/// Category entity - has a lifecycle independent of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: CategoryId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// Join row between a post and a category. The pair is its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostCategoryLink {
    pub post_id: PostId,
    pub category_id: CategoryId,
}

impl PostCategoryLink {
    pub fn new(post_id: PostId, category_id: CategoryId) -> Self {
        Self {
            post_id,
            category_id,
        }
    }
}
