use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// User entity - an author of posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Opaque to the store; produced by the authentication layer.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with the given id, stamped with the current time.
    pub fn new(id: UserId, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
