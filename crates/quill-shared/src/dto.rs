//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, Rules, Validate};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterUserRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .min_length("username", &self.username, 3)
            .email("email", &self.email)
            .min_length("password", &self.password, 6)
            .finish()
    }
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request to create a post. The owner is the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// `"draft"` or `"published"`; draft when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let rules = Rules::new()
            .length("title", &self.title, 3, 100)
            .length("content", &self.content, 10, 1000);
        match self.status.as_deref() {
            None | Some("draft") | Some("published") => rules.finish(),
            Some(_) => {
                let mut errors = rules.finish().err().unwrap_or_default();
                errors.push(FieldError::new(
                    "status",
                    "status must be either draft or published",
                ));
                Err(errors)
            }
        }
    }
}

/// Request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new().length("name", &self.name, 1, 50).finish()
    }
}

/// Request to comment on a post. The author is the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl Validate for CreateCommentRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .length("content", &self.content, 1, 1000)
            .finish()
    }
}

/// A user's public information. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
