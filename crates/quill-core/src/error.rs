//! Domain-level error types.
//!
//! Every error here is a normal, recoverable outcome: the operation that
//! produced it left the store unchanged.

use thiserror::Error;

use crate::domain::{CategoryId, PostId, UserId};

/// A uniqueness rule rejected the write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Category name already exists: {0}")]
    DuplicateCategoryName(String),
}

/// A foreign key did not resolve to a live row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),
}

/// Store-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

pub type StoreResult<T> = Result<T, StoreError>;
