//! Constraint validator - uniqueness and existence checks.
//!
//! Every check reads the current table state and nothing here writes. A
//! facade operation runs all of its checks before touching any table, and the
//! first failure aborts it.

use quill_core::domain::{CategoryId, PostId, UserId};
use quill_core::{ConstraintViolation, ReferenceError, StoreResult};

use super::table::Tables;

/// Username first, then email.
pub fn check_new_user(tables: &Tables, username: &str, email: &str) -> StoreResult<()> {
    if tables.users.find(|u| u.username == username).is_some() {
        return Err(ConstraintViolation::DuplicateUsername(username.to_string()).into());
    }
    if tables.users.find(|u| u.email == email).is_some() {
        return Err(ConstraintViolation::DuplicateEmail(email.to_string()).into());
    }
    Ok(())
}

pub fn check_new_category(tables: &Tables, name: &str) -> StoreResult<()> {
    if tables.categories.find(|c| c.name == name).is_some() {
        return Err(ConstraintViolation::DuplicateCategoryName(name.to_string()).into());
    }
    Ok(())
}

pub fn check_new_post(tables: &Tables, user_id: UserId) -> StoreResult<()> {
    require_user(tables, user_id)?;
    Ok(())
}

/// Post first, then author.
pub fn check_new_comment(tables: &Tables, post_id: PostId, user_id: UserId) -> StoreResult<()> {
    require_post(tables, post_id)?;
    require_user(tables, user_id)?;
    Ok(())
}

/// Post first, then category.
pub fn check_link(tables: &Tables, post_id: PostId, category_id: CategoryId) -> StoreResult<()> {
    require_post(tables, post_id)?;
    require_category(tables, category_id)?;
    Ok(())
}

fn require_user(tables: &Tables, id: UserId) -> Result<(), ReferenceError> {
    if tables.users.contains(id) {
        Ok(())
    } else {
        Err(ReferenceError::UserNotFound(id))
    }
}

fn require_post(tables: &Tables, id: PostId) -> Result<(), ReferenceError> {
    if tables.posts.contains(id) {
        Ok(())
    } else {
        Err(ReferenceError::PostNotFound(id))
    }
}

fn require_category(tables: &Tables, id: CategoryId) -> Result<(), ReferenceError> {
    if tables.categories.contains(id) {
        Ok(())
    } else {
        Err(ReferenceError::CategoryNotFound(id))
    }
}
