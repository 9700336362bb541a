//! Ports - trait definitions for the store and its collaborators.
//! Infrastructure crates provide the implementations.

mod auth;
mod cache;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use cache::Cache;
pub use repository::BlogRepository;
