//! # Quill Store
//!
//! The in-memory relational store behind the `quill-core` ports, plus the
//! collaborators that sit next to it.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Store and in-memory cache only
//! - `auth` - JWT + Argon2 authentication

pub mod cache;
pub mod shared;
pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

pub use cache::InMemoryCache;
pub use shared::SharedStore;
pub use store::{BlogStore, CascadeReport};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
