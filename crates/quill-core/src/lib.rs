//! # Quill Core
//!
//! The domain layer of the Quill blog store.
//! This crate holds the records, typed identifiers, error taxonomy and the
//! port traits; it has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ConstraintViolation, ReferenceError, StoreError, StoreResult};
