//! # Quill Shared
//!
//! Wire types shared by the HTTP server and its clients: request and response
//! bodies, request validation, and the response envelopes.

pub mod dto;
pub mod response;
pub mod validation;

pub use response::{ApiResponse, ErrorResponse};
pub use validation::{FieldError, Validate};
