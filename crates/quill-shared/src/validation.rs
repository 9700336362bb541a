//! Request validation - field rules checked before the store is called.

use serde::{Deserialize, Serialize};

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Implemented by request bodies. Every rule runs; all failures are reported.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Accumulates rule failures for one request.
#[derive(Debug, Default)]
pub(crate) struct Rules {
    errors: Vec<FieldError>,
}

impl Rules {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Character length of the trimmed value must lie in `min..=max`.
    pub(crate) fn length(mut self, field: &str, value: &str, min: usize, max: usize) -> Self {
        let len = value.trim().chars().count();
        if len == 0 && min > 0 {
            self.errors
                .push(FieldError::new(field, format!("{field} is required")));
        } else if len < min || len > max {
            self.errors.push(FieldError::new(
                field,
                format!("{field} must be between {min} and {max} characters"),
            ));
        }
        self
    }

    pub(crate) fn min_length(mut self, field: &str, value: &str, min: usize) -> Self {
        if value.chars().count() < min {
            self.errors.push(FieldError::new(
                field,
                format!("{field} must be at least {min} characters"),
            ));
        }
        self
    }

    pub(crate) fn email(mut self, field: &str, value: &str) -> Self {
        if !value.contains('@') {
            self.errors
                .push(FieldError::new(field, "Invalid email format"));
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
