//! Typed surrogate identifiers.
//!
//! Every identifier is a store-assigned `u64` that is:
//! - Unique within its table for the lifetime of the store
//! - Never reused after deletion
//! - Opaque to callers

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw value.
            pub const fn raw(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`User`](super::User).
    UserId,
    "user#"
);
define_id!(
    /// Identifier of a [`Post`](super::Post).
    PostId,
    "post#"
);
define_id!(
    /// Identifier of a [`Category`](super::Category).
    CategoryId,
    "category#"
);
define_id!(
    /// Identifier of a [`Comment`](super::Comment).
    CommentId,
    "comment#"
);
