//! Cache implementations for read-through query caching.

mod memory;

pub use memory::InMemoryCache;
