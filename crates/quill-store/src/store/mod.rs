//! The in-memory relational store.
//!
//! Layered leaves-first: [`table`] holds rows, [`validator`] checks proposed
//! writes, [`cascade`] removes dependents, [`query`] derives read views, and
//! [`BlogStore`] composes them into atomic operations.

mod cascade;
mod facade;
mod query;
mod table;
mod validator;

pub use cascade::CascadeReport;
pub use facade::BlogStore;

#[cfg(test)]
mod tests;
