//! Port contracts for loading users and tasks.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult, TodoRecord, UserRecord};
