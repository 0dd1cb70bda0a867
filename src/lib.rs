//! Tasktrack: an in-memory task tracker for users and their todos.
//!
//! This crate models users, their plain and priority tasks, and the
//! filtering, grouping, searching and statistics operations applied over task
//! collections. Users and todos are loaded once per session from a provider
//! behind the [`task::ports::TaskSource`] port.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON files)
//!
//! # Modules
//!
//! - [`task`]: Task and user model, queries, and session services
//! - [`clock`]: Fixed clock for deterministic overdue evaluation

pub mod clock;
pub mod task;
