//! Users, their tasks, and the queries run over them.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and pure task queries in [`domain`]
//! - Port contracts for the remote users/todos provider in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Session loading and mutation services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
