//! Adapter implementations of the task source port.

pub mod json;
pub mod memory;
