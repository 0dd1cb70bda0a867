//! Step definitions for overdue and completion rate scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
