//! JSON snapshot adapters.

mod source;

pub use source::{JsonSnapshotSource, TaskSnapshot};
