//! In-memory adapters.

mod source;

pub use source::InMemoryTaskSource;
