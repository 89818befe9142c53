//! Filter implementations for the question pipeline.

pub mod search;
pub mod tag;

// Re-export for convenience
pub use search::SearchFilter;
pub use tag::TagFilter;
