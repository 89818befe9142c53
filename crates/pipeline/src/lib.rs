//! Pipeline for filtering and grouping loaded interview questions.
//!
//! This crate provides:
//! - Filter trait and implementations for tag and free-text filtering
//! - FilterPipeline for composing filters
//! - TopicGrouper for turning the filtered set into an ordered layout
//!
//! ## Architecture
//! The pipeline processes the loaded questions in stages:
//! 1. Filters narrow the loaded set (selected tags, search query)
//! 2. TopicGrouper classifies, merges and orders what remains
//! 3. The resulting `Layout` is handed to a renderer
//!
//! Everything here is a pure derivation over already-loaded data; nothing
//! triggers a fetch.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, FilterState, TopicGrouper};
//!
//! let pipeline = FilterPipeline::standard();
//! let state = FilterState::new().with_tags(["channels"]).with_search("buffer");
//! let visible = pipeline.apply(&loaded, &state)?;
//!
//! let grouper = TopicGrouper::new(classifier.clone());
//! let view = grouper.group(&visible);
//! ```

pub mod traits;
pub mod filter_state;
pub mod filters;
pub mod filter_pipeline;
pub mod grouping;
pub mod facets;

// Re-export main types
pub use traits::Filter;
pub use filter_state::FilterState;
pub use filter_pipeline::FilterPipeline;
pub use grouping::{
    DifficultySection, GroupedView, Layout, NumberedQuestion, TopicGroup, TopicGrouper,
    DEFAULT_FLAT_THRESHOLD,
};
pub use facets::{tag_facets, TagFacet};
