//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filter_state::FilterState;
use crate::filters::{SearchFilter, TagFilter};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Question;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Every filter is a predicate, so the result is the intersection of what
/// each filter keeps regardless of order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TagFilter)
///     .add_filter(SearchFilter);
///
/// let visible = pipeline.apply(&loaded, &state)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Tag filter followed by search filter
    pub fn standard() -> Self {
        Self::new().add_filter(TagFilter).add_filter(SearchFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all active filters in sequence to the loaded questions.
    ///
    /// ## Algorithm
    /// 1. Start with every loaded question, in loaded order
    /// 2. For each filter in order, skip it if inactive, else apply it
    /// 3. Return the survivors
    pub fn apply<'a>(
        &self,
        questions: &'a [Question],
        state: &FilterState,
    ) -> Result<Vec<&'a Question>> {
        let mut current: Vec<&Question> = questions.iter().collect();
        for filter in &self.filters {
            if !filter.is_active(state) {
                continue;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
