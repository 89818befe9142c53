//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the loaded question set.

use crate::filter_state::FilterState;
use anyhow::Result;
use catalog::Question;

/// Core trait for filtering questions.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with async tasks
/// - Filters work on borrowed questions so recomputing a view never copies
///   the loaded set
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this filter narrows anything for the given state.
    ///
    /// Inactive filters are skipped by the pipeline.
    fn is_active(&self, _state: &FilterState) -> bool {
        true
    }

    /// Apply this filter to a set of questions.
    ///
    /// # Arguments
    /// * `questions` - The questions to filter (in loaded order)
    /// * `state` - Selected tags and search query
    ///
    /// # Returns
    /// * `Ok(Vec<&Question>)` - The retained questions, order preserved
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        questions: Vec<&'a Question>,
        state: &FilterState,
    ) -> Result<Vec<&'a Question>>;
}
