//! Filter to keep questions carrying any of the selected tags.

use crate::filter_state::FilterState;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Question;

/// Keeps questions with at least one tag in `selected_tags`.
///
/// ## Algorithm
/// OR semantics: a question tagged `[a, b]` survives a selection of `{a}`,
/// `{b}` or `{a, b}`. With nothing selected the filter is inactive.
pub struct TagFilter;

impl Filter for TagFilter {
    fn name(&self) -> &str {
        "TagFilter"
    }

    fn is_active(&self, state: &FilterState) -> bool {
        !state.selected_tags.is_empty()
    }

    fn apply<'a>(
        &self,
        questions: Vec<&'a Question>,
        state: &FilterState,
    ) -> Result<Vec<&'a Question>> {
        if state.selected_tags.is_empty() {
            return Ok(questions);
        }

        let filtered: Vec<&Question> = questions
            .into_iter()
            .filter(|question| {
                question
                    .tags
                    .iter()
                    .any(|tag| state.selected_tags.contains(tag))
            })
            .collect();
        Ok(filtered)
    }
}
