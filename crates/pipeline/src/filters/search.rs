//! Free-text search over the loaded questions.
//!
//! Matching is a case-insensitive substring test across the title, the
//! question text, the answer, and every tag. It runs only over questions
//! already loaded; it never reaches the server.

use crate::filter_state::FilterState;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Question;

/// Keeps questions containing the trimmed search query.
pub struct SearchFilter;

impl SearchFilter {
    /// Whether `question` matches an already-lowercased needle
    pub fn matches(question: &Question, needle_lower: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle_lower);

        contains(&question.title)
            || contains(&question.question)
            || contains(&question.answer)
            || question.tags.iter().any(|tag| contains(tag))
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn is_active(&self, state: &FilterState) -> bool {
        !state.trimmed_query().is_empty()
    }

    fn apply<'a>(
        &self,
        questions: Vec<&'a Question>,
        state: &FilterState,
    ) -> Result<Vec<&'a Question>> {
        let query = state.trimmed_query();
        if query.is_empty() {
            return Ok(questions);
        }

        let needle = query.to_lowercase();
        let filtered: Vec<&Question> = questions
            .into_iter()
            .filter(|question| Self::matches(question, &needle))
            .collect();
        Ok(filtered)
    }
}
