//! In-memory question source backed by fixture data.

use crate::error::Result;
use crate::source::QuestionSource;
use catalog::{Question, QuestionPage};
use std::sync::Arc;
use tracing::debug;

/// Serves pages out of a fixed list, the same way the endpoint would.
///
/// Category matching is case-insensitive on the slug.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    questions: Arc<Vec<Question>>,
}

impl InMemorySource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }

    /// Number of questions held for a category
    pub fn count(&self, category: &str) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category.eq_ignore_ascii_case(category))
            .count()
    }

    fn page(&self, category: &str, limit: usize, offset: usize) -> QuestionPage {
        let matching: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.category.eq_ignore_ascii_case(category))
            .collect();
        let total = matching.len();
        let questions = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        QuestionPage::new(questions, total)
    }
}

impl QuestionSource for InMemorySource {
    async fn fetch_page(&self, category: &str, limit: usize, offset: usize) -> Result<QuestionPage> {
        let page = self.page(category, limit, offset);
        debug!(
            "Serving {} of {} in-memory questions for {} (offset {})",
            page.questions.len(),
            page.total,
            category,
            offset
        );
        Ok(page)
    }
}
