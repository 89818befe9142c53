//! The seam between the loader and wherever questions come from.

use crate::error::Result;
use catalog::QuestionPage;
use std::future::Future;

/// A paginated supplier of questions.
///
/// `offset` is the number of questions the caller already holds; `limit`
/// is the batch size. Implementations return questions in server order.
pub trait QuestionSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        category: &str,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<QuestionPage>> + Send;
}
