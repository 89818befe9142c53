//! Client for the DevHub questions REST endpoint.
//!
//! This crate provides the `QuestionSource` seam the loader fetches through,
//! plus two implementations:
//! - `HttpQuestionSource`: `GET {base}/api/interview/questions?category=&limit=&offset=`
//! - `InMemorySource`: pages served from fixture data
//!
//! Any transport failure, non-2xx status, or malformed body surfaces as an
//! `ApiError`; the caller decides how to present it.

use catalog::QuestionPage;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

pub mod error;
pub mod memory;
pub mod source;

pub use error::{ApiError, Result};
pub use memory::InMemorySource;
pub use source::QuestionSource;

/// Path of the questions endpoint relative to the API base URL
pub const QUESTIONS_PATH: &str = "/api/interview/questions";

/// Client for the questions endpoint.
///
/// Wraps a pooled `reqwest::Client`; clone freely.
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    client: Client,
    base_url: String,
}

impl HttpQuestionSource {
    /// Create a client for the API at `base_url` (e.g. "http://localhost:3000").
    ///
    /// Only a connect timeout is set here; the loader applies its own
    /// per-request deadline.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use an existing client (shared pool, custom TLS, ...)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Using questions endpoint at {}{}", base_url, QUESTIONS_PATH);
        Self { client, base_url }
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, QUESTIONS_PATH)
    }
}

impl QuestionSource for HttpQuestionSource {
    /// Fetch one page of questions.
    ///
    /// Error handling:
    /// - Transport errors → `ApiError::Request`
    /// - Non-2xx → `ApiError::Http` (status codes are not special-cased)
    /// - Undecodable body → `ApiError::InvalidResponse`
    async fn fetch_page(&self, category: &str, limit: usize, offset: usize) -> Result<QuestionPage> {
        debug!(
            "Fetching questions category={} limit={} offset={}",
            category, limit, offset
        );
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("category", category.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Request to questions endpoint failed: {}", e);
                ApiError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Questions endpoint returned {}", status);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let page: QuestionPage = response.json().await.map_err(|e| {
            error!("Failed to decode questions page: {}", e);
            ApiError::InvalidResponse(e.to_string())
        })?;

        debug!(
            "Received {} questions (total {}) for {}",
            page.questions.len(),
            page.total,
            category
        );
        Ok(page)
    }
}
