//! Errors that can occur when talking to the questions endpoint.

use thiserror::Error;

/// Errors that can occur when fetching question pages
///
/// Callers do not distinguish status codes; every variant means "this page
/// failed to load".
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request to questions endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Questions endpoint returned HTTP {status}")]
    Http { status: u16 },

    #[error("Invalid response from questions endpoint: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
