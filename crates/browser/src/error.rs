//! Error types for the browser crate.

use api_client::ApiError;
use std::time::Duration;
use thiserror::Error;

/// Why a page failed to load.
///
/// The loader turns these into state; they never escape as `Err`.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load questions: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to load questions: request timed out after {0:?}")]
    Timeout(Duration),

    /// A category switch or cancel overtook the request
    #[error("Failed to load questions: request superseded")]
    Superseded,
}

/// Invalid configuration value
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
