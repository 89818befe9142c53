//! Browser configuration.
//!
//! Defaults match the reference list page: batches of 20, three retries,
//! a 15 s request deadline and a 300 ms search debounce. Every value can be
//! overridden from the environment (a `.env` file is honoured).

use crate::error::ConfigError;
use pipeline::DEFAULT_FLAT_THRESHOLD;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub const ENV_API_URL: &str = "DEVHUB_API_URL";
pub const ENV_BATCH_SIZE: &str = "DEVHUB_BATCH_SIZE";
pub const ENV_MAX_RETRIES: &str = "DEVHUB_MAX_RETRIES";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "DEVHUB_REQUEST_TIMEOUT_SECS";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "DEVHUB_SEARCH_DEBOUNCE_MS";

/// Full browser configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserConfig {
    pub api_url: String,
    pub batch_size: usize,
    pub max_retries: u32,
    pub request_timeout: Duration,
    pub search_debounce: Duration,
    pub flat_threshold: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            flat_threshold: DEFAULT_FLAT_THRESHOLD,
        }
    }
}

impl BrowserConfig {
    /// Load from environment variables (using .env if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(batch_size) = parse_var::<usize>(&lookup, ENV_BATCH_SIZE)? {
            config.batch_size = batch_size;
        }
        if let Some(max_retries) = parse_var::<u32>(&lookup, ENV_MAX_RETRIES)? {
            config.max_retries = max_retries;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_REQUEST_TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_SEARCH_DEBOUNCE_MS)? {
            config.search_debounce = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_BATCH_SIZE.to_string(),
                value: "0".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: ENV_REQUEST_TIMEOUT_SECS.to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
