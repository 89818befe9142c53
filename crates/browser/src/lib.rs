//! Browsing layer for the DevHub question list.
//!
//! This crate ties the pieces together for one list page:
//! - [`IncrementalLoader`]: paginated fetching with an in-flight latch,
//!   retry cap and request timeout
//! - [`SearchDebouncer`]: delays search input until typing pauses
//! - [`BrowsingSession`]: filters and groups the loaded questions into a
//!   [`SessionView`]
//! - [`BrowserConfig`]: defaults plus environment overrides

pub mod config;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod session;

pub use config::BrowserConfig;
pub use debounce::SearchDebouncer;
pub use error::{ConfigError, LoadError};
pub use loader::{IncrementalLoader, LoadOutcome, LoadPhase, LoadState, LoaderConfig};
pub use session::{BrowsingSession, ListStatus, SessionView};
