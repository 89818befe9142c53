//! # Catalog Crate
//!
//! Domain types for the interview question bank and fixture loading.
//!
//! ## Main Components
//!
//! - **types**: `Question`, `Difficulty`, `Language`, `QuestionPage`
//! - **fixtures**: Read question JSON files from disk
//! - **error**: Error types for fixture loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::fixtures::load_questions;
//! use std::path::Path;
//!
//! let questions = load_questions(Path::new("fixtures/go.json"))?;
//! for q in &questions {
//!     println!("{} [{}]", q.title, q.primary_tag());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod fixtures;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    QuestionId,
    // Core types
    CodeExample,
    Question,
    QuestionPage,
    // Enums
    Difficulty,
    Language,
};
