//! Core domain types for interview questions.
//!
//! These mirror the JSON records served by the questions endpoint. Optional
//! auxiliary content defaults to empty so partially-filled records still
//! deserialize.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque question identifier, unique within a category
pub type QuestionId = String;

// =============================================================================
// Difficulty
// =============================================================================

/// Difficulty tier.
///
/// Variant order is the display order: `Easy < Medium < Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(CatalogError::InvalidValue {
                field: "difficulty".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Language
// =============================================================================

/// Programming-language sections of the question bank.
///
/// `Question::category` is a free-form slug on the wire; anything that
/// does not parse into one of these is handled by the caller's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Java,
    Python,
    JavaScript,
    TypeScript,
    Rust,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Go,
        Language::Java,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Rust,
    ];

    /// Parse a category slug such as `"go"` or `"golang"`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "go" | "golang" => Some(Language::Go),
            "java" => Some(Language::Java),
            "python" | "py" => Some(Language::Python),
            "javascript" | "js" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            "rust" | "rs" => Some(Language::Rust),
            _ => None,
        }
    }

    /// Canonical slug used in request URLs
    pub fn slug(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_slug(s).ok_or_else(|| CatalogError::InvalidValue {
            field: "language".to_string(),
            value: s.to_string(),
        })
    }
}

// =============================================================================
// Question
// =============================================================================

/// A worked code sample attached to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    #[serde(default)]
    pub language: Option<String>,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One interview question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Short label; often a copy of `question`
    #[serde(default)]
    pub title: String,
    pub question: String,
    /// May contain lightweight markup
    #[serde(default)]
    pub answer: String,
    /// Language slug, e.g. "go"
    pub category: String,
    /// Ordered; the first tag drives topic classification
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author-assigned difficulty. Grouping derives difficulty from the
    /// topic table instead and only reports when the two disagree.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl Question {
    /// Minimal constructor, mostly for tests and fixtures
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            question: title.clone(),
            title,
            answer: String::new(),
            category: category.into(),
            tags: Vec::new(),
            difficulty: None,
            video_url: None,
            code_examples: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Builder-style helper to attach tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// The tag used for classification, or `""` when untagged
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or("")
    }

    /// Parsed language of this question, if the slug is a known one
    pub fn language(&self) -> Option<Language> {
        Language::from_slug(&self.category)
    }
}

// =============================================================================
// Wire page
// =============================================================================

/// One batch as returned by `GET /api/interview/questions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPage {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub total: usize,
}

impl QuestionPage {
    pub fn new(questions: Vec<Question>, total: usize) -> Self {
        Self { questions, total }
    }
}
