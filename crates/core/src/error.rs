//! Error types for the gatescribe domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Every variant is
//! terminal for the request that raised it: nothing is retried internally
//! and no partial prompt is ever returned. The caller owns the mapping to
//! a user-facing status (selection errors → "could not find the
//! configuration", budget errors → "too large to explain").

use thiserror::Error;

/// The top-level error type for all gatescribe operations.
#[derive(Debug, Clone, Error)]
pub enum ExplainError {
    /// The root configuration file is missing or not well-formed.
    #[error("Configuration parse error: {detail}")]
    ConfigParse { detail: String },

    /// The selected chapter does not exist in the parsed document.
    #[error("Chapter not found: {0}")]
    InvalidChapter(String),

    /// The selected requirement does not exist under the chapter.
    #[error("Requirement not found: {0}")]
    InvalidRequirement(String),

    /// The selected check does not exist under the requirement.
    #[error("Check not found: {0}")]
    InvalidCheck(String),

    /// The prompt cannot fit the budget even with every auxiliary file
    /// discarded. The root fragment is never truncated to force a fit.
    #[error("Prompt of {total} tokens exceeds the {limit}-token budget even after trimming")]
    TokenBudgetExceeded { total: usize, limit: usize },

    /// The external tokenizer failed to measure a text.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}

/// Result type alias using our error.
pub type Result<T> = std::result::Result<T, ExplainError>;
