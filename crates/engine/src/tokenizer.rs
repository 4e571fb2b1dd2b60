//! The tokenizer seam.
//!
//! Token counting is an external concern: the pipeline only needs
//! `tokenize(text, model) -> count` and awaits it sequentially at each
//! measurement point. The default [`CharEstimator`] uses a 4-characters-
//! per-token heuristic, accurate within ~10% for BPE tokenizers on
//! English text; the optional [`HfTokenizer`] counts exactly via a
//! HuggingFace tokenizer file.

use async_trait::async_trait;
use gatescribe_core::Result;

/// An opaque token counter. Implementations may block or perform I/O on
/// first use (e.g. loading model data); the pipeline awaits each call.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    /// Count the tokens of `text` for the given model.
    async fn count_tokens(&self, text: &str, model: &str) -> Result<usize>;
}

/// Estimate the token count for a string.
///
/// Heuristic: 1 token ≈ 4 characters. Rounds up.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    (text.len() + 3) / 4
}

/// The default character-based estimator. Stateless and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharEstimator;

#[async_trait]
impl Tokenizer for CharEstimator {
    async fn count_tokens(&self, text: &str, _model: &str) -> Result<usize> {
        Ok(estimate_tokens(text))
    }
}

/// Exact token counting backed by the `tokenizers` crate.
#[cfg(feature = "hf-tokenizer")]
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

#[cfg(feature = "hf-tokenizer")]
impl HfTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| gatescribe_core::ExplainError::Tokenizer(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "hf-tokenizer")]
#[async_trait]
impl Tokenizer for HfTokenizer {
    async fn count_tokens(&self, text: &str, _model: &str) -> Result<usize> {
        self.inner
            .encode(text, false)
            .map(|encoding| encoding.get_ids().len())
            .map_err(|e| gatescribe_core::ExplainError::Tokenizer(e.to_string()))
    }
}
