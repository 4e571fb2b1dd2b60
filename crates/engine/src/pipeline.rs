//! The pipeline façade: resolve → assemble → trim, per request.

use crate::tokenizer::{CharEstimator, Tokenizer};
use crate::{assembler, resolver, trimmer};
use gatescribe_core::{CheckSelection, EvidenceFile, ExplanationPrompt, Result, TokenBudget};
use tracing::debug;

/// Model name passed to the tokenizer by default.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// The explanation-prompt pipeline. Stateless between invocations —
/// create one and reuse it; concurrent requests run independently.
pub struct ExplainPipeline<T: Tokenizer> {
    tokenizer: T,
    budget: TokenBudget,
    model: String,
}

impl ExplainPipeline<CharEstimator> {
    /// A pipeline with the default budget (8192-token window, 800
    /// reserved) and the character-heuristic tokenizer.
    pub fn with_defaults() -> Self {
        Self::new(CharEstimator, TokenBudget::default(), DEFAULT_MODEL)
    }
}

impl<T: Tokenizer> ExplainPipeline<T> {
    pub fn new(tokenizer: T, budget: TokenBudget, model: impl Into<String>) -> Self {
        Self {
            tokenizer,
            budget,
            model: model.into(),
        }
    }

    /// Produce the two-part prompt for one selected check.
    ///
    /// Runs the three stages linearly; any stage error is terminal for
    /// the request and no partial prompt is returned.
    pub async fn build_prompt(
        &self,
        files: Vec<EvidenceFile>,
        selection: &CheckSelection,
    ) -> Result<ExplanationPrompt> {
        let resolved = resolver::resolve(files, selection)?;
        let prompt = assembler::assemble(&resolved);
        debug!(
            system_len = prompt.system.content.len(),
            user_len = prompt.user.content.len(),
            "prompt assembled"
        );
        trimmer::trim(prompt, &resolved, &self.budget, &self.tokenizer, &self.model).await
    }
}
