//! Token-budget trimming — stage three of the pipeline.
//!
//! Measures the assembled prompt against the budget and, when over,
//! greedily removes whole auxiliary files from the user message until it
//! fits or every auxiliary file is gone. The root fragment is never
//! trimmed or truncated; if dropping everything still does not close the
//! gap, the request fails.

use crate::assembler::render_file_line;
use crate::tokenizer::Tokenizer;
use gatescribe_core::{EvidenceFile, ExplainError, ExplanationPrompt, Result, TokenBudget};
use tracing::debug;

/// Fit `prompt` under the budget by discarding auxiliary files.
///
/// Files are weighed individually, sorted ascending by token length, and
/// removed starting at the pivot — the first entry whose length alone
/// covers the overflow, or the largest entry when none does — walking
/// downward toward the smallest until the overflow is closed.
pub async fn trim(
    mut prompt: ExplanationPrompt,
    files: &[EvidenceFile],
    budget: &TokenBudget,
    tokenizer: &dyn Tokenizer,
    model: &str,
) -> Result<ExplanationPrompt> {
    let limit = budget.effective_limit();
    let combined = format!("{}{}", prompt.system.content, prompt.user.content);
    let total = tokenizer.count_tokens(&combined, model).await?;
    if total <= limit {
        return Ok(prompt);
    }

    let mut overflow = (total - limit) as i64;
    debug!(total, limit, overflow, "prompt over budget, trimming auxiliary files");

    let mut weighted: Vec<(&str, &str, usize)> = Vec::new();
    for file in files.iter().skip(1) {
        let Some(text) = file.raw_text() else { continue };
        let length = tokenizer.count_tokens(text, model).await?;
        weighted.push((file.filename.as_str(), text, length));
    }
    weighted.sort_by_key(|&(_, _, length)| length);

    if !weighted.is_empty() {
        let pivot = weighted
            .iter()
            .position(|&(_, _, length)| length as i64 >= overflow)
            .unwrap_or(weighted.len() - 1);
        for &(filename, text, length) in weighted[..=pivot].iter().rev() {
            let line = render_file_line(filename, text);
            prompt.user.content = prompt.user.content.replacen(&line, "", 1);
            // The length is subtracted whether or not the literal line was
            // found in the message; removal is exact-match only.
            overflow -= length as i64;
            debug!(filename, length, overflow, "auxiliary file dropped");
            if overflow <= 0 {
                break;
            }
        }
    }

    if overflow > 0 {
        return Err(ExplainError::TokenBudgetExceeded { total, limit });
    }
    Ok(prompt)
}
