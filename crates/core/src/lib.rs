//! # Gatescribe Core
//!
//! Domain types and error definitions for the gatescribe explanation
//! pipeline. This crate has **zero framework dependencies** — it defines
//! the value objects that flow between the pipeline stages:
//! evidence files in → resolved fragment → assembled prompt → trimmed prompt.
//!
//! All entities are created fresh per request and discarded once the
//! prompt pair is produced or an error is raised; nothing here persists
//! across requests.

pub mod budget;
pub mod error;
pub mod evidence;
pub mod message;

// Re-export key types at crate root for ergonomics
pub use budget::TokenBudget;
pub use error::{ExplainError, Result};
pub use evidence::{
    CheckSelection, EvidenceFile, FileContent, ResolvedAutomation, ResolvedFragment,
    ROOT_CONFIG_FILENAME,
};
pub use message::{ExplanationPrompt, PromptMessage, PromptRole};
