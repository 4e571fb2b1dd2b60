//! Explanation prompt pipeline for quality-gate checks.
//!
//! Given a stored quality-gate configuration and a chapter/requirement/
//! check selection, the engine produces a two-part natural-language prompt
//! describing the selected check, fitted under a hard token budget:
//!
//! ```text
//! ┌────────────────┐    ┌─────────────────┐    ┌────────────────────┐
//! │ ConfigResolver │───▶│ PromptAssembler │───▶│ TokenBudgetTrimmer │
//! │ (select check, │    │ (system + user  │    │ (greedy drop of    │
//! │  pick evidence)│    │  messages)      │    │  auxiliary files)  │
//! └────────────────┘    └─────────────────┘    └────────────────────┘
//! ```
//!
//! Control flow is strictly linear and synchronous per request; no stage
//! retains state between invocations. The only shared object is the
//! read-only autopilot catalog.
//!
//! # Example
//!
//! ```no_run
//! use gatescribe_core::{CheckSelection, EvidenceFile};
//! use gatescribe_engine::ExplainPipeline;
//!
//! # async fn demo() -> gatescribe_core::Result<()> {
//! let pipeline = ExplainPipeline::with_defaults();
//! let files = vec![EvidenceFile::raw("qg-config.toml", "...")];
//! let selection = CheckSelection::new("5", "5.1", "1");
//! let prompt = pipeline.build_prompt(files, &selection).await?;
//! let messages = prompt.into_messages();
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod pipeline;
pub mod resolver;
pub mod tokenizer;
pub mod trimmer;

pub use assembler::assemble;
pub use catalog::{AUTOPILOT_CATALOG, CatalogEntry};
pub use config::GateDocument;
pub use pipeline::{DEFAULT_MODEL, ExplainPipeline};
pub use resolver::resolve;
pub use tokenizer::{CharEstimator, Tokenizer};
pub use trimmer::trim;

#[cfg(feature = "hf-tokenizer")]
pub use tokenizer::HfTokenizer;
