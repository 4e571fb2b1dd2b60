//! Evidence file and resolved-fragment value objects.
//!
//! An ordered list of [`EvidenceFile`] is the unit passed between all
//! three pipeline stages. Invariant: after resolution the first element's
//! filename is always [`ROOT_CONFIG_FILENAME`] and its content is a
//! [`ResolvedFragment`], never raw text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical filename of the root configuration file — the single file
/// holding the full chapter/requirement/check hierarchy. It is always
/// assembled first and never trimmed.
pub const ROOT_CONFIG_FILENAME: &str = "qg-config.toml";

/// A chapter → requirement → check path selecting one check to explain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSelection {
    pub chapter: String,
    pub requirement: String,
    pub check: String,
}

impl CheckSelection {
    pub fn new(
        chapter: impl Into<String>,
        requirement: impl Into<String>,
        check: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            requirement: requirement.into(),
            check: check.into(),
        }
    }
}

/// One file handed through the pipeline: the root configuration or an
/// auxiliary evidence file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFile {
    pub filename: String,
    pub content: FileContent,
}

impl EvidenceFile {
    /// An auxiliary file carrying raw text.
    pub fn raw(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Raw(content.into()),
        }
    }

    /// The synthetic root entry carrying the resolved fragment.
    pub fn fragment(fragment: ResolvedFragment) -> Self {
        Self {
            filename: ROOT_CONFIG_FILENAME.to_string(),
            content: FileContent::Fragment(fragment),
        }
    }

    /// The raw text of this file, if it carries any.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.content {
            FileContent::Raw(text) => Some(text),
            FileContent::Fragment(_) => None,
        }
    }
}

/// What an [`EvidenceFile`] carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    /// Raw file bytes as UTF-8 text.
    Raw(String),
    /// The resolved configuration fragment (root entry only).
    Fragment(ResolvedFragment),
}

/// The single selected check after resolution: its title plus the merged
/// automation definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFragment {
    pub title: String,
    pub automation: ResolvedAutomation,
}

/// A check's automation after merging check-level and autopilot-level
/// environment maps (check-level keys win on collision).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAutomation {
    /// The referenced autopilot name; empty for manual checks.
    pub name: String,
    /// The autopilot's script; empty when the name is unknown.
    pub script: String,
    /// Explicitly declared evidence filenames.
    pub evidence_refs: Vec<String>,
    /// Merged environment. BTreeMap keeps serialization deterministic.
    pub env: BTreeMap<String, String>,
}

impl ResolvedAutomation {
    /// The serialized automation block used for heuristic filename
    /// matching: the script followed by one `KEY=VALUE` line per env
    /// entry. A plain substring scan over this text decides whether an
    /// auxiliary file is "referenced".
    pub fn haystack(&self) -> String {
        let mut out = self.script.clone();
        for (key, value) in &self.env {
            out.push('\n');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
