//! Quality-gate configuration document model.
//!
//! The root configuration file is a TOML document holding a three-level
//! chapter → requirement → check hierarchy plus a sibling table of named
//! autopilot definitions:
//!
//! ```toml
//! [header]
//! name = "Product quality gate"
//! version = "1.0"
//!
//! [chapters."5"]
//! title = "Security"
//!
//! [chapters."5".requirements."5.1"]
//! title = "Static security scanning"
//!
//! [chapters."5".requirements."5.1".checks."1"]
//! title = "Evaluate the scanner report"
//!
//! [chapters."5".requirements."5.1".checks."1".automation]
//! autopilot = "scan-eval"
//!
//! [autopilots.scan-eval]
//! run = "json-evaluator-autopilot --rules rules.yaml"
//! evidence = ["rules.yaml"]
//!
//! [autopilots.scan-eval.env]
//! RESULT_FILE = "report.json"
//! ```
//!
//! The document is parsed fresh per request and never mutated.

use gatescribe_core::{ExplainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed root configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateDocument {
    /// Optional document header.
    #[serde(default)]
    pub header: Header,

    /// Chapters keyed by their identifier (e.g. `"5"`).
    #[serde(default)]
    pub chapters: BTreeMap<String, Chapter>,

    /// Named, reusable autopilot definitions referenced by checks.
    #[serde(default)]
    pub autopilots: BTreeMap<String, AutopilotDef>,
}

impl GateDocument {
    /// Parse a document from its raw TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ExplainError::ConfigParse {
            detail: e.to_string(),
        })
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// A chapter groups requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub requirements: BTreeMap<String, Requirement>,
}

/// A requirement groups checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub checks: BTreeMap<String, CheckDef>,
}

/// The leaf unit of the hierarchy: one check, optionally bound to an
/// autopilot. A check without an `automation` table is manual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckDef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub automation: Option<CheckAutomation>,
}

/// A check's reference to an autopilot, with check-level env overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckAutomation {
    /// Name of the autopilot definition to run.
    pub autopilot: String,
    /// Check-level environment; wins over autopilot-level keys.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// A named autopilot definition: a script plus environment and explicit
/// evidence-file references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutopilotDef {
    /// The script invoked when the autopilot runs.
    #[serde(default)]
    pub run: String,
    /// Explicit evidence filenames this autopilot consumes.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Autopilot-level environment.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}
