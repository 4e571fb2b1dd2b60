//! The autopilot catalog — reference data, not mutable state.
//!
//! Maps recognized autopilot names to one-line descriptions used in the
//! "Autopilots Section" of the user prompt. The lookup is a plain
//! substring scan over the resolved script: permissive, deliberately not
//! a reference-tracking parser. A script may surface several entries.

/// One recognized autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// All recognized autopilots, in declaration order. Immutable at runtime.
pub static AUTOPILOT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "json-evaluator",
        description: "evaluates conditions against the fields of a JSON result file",
    },
    CatalogEntry {
        name: "sql-evaluator",
        description: "runs a SQL query against a result database and checks the returned rows",
    },
    CatalogEntry {
        name: "manual-answer-evaluator",
        description: "checks whether a recorded manual answer is present and not expired",
    },
    CatalogEntry {
        name: "filecheck",
        description: "asserts that named files exist, are non-empty, or match size limits",
    },
    CatalogEntry {
        name: "pdf-signature-evaluator",
        description: "verifies digital signatures on PDF documents against a signer list",
    },
    CatalogEntry {
        name: "html-checker",
        description: "scans HTML reports for forbidden or required markers",
    },
    CatalogEntry {
        name: "git-fetcher",
        description: "downloads branch, tag, or pull-request metadata from a Git service",
    },
    CatalogEntry {
        name: "jira-fetcher",
        description: "fetches issues from a Jira filter for downstream evaluation",
    },
    CatalogEntry {
        name: "sonarqube",
        description: "retrieves a project's quality-gate status from SonarQube",
    },
    CatalogEntry {
        name: "splunk-fetcher",
        description: "executes a Splunk search and stores the result for evaluation",
    },
];

/// Every catalog entry whose name occurs as a substring of the script,
/// in catalog-declaration order.
pub fn matches_in_script(script: &str) -> Vec<&'static CatalogEntry> {
    AUTOPILOT_CATALOG
        .iter()
        .filter(|entry| script.contains(entry.name))
        .collect()
}
