//! Configuration resolution — stage one of the pipeline.
//!
//! Parses the root configuration file, validates the selection path, and
//! determines the minimal set of auxiliary files relevant to the selected
//! check.

use crate::config::GateDocument;
use gatescribe_core::{
    CheckSelection, EvidenceFile, ExplainError, ResolvedAutomation, ResolvedFragment, Result,
    ROOT_CONFIG_FILENAME,
};
use tracing::debug;

/// Filename extensions treated as raw run-time inputs of the automation
/// rather than context a reader needs; never retained, even when the
/// filename appears verbatim in the script.
const DATA_EXTENSIONS: &[&str] = &[".json", ".csv", ".txt"];

/// Resolve a selection against the supplied files.
///
/// Returns `[rootFragmentFile, ...retained auxiliary files]`. The first
/// element always carries the [`ResolvedFragment`] under the canonical
/// root filename.
///
/// Validation is strictly top-down and stops at the first missing level:
/// an absent chapter is reported as [`ExplainError::InvalidChapter`] even
/// when the requirement and check keys would also be absent.
pub fn resolve(files: Vec<EvidenceFile>, selection: &CheckSelection) -> Result<Vec<EvidenceFile>> {
    let root_text = files
        .iter()
        .find(|f| f.filename == ROOT_CONFIG_FILENAME)
        .and_then(|f| f.raw_text())
        .ok_or_else(|| ExplainError::ConfigParse {
            detail: format!("root configuration file '{ROOT_CONFIG_FILENAME}' not supplied"),
        })?;
    let doc = GateDocument::from_toml(root_text)?;

    let chapter = doc
        .chapters
        .get(&selection.chapter)
        .ok_or_else(|| ExplainError::InvalidChapter(selection.chapter.clone()))?;
    let requirement = chapter
        .requirements
        .get(&selection.requirement)
        .ok_or_else(|| ExplainError::InvalidRequirement(selection.requirement.clone()))?;
    let check = requirement
        .checks
        .get(&selection.check)
        .ok_or_else(|| ExplainError::InvalidCheck(selection.check.clone()))?;

    let automation = match &check.automation {
        // Manual check: empty automation, nothing to reference.
        None => ResolvedAutomation::default(),
        Some(reference) => {
            let definition = doc.autopilots.get(&reference.autopilot);
            let mut env = definition.map(|d| d.env.clone()).unwrap_or_default();
            // Check-level keys win on collision.
            env.extend(reference.env.clone());
            ResolvedAutomation {
                name: reference.autopilot.clone(),
                script: definition.map(|d| d.run.clone()).unwrap_or_default(),
                evidence_refs: definition.map(|d| d.evidence.clone()).unwrap_or_default(),
                env,
            }
        }
    };
    let fragment = ResolvedFragment {
        title: check.title.clone(),
        automation,
    };

    let retained = select_auxiliary(&files, &fragment);
    debug!(
        chapter = %selection.chapter,
        requirement = %selection.requirement,
        check = %selection.check,
        autopilot = %fragment.automation.name,
        retained = retained.len(),
        "configuration fragment resolved"
    );

    let mut out = Vec::with_capacity(retained.len() + 1);
    out.push(EvidenceFile::fragment(fragment));
    out.extend(retained);
    Ok(out)
}

/// Pick the auxiliary files to keep alongside the fragment.
///
/// Explicit mode: a non-empty `evidence_refs` names exactly the files to
/// retain, in declaration order; names missing from the input are
/// silently skipped. Heuristic mode (empty `evidence_refs`): a non-root
/// file is kept iff it has no data-file extension and its filename occurs
/// verbatim in the serialized automation block. The heuristic is a plain
/// substring scan and tolerates false negatives.
fn select_auxiliary(files: &[EvidenceFile], fragment: &ResolvedFragment) -> Vec<EvidenceFile> {
    let refs = &fragment.automation.evidence_refs;
    if !refs.is_empty() {
        return refs
            .iter()
            .filter_map(|name| files.iter().find(|f| &f.filename == name).cloned())
            .collect();
    }

    let haystack = fragment.automation.haystack();
    files
        .iter()
        .filter(|f| {
            f.filename != ROOT_CONFIG_FILENAME
                && !DATA_EXTENSIONS.iter().any(|ext| f.filename.ends_with(ext))
                && haystack.contains(&f.filename)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatescribe_core::FileContent;

    const CONFIG: &str = r#"
[chapters."5"]
title = "Security"

[chapters."5".requirements."5.1"]
title = "Static scanning"

[chapters."5".requirements."5.1".checks."1"]
title = "Evaluate scan output"

[chapters."5".requirements."5.1".checks."1".automation]
autopilot = "scan-eval"

[chapters."5".requirements."5.1".checks."1".automation.env]
MODE = "strict"

[autopilots.scan-eval]
run = "json-evaluator-autopilot --rules rules.yaml --input data.json"

[autopilots.scan-eval.env]
MODE = "lenient"
EXTRA = "notes.yaml"
"#;

    fn root() -> EvidenceFile {
        EvidenceFile::raw(ROOT_CONFIG_FILENAME, CONFIG)
    }

    fn selection() -> CheckSelection {
        CheckSelection::new("5", "5.1", "1")
    }

    fn fragment_of(resolved: &[EvidenceFile]) -> &ResolvedFragment {
        match &resolved[0].content {
            FileContent::Fragment(f) => f,
            FileContent::Raw(_) => panic!("first element must be the fragment"),
        }
    }

    #[test]
    fn fragment_first_with_root_filename() {
        let resolved = resolve(vec![root()], &selection()).unwrap();
        assert_eq!(resolved[0].filename, ROOT_CONFIG_FILENAME);
        let fragment = fragment_of(&resolved);
        assert_eq!(fragment.title, "Evaluate scan output");
        assert_eq!(fragment.automation.name, "scan-eval");
    }

    #[test]
    fn check_env_wins_over_autopilot_env() {
        let resolved = resolve(vec![root()], &selection()).unwrap();
        let env = &fragment_of(&resolved).automation.env;
        assert_eq!(env["MODE"], "strict");
        assert_eq!(env["EXTRA"], "notes.yaml");
    }

    #[test]
    fn validation_reports_first_missing_level() {
        // All three keys wrong: the chapter error must win.
        let err = resolve(vec![root()], &CheckSelection::new("9", "9.9", "9")).unwrap_err();
        assert!(matches!(err, ExplainError::InvalidChapter(k) if k == "9"));

        let err = resolve(vec![root()], &CheckSelection::new("5", "9.9", "9")).unwrap_err();
        assert!(matches!(err, ExplainError::InvalidRequirement(k) if k == "9.9"));

        let err = resolve(vec![root()], &CheckSelection::new("5", "5.1", "9")).unwrap_err();
        assert!(matches!(err, ExplainError::InvalidCheck(k) if k == "9"));
    }

    #[test]
    fn missing_root_file_is_parse_error() {
        let err = resolve(vec![EvidenceFile::raw("other.toml", "")], &selection()).unwrap_err();
        assert!(matches!(err, ExplainError::ConfigParse { .. }));
    }

    #[test]
    fn heuristic_keeps_referenced_non_data_files() {
        let files = vec![
            root(),
            EvidenceFile::raw("rules.yaml", "rules"),
            // Named in the env block, not the script.
            EvidenceFile::raw("notes.yaml", "notes"),
            // Same extension but never referenced.
            EvidenceFile::raw("unrelated.yaml", "noise"),
        ];
        let resolved = resolve(files, &selection()).unwrap();
        let names: Vec<&str> = resolved[1..].iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["rules.yaml", "notes.yaml"]);
    }

    #[test]
    fn heuristic_excludes_data_extensions_even_when_referenced() {
        // data.json appears verbatim in the script and must still be dropped.
        let files = vec![root(), EvidenceFile::raw("data.json", "{}")];
        let resolved = resolve(files, &selection()).unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn explicit_refs_override_heuristic_order() {
        let config = r#"
[chapters."5".requirements."5.1".checks."1"]
title = "Pinned evidence"

[chapters."5".requirements."5.1".checks."1".automation]
autopilot = "pinned"

[autopilots.pinned]
run = "filecheck --everything"
evidence = ["a.yaml", "b.yaml", "ghost.yaml"]
"#;
        let files = vec![
            EvidenceFile::raw(ROOT_CONFIG_FILENAME, config),
            // Input order deliberately reversed; output follows the refs.
            EvidenceFile::raw("b.yaml", "b"),
            EvidenceFile::raw("a.yaml", "a"),
            EvidenceFile::raw("stray.yaml", "stray"),
        ];
        let resolved = resolve(files, &selection()).unwrap();
        let names: Vec<&str> = resolved[1..].iter().map(|f| f.filename.as_str()).collect();
        // ghost.yaml is missing from the input: silently skipped.
        assert_eq!(names, vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn manual_check_resolves_empty_automation() {
        let config = r#"
[chapters."1".requirements."1.1".checks."1"]
title = "Hand-reviewed"
"#;
        let files = vec![
            EvidenceFile::raw(ROOT_CONFIG_FILENAME, config),
            EvidenceFile::raw("anything.yaml", "text"),
        ];
        let resolved = resolve(files, &CheckSelection::new("1", "1.1", "1")).unwrap();
        let fragment = fragment_of(&resolved);
        assert_eq!(fragment.automation.name, "");
        assert_eq!(fragment.automation.script, "");
        // Empty haystack retains nothing.
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn unknown_autopilot_degrades_to_empty_defaults() {
        let config = r#"
[chapters."1".requirements."1.1".checks."1"]
title = "Dangling reference"

[chapters."1".requirements."1.1".checks."1".automation]
autopilot = "does-not-exist"

[chapters."1".requirements."1.1".checks."1".automation.env]
KEY = "value"
"#;
        let files = vec![EvidenceFile::raw(ROOT_CONFIG_FILENAME, config)];
        let resolved = resolve(files, &CheckSelection::new("1", "1.1", "1")).unwrap();
        let automation = &fragment_of(&resolved).automation;
        assert_eq!(automation.name, "does-not-exist");
        assert_eq!(automation.script, "");
        assert!(automation.evidence_refs.is_empty());
        assert_eq!(automation.env["KEY"], "value");
    }
}
