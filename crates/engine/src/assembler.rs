//! Prompt assembly — stage two of the pipeline.
//!
//! Renders the fixed system message (instructions plus worked examples)
//! and the dynamic user message (serialized fragment, auxiliary file
//! lines, autopilot catalog hits). Pure: identical inputs always produce
//! identical output, and the system message never varies with input.

use crate::catalog;
use gatescribe_core::{EvidenceFile, ExplanationPrompt, FileContent, ResolvedFragment};

/// The instructional half of the system message. Never trimmed.
const SYSTEM_INSTRUCTIONS: &str = "\
You are an assistant that explains automated quality-gate checks to \
non-technical readers. You receive a configuration fragment describing \
one check, the auxiliary files it references, and a catalog entry for \
each recognized autopilot in its script.

Respond with a numbered list of 2 to 5 steps describing what the check \
does, followed by a single-sentence summary. Describe observable \
behaviour only; do not speculate about intent. If the configuration \
mentions a file that was not supplied, state that the file is consulted \
without guessing its contents. Do not repeat the configuration verbatim.";

/// Worked input/output example pairs appended verbatim after the
/// instructions.
const WORKED_EXAMPLES: &[(&str, &str)] = &[
    (
        "Code Section:\n\
         title = \"Evaluate the scanner report\"\n\
         [automation]\n\
         name = \"scan-eval\"\n\
         script = \"json-evaluator-autopilot --rules rules.yaml\"\n\
         Autopilots Section:\n\
         - json-evaluator: evaluates conditions against the fields of a JSON result file",
        "1. The check runs the json-evaluator autopilot on the scanner's JSON report.\n\
         2. The conditions in rules.yaml decide which findings are acceptable.\n\
         3. The check passes only if every condition holds.\n\
         Summary: the scanner report is automatically evaluated against the rules in rules.yaml.",
    ),
    (
        "Code Section:\n\
         title = \"License file present\"\n\
         [automation]\n\
         name = \"license-check\"\n\
         script = \"filecheck --exists LICENSE\"\n\
         Autopilots Section:\n\
         - filecheck: asserts that named files exist, are non-empty, or match size limits",
        "1. The check looks for a file named LICENSE in the repository.\n\
         2. It fails if the file is missing.\n\
         Summary: the repository must ship a LICENSE file.",
    ),
];

/// Literal marker emitted when no catalog entry matches the script.
const NO_AUTOPILOT_MATCH: &str =
    "- No recognized autopilot. Derive the behaviour from the script in the Code Section.";

/// Assemble the two-part prompt from the resolver's output.
///
/// Precondition: `files[0]` carries the resolved fragment. The resolver
/// guarantees this; handing raw files straight in is a programming error.
pub fn assemble(files: &[EvidenceFile]) -> ExplanationPrompt {
    let FileContent::Fragment(fragment) = &files[0].content else {
        panic!("assemble requires the resolver's fragment entry at index 0");
    };
    ExplanationPrompt {
        system: gatescribe_core::PromptMessage::system(system_content()),
        user: gatescribe_core::PromptMessage::user(user_content(fragment, &files[1..])),
    }
}

/// The fixed system message: instructions followed by the worked examples.
pub fn system_content() -> String {
    let mut out = String::from(SYSTEM_INSTRUCTIONS);
    for (input, output) in WORKED_EXAMPLES {
        out.push_str("\n\nExample input:\n");
        out.push_str(input);
        out.push_str("\nExample output:\n");
        out.push_str(output);
    }
    out
}

/// The dynamic user message: fragment, auxiliary lines, catalog hits.
fn user_content(fragment: &ResolvedFragment, auxiliary: &[EvidenceFile]) -> String {
    let mut sections: Vec<String> = Vec::new();

    let serialized = toml::to_string_pretty(fragment).unwrap_or_default();
    sections.push(format!("Code Section:\n{serialized}"));

    for file in auxiliary {
        if let Some(text) = file.raw_text() {
            sections.push(render_file_line(&file.filename, text));
        }
    }

    let mut autopilots = String::from("Autopilots Section:");
    let hits = catalog::matches_in_script(&fragment.automation.script);
    if hits.is_empty() {
        autopilots.push('\n');
        autopilots.push_str(NO_AUTOPILOT_MATCH);
    } else {
        for entry in hits {
            autopilots.push_str(&format!("\n- {}: {}", entry.name, entry.description));
        }
    }
    sections.push(autopilots);

    sections.join("\n")
}

/// The exact line an auxiliary file occupies in the user message. The
/// trimmer removes this literal text, so renderer and trimmer must agree
/// byte-for-byte.
pub fn render_file_line(filename: &str, content: &str) -> String {
    format!("- {filename}: {content}")
}
