use std::io::Write;

use crate::errors::MinispecResult;
use crate::models::outcome::Outcome;
use crate::models::spec::Spec;

/// Placeholder duration; the reporter does no real timing
const FAKE_DURATION: &str = "0.0000";

/// Fixed literal filename that switches the CLI into documentation mode
pub const DOC_FILENAME: &str = "README";

/// Fixed prose written ahead of the report in documentation mode
const DOC_PREAMBLE: &[&str] = &[
    "minispec",
    "========",
    "",
    "minispec is a minimal behaviour driven development library. A behaviour",
    "is described in natural language with `describe` and `it`, and verified",
    "by a plain boolean, an assertion based check, a QuickCheck property, or",
    "marked pending. Running the suite prints every requirement with its",
    "outcome, followed by a summary of examples and failures.",
    "",
    "The report below was produced by minispec's own specification suite.",
    "",
];

/// Render one spec as report lines.
///
/// Successes and pending specs are marked ` - `, failures ` x `. A failure
/// detail is appended in parentheses when present; a pending message gets a
/// second, indented `#` line. An empty pending message emits no second line.
pub fn document_spec(spec: &Spec) -> Vec<String> {
    match spec.outcome() {
        Outcome::Success => vec![format!(" - {}", spec.requirement())],
        Outcome::Fail(detail) if detail.is_empty() => {
            vec![format!(" x {}", spec.requirement())]
        }
        Outcome::Fail(detail) => {
            vec![format!(" x {} ({})", spec.requirement(), detail)]
        }
        Outcome::Pending(message) if message.is_empty() => {
            vec![format!(" - {}", spec.requirement())]
        }
        Outcome::Pending(message) => vec![
            format!(" - {}", spec.requirement()),
            format!("     # {}", message),
        ],
    }
}

/// Render one contiguous group: the shared label, then every spec in order.
pub fn document_group(specs: &[Spec]) -> Vec<String> {
    let mut lines = Vec::with_capacity(specs.len() + 1);
    if let Some(first) = specs.first() {
        lines.push(first.name().to_string());
    }
    for spec in specs {
        lines.extend(document_spec(spec));
    }
    lines
}

/// Naive English count phrase: always appends "s" except for exactly one,
/// so zero pluralizes ("0 failures").
pub fn quantify(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Split the flat spec sequence into runs of consecutive equal group labels.
///
/// Order preserving, never a re-sort: two groups declared with the same
/// label but not contiguously stay separate blocks in the report.
fn consecutive_groups(specs: &[Spec]) -> Vec<&[Spec]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for end in 1..=specs.len() {
        if end == specs.len() || specs[end].name() != specs[start].name() {
            groups.push(&specs[start..end]);
            start = end;
        }
    }
    groups
}

/// Assemble the full report as an in-memory line sequence.
///
/// Group blocks in declaration order separated by blank lines, then the
/// fixed-duration line and the example/failure summary. Pure: callers that
/// want to inspect the report before emitting it use this directly.
pub fn report_lines(specs: &[Spec]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, group) in consecutive_groups(specs).iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(document_group(group));
    }

    let failures = specs.iter().filter(|spec| spec.outcome().is_fail()).count();
    lines.push(String::new());
    lines.push(format!("Finished in {} seconds", FAKE_DURATION));
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        quantify(specs.len(), "example"),
        quantify(failures, "failure")
    ));
    lines
}

/// Write the full report to the given destination, one terminated line per
/// write.
pub fn run_and_report<W: Write>(destination: &mut W, specs: &[Spec]) -> MinispecResult<()> {
    for line in report_lines(specs) {
        writeln!(destination, "{}", line)?;
    }
    Ok(())
}

/// Write the documentation preamble followed by the full report.
pub fn write_documentation<W: Write>(destination: &mut W, specs: &[Spec]) -> MinispecResult<()> {
    for line in DOC_PREAMBLE {
        writeln!(destination, "{}", line)?;
    }
    run_and_report(destination, specs)
}
