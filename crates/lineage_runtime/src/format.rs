//! Text rendering of responses.
//!
//! The engine answers in structured values; this module turns them into
//! the lines a user sees.

use lineage_engine::{Payload, Response, ResultCode};
use lineage_foundation::{Error, ErrorCategory};
use lineage_storage::{ForestStats, PedigreeEntry, Registration};

const NO_RESULTS: &str = "No results found.";

/// Renders an echoed input line: `[  12] >> who are Bob's children`.
#[must_use]
pub fn echo(line: usize, prompt: &str, text: &str) -> String {
    format!("[{line:>4}] {prompt}{text}")
}

/// Renders a full response, diagnostics first.
#[must_use]
pub fn response(response: &Response) -> Vec<String> {
    let mut lines: Vec<String> = response.diagnostics.iter().map(diagnostic).collect();
    if response.code == ResultCode::NoResults {
        lines.push(NO_RESULTS.to_string());
    } else {
        lines.extend(payload(&response.payload));
    }
    lines
}

/// Renders one diagnostic.
#[must_use]
pub fn diagnostic(error: &Error) -> String {
    let message = match error.category() {
        ErrorCategory::NoSubject => "Error: No such subject found.".to_string(),
        ErrorCategory::DateMismatch => "Error: Name / Date quantity mismatch.".to_string(),
        ErrorCategory::NoObjects => "Error: No objects found.".to_string(),
        ErrorCategory::Grammar | ErrorCategory::Internal => format!("Error: {error}."),
    };
    match &error.context {
        Some(context) if error.category() == ErrorCategory::Grammar => {
            format!("{message} ({context})")
        }
        _ => message,
    }
}

/// Renders a payload.
#[must_use]
pub fn payload(payload: &Payload) -> Vec<String> {
    match payload {
        Payload::None => Vec::new(),
        Payload::Cleared(removed) => vec![format!("Family tree cleared, {removed} removed.")],
        Payload::Started {
            founder,
            born,
            registration,
        } => {
            let mut lines = vec![format!("A new family tree started with {founder} in {born}.")];
            if registration.created.len() > 1 {
                lines.push(format!(
                    "{} more founder(s) started: {}.",
                    registration.created.len() - 1,
                    registration.created[1..].join(", ")
                ));
            }
            lines
        }
        Payload::Registered(registration) => vec![births(registration)],
        Payload::Names(names) if names.is_empty() => vec![NO_RESULTS.to_string()],
        Payload::Names(names) => vec![names.join(" ")],
        Payload::Pedigree(entries) if entries.is_empty() => vec![NO_RESULTS.to_string()],
        Payload::Pedigree(entries) => entries.iter().map(pedigree_line).collect(),
        Payload::Count(count) => vec![count.to_string()],
        Payload::Stats(stats) => vec![summary(stats)],
        Payload::Verdict(true) => vec!["Yes.".to_string()],
        Payload::Verdict(false) => vec!["No.".to_string()],
    }
}

fn births(registration: &Registration) -> String {
    format!(
        "{} child(ren) born to [{}],  {} duplicates skipped.",
        registration.created.len(),
        registration.parent,
        registration.skipped.len()
    )
}

fn pedigree_line(entry: &PedigreeEntry) -> String {
    format!("{}{} ({})", "  ".repeat(entry.depth), entry.name, entry.born)
}

fn summary(stats: &ForestStats) -> String {
    format!(
        "{} people in {} families across {} generations.",
        stats.people, stats.families, stats.generations
    )
}
