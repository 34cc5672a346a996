//! Result rendering for the CLI
//!
//! Text output tints each finding by severity; JSON output serializes the
//! entries as-is for tooling.

use crate::domain::{OutdatedEntry, Severity};
use colored::Colorize;

/// Renders scan findings as a colored text report
pub fn render_text(entries: &[OutdatedEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", "All dependencies are up to date.".green());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Found {} outdated {}:\n\n",
        entries.len(),
        if entries.len() == 1 {
            "package"
        } else {
            "packages"
        }
    ));

    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    for entry in entries {
        let severity = match entry.severity {
            Severity::Major => entry.severity.as_str().red().bold(),
            Severity::Minor => entry.severity.as_str().yellow(),
            Severity::Patch => entry.severity.as_str().green(),
        };
        out.push_str(&format!(
            "  {:<width$}  {} -> {}  ({}, line {})\n",
            entry.name,
            entry.current_version,
            entry.latest_version.cyan(),
            severity,
            entry.line_number + 1,
            width = name_width,
        ));
    }

    out
}

/// Renders scan findings as pretty-printed JSON
pub fn render_json(entries: &[OutdatedEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
