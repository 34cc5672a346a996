//! Freshness engine orchestration
//!
//! Drives the full check pass: parse the manifest's dependency mapping, then
//! for each declared dependency locate its line, extract the current version,
//! resolve the latest version from the registry and classify the difference.
//! Per-dependency failures skip that dependency silently; only a malformed
//! manifest aborts the scan. Edit application is a pure text transform with
//! no I/O.

use crate::classify::{classify, is_outdated};
use crate::domain::{OutdatedEntry, UpdateEdit};
use crate::error::{ManifestError, RegistryError};
use crate::manifest::{find_dependency_line, find_spec_span, parse_dependencies};
use crate::parser::{constraint_prefix, extract_version};
use crate::progress::{NoProgress, ScanProgress};
use crate::registry::{HttpTransport, RegistryClient};
use tracing::{debug, warn};

/// Orchestrates check passes against one manifest at a time
///
/// Owns the registry client and with it the cache and rate-limit state, so
/// two engines never share hidden state. Scans take `&mut self`: at most one
/// check pass per engine is in flight.
pub struct FreshnessEngine {
    registry: RegistryClient,
}

impl FreshnessEngine {
    /// Create an engine backed by the live pub.dev registry
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self {
            registry: RegistryClient::new(Box::new(HttpTransport::new()?)),
        })
    }

    /// Create an engine over a custom registry client (for testing)
    pub fn with_registry(registry: RegistryClient) -> Self {
        Self { registry }
    }

    /// Scan the manifest text for outdated dependencies
    pub async fn scan(&mut self, text: &str) -> Result<Vec<OutdatedEntry>, ManifestError> {
        self.scan_with_progress(text, &mut NoProgress).await
    }

    /// Scan with milestone reporting
    ///
    /// Per-dependency progress is interpolated across a 10-90% band, matching
    /// the share of work the registry round-trips represent.
    pub async fn scan_with_progress(
        &mut self,
        text: &str,
        progress: &mut dyn ScanProgress,
    ) -> Result<Vec<OutdatedEntry>, ManifestError> {
        progress.report("Parsing manifest...", 0);
        let dependencies = parse_dependencies(text)?;

        if dependencies.is_empty() {
            progress.report("No dependencies found", 100);
            return Ok(Vec::new());
        }

        let lines: Vec<&str> = text.lines().collect();
        let total = dependencies.len();
        progress.report(&format!("Checking {} packages...", total), 10);

        let mut outdated = Vec::new();

        for (processed, dep) in dependencies.iter().enumerate() {
            let percent = 10 + ((processed * 80) / total) as u8;
            progress.report(&format!("Checking {}...", dep.name), percent);

            let Some(line_number) = find_dependency_line(&lines, &dep.name) else {
                debug!(package = %dep.name, "declaration line not found, skipping");
                continue;
            };

            let Some(current_version) = extract_version(&dep.raw_spec) else {
                debug!(package = %dep.name, spec = %dep.raw_spec, "no version in constraint, skipping");
                continue;
            };

            let Some(latest_version) = self.registry.resolve_latest(&dep.name).await else {
                continue;
            };

            if !is_outdated(&current_version, &latest_version) {
                continue;
            }

            // The span anchors on the literal spec text so the edit rewrites
            // exactly the original token
            let Some(column_span) = find_spec_span(lines[line_number], &dep.raw_spec) else {
                debug!(package = %dep.name, "spec token not found on its line, skipping");
                continue;
            };

            outdated.push(OutdatedEntry {
                name: dep.name.clone(),
                current_version: current_version.clone(),
                latest_version: latest_version.clone(),
                line_number,
                column_span,
                severity: classify(&current_version, &latest_version),
            });
        }

        progress.report(
            &format!("Found {} outdated packages", outdated.len()),
            100,
        );
        Ok(outdated)
    }

    /// Produce the replacement text for one version-token edit
    ///
    /// See [`apply_update`]; exposed on the engine so callers hold one handle.
    pub fn apply_update(&self, line: &str, edit: &UpdateEdit) -> Option<String> {
        apply_update(line, edit)
    }

    /// Empty the registry cache unconditionally
    pub fn clear_cache(&mut self) {
        self.registry.clear_cache();
    }
}

/// Computes the replacement string for one version token
///
/// Reads the original token through the edit's span on the given line. With
/// `keep_prefix` the operator/whitespace prefix captured from the original
/// token is re-attached to the new bare version; without it the bare version
/// stands alone. An empty version, empty span or out-of-bounds span declines
/// the edit (None) without mutating anything.
pub fn apply_update(line: &str, edit: &UpdateEdit) -> Option<String> {
    if edit.new_version.trim().is_empty() {
        warn!("declining edit with empty version");
        return None;
    }
    if edit.span.is_empty() {
        warn!("declining edit with empty span");
        return None;
    }

    let original = line.get(edit.span.start..edit.span.end)?;

    if edit.keep_prefix {
        Some(format!(
            "{}{}",
            constraint_prefix(original),
            edit.new_version
        ))
    } else {
        Some(edit.new_version.clone())
    }
}

/// Applies a set of scan findings back into the manifest text
///
/// Splices each entry's replacement into its line via the recorded span,
/// preserving everything around the original token. Entries whose edit is
/// declined are left untouched.
pub fn apply_edits(text: &str, entries: &[OutdatedEntry], keep_prefix: bool) -> String {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    for entry in entries {
        let Some(line) = lines.get(entry.line_number) else {
            continue;
        };
        let edit = UpdateEdit::new(entry.column_span, entry.latest_version.clone(), keep_prefix);
        if let Some(replacement) = apply_update(line, &edit) {
            let spliced = format!(
                "{}{}{}",
                &line[..entry.column_span.start],
                replacement,
                &line[entry.column_span.end..]
            );
            lines[entry.line_number] = spliced;
        }
    }

    let mut result = lines.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}
