//! Failure report with remediation guidance.
//!
//! A [`Report`] holds the classified violations of one run. It renders either
//! as the fixed plain-text layout shown to developers at commit time or as
//! JSON for tooling.

use std::fmt::Write;

use serde::Serialize;

use crate::data::violation::Violation;
use crate::Result;

use super::classify::classify;

const HEADER: &str = "Python module length check failed:";

const TEST_SUGGESTIONS: [&str; 3] = [
    "Split by feature/scenario into multiple files.",
    "Extract common setup into fixtures (conftest.py).",
    "Prefer parametrization where appropriate.",
];

const APPLICATION_SUGGESTIONS: [&str; 3] = [
    "Split into focused submodules within the same package.",
    "Preserve public API via re-exports in __init__.py if needed.",
    "Isolate shared types/constants to avoid import cycles.",
];

const FOOTER: &str = "Once refactored, re-run pre-commit or commit again.";

/// Violations of one run, split into test files and application modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Limit the violations were checked against
    pub max_lines: usize,
    /// Violations under a `tests` directory, in input order
    pub tests: Vec<Violation>,
    /// All other violations, in input order
    pub application: Vec<Violation>,
}

impl Report {
    /// Classify `violations` into a new report.
    pub fn new(violations: &[Violation], max_lines: usize) -> Self {
        let (tests, application) = classify(violations);
        Self {
            max_lines,
            tests,
            application,
        }
    }

    /// Whether the report has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.application.is_empty()
    }

    /// Total number of violations.
    pub fn len(&self) -> usize {
        self.tests.len() + self.application.len()
    }

    /// Render the plain-text report.
    pub fn to_text(&self) -> String {
        self.render_text_with(|heading| heading.to_string())
    }

    /// Render the plain-text report, passing every heading line through
    /// `highlight` (used for terminal styling).
    pub fn render_text_with<F>(&self, highlight: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "{}\n", highlight(HEADER));

        if !self.tests.is_empty() {
            let heading = format!("Test files exceeding the {}-line limit:", self.max_lines);
            write_section(&mut out, &highlight(&heading), &self.tests);
        }
        if !self.tests.is_empty() && !self.application.is_empty() {
            out.push('\n');
        }
        if !self.application.is_empty() {
            let heading = format!(
                "Application modules exceeding the {}-line limit:",
                self.max_lines
            );
            write_section(&mut out, &highlight(&heading), &self.application);
        }

        if !self.tests.is_empty() {
            write_suggestions(&mut out, &highlight("Suggestions (tests):"), &TEST_SUGGESTIONS);
        }
        if !self.application.is_empty() {
            write_suggestions(
                &mut out,
                &highlight("Suggestions (application modules):"),
                &APPLICATION_SUGGESTIONS,
            );
        }

        let _ = writeln!(out, "\n{FOOTER}");
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn write_section(out: &mut String, heading: &str, items: &[Violation]) {
    let _ = writeln!(out, "{heading}");
    for v in items {
        let _ = writeln!(out, "- {} ({} lines)", v.path.display(), v.line_count);
    }
}

fn write_suggestions(out: &mut String, heading: &str, suggestions: &[&str]) {
    let _ = writeln!(out, "\n{heading}");
    for s in suggestions {
        let _ = writeln!(out, "- {s}");
    }
}

/// Format the plain-text report for `violations`.
///
/// # Example
///
/// ```rust
/// use pymodlenlib::{format_report, Violation};
///
/// let report = format_report(&[Violation::new("big.py", 1200)], 1000);
/// assert!(report.contains("- big.py (1200 lines)"));
/// assert!(!report.contains("Test files"));
/// ```
pub fn format_report(violations: &[Violation], max_lines: usize) -> String {
    Report::new(violations, max_lines).to_text()
}
