//! Violation detection.
//!
//! Walks the candidate list once, in order, and keeps every source file whose
//! line count is over the limit. Candidates are normalized first (see
//! [`normalize_path`]); those that are missing, not regular files, not
//! Python, or excluded are skipped without error.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::options::CheckOptions;
use crate::source::filter::normalize_path;

use super::counter::count_lines;

/// A source file whose line count exceeds the configured limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Normalized path of the file
    pub path: PathBuf,
    /// Number of lines in the file
    pub line_count: usize,
}

impl Violation {
    /// Create a new violation.
    pub fn new(path: impl Into<PathBuf>, line_count: usize) -> Self {
        Self {
            path: path.into(),
            line_count,
        }
    }
}

/// Find source files over `max_lines`, using default filtering.
///
/// # Example
///
/// ```rust
/// use pymodlenlib::find_violations;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let big = dir.path().join("big.py");
/// let small = dir.path().join("small.py");
/// fs::write(&big, "x = 1\n".repeat(12)).unwrap();
/// fs::write(&small, "x = 1\n").unwrap();
///
/// let violations = find_violations(&[&big, &small], 10);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].line_count, 12);
/// ```
pub fn find_violations<P: AsRef<Path>>(files: &[P], max_lines: usize) -> Vec<Violation> {
    find_violations_with(files, &CheckOptions::new().max_lines(max_lines))
}

/// Find source files over the limit configured in `options`.
///
/// The result preserves the relative order of `files`.
pub fn find_violations_with<P: AsRef<Path>>(
    files: &[P],
    options: &CheckOptions,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for file in files {
        let path = normalize_path(file);
        let path = path.as_path();

        if let Some(reason) = options.filter.skip_reason(path) {
            tracing::debug!(path = %path.display(), ?reason, "skipping");
            continue;
        }

        let lines = match count_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("skipping unreadable file: {e}");
                continue;
            }
        };
        tracing::debug!(path = %path.display(), lines, "counted");

        if lines > options.max_lines {
            violations.push(Violation::new(path, lines));
        }
    }

    violations
}
