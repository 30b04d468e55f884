//! # pymodlenlib
//!
//! Finds Python modules that grew past a line-count limit and explains how to
//! split them.
//!
//! ## Overview
//!
//! The library is a three-stage pipeline, each stage in its own module:
//!
//! - **source**: decide which candidate paths are existing, regular `.py` files
//! - **data**: count lines and keep the files over the limit as [`Violation`]s
//! - **output**: classify violations as test files or application modules and
//!   render a [`Report`] with remediation suggestions
//!
//! Candidate lists usually come from a commit hook and may contain deleted
//! files, directories, and non-Python files. Those are skipped, never treated
//! as failures. File contents are decoded lossily, so odd encodings are still
//! counted.
//!
//! ## Example
//!
//! ```rust
//! use pymodlenlib::{find_violations_with, CheckOptions, FilterConfig, Report};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("tests")).unwrap();
//! let app = dir.path().join("app.py");
//! let test = dir.path().join("tests/test_app.py");
//! fs::write(&app, "x = 1\n".repeat(40)).unwrap();
//! fs::write(&test, "assert True\n".repeat(60)).unwrap();
//!
//! let options = CheckOptions::new()
//!     .max_lines(30)
//!     .filter(FilterConfig::new().exclude("**/migrations/*.py").unwrap());
//! let violations = find_violations_with(&[&app, &test], &options);
//! assert_eq!(violations.len(), 2);
//!
//! let report = Report::new(&violations, options.max_lines);
//! assert_eq!(report.tests.len(), 1);
//! assert_eq!(report.application.len(), 1);
//! assert!(report.to_text().contains("(60 lines)"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    count_lines, count_lines_from_reader, find_violations, find_violations_with, Violation,
};
pub use error::PymodlenError;
pub use options::{CheckOptions, DEFAULT_MAX_LINES};
pub use output::{classify, format_report, is_test_path, Category, Report};
pub use source::{normalize_path, FilterConfig, SkipReason};

/// Result type for pymodlenlib operations
pub type Result<T> = std::result::Result<T, PymodlenError>;
