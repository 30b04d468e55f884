//! Output formatting: classify violations and present them.
//!
//! This module handles the third and final stage of the pipeline. It
//! provides:
//!
//! - **Classification**: split violations into test files and application
//!   modules by path structure (`is_test_path`, `classify`)
//! - **Report**: the failure report with category-specific suggestions, as
//!   plain text or JSON
//!
//! Report is a pure presentation layer - it only formats data into strings.
//! Writing it anywhere is left to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pymodlenlib::output::Report;
//!
//! let report = Report::new(&violations, 1000);
//! print!("{}", report.to_text());
//! ```

pub mod classify;
pub mod report;

pub use classify::{classify, is_test_path, Category};
pub use report::{format_report, Report};
