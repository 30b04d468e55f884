//! Data collection: count lines and detect violations.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Counting**: lossy, universal-newline line counting (`count_lines`)
//! - **Detection**: filtering candidates and keeping files over the limit
//!   (`find_violations`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use pymodlenlib::data::{find_violations_with, Violation};
//! use pymodlenlib::CheckOptions;
//!
//! let violations = find_violations_with(&["app/models.py"], &CheckOptions::new());
//! ```

pub mod counter;
pub mod violation;

pub use counter::{count_lines, count_lines_from_reader, count_text_lines};
pub use violation::{find_violations, find_violations_with, Violation};
