//! Source selection: decide which candidate files to count.
//!
//! This module handles the first stage of the pipeline. A commit hook passes
//! every staged path, including deletions and non-Python files, and only
//! existing regular `.py` files that no exclude pattern matches go on to be
//! counted.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pymodlenlib::source::FilterConfig;
//!
//! let filter = FilterConfig::new().exclude("**/migrations/*.py")?;
//! assert!(filter.skip_reason(Path::new("app/models.py")).is_none());
//! ```

pub mod filter;

pub use filter::{
    has_source_extension, normalize_path, FilterConfig, SkipReason, SOURCE_EXTENSION,
};
