//! Input options for length checks.

use crate::source::filter::FilterConfig;

/// Line limit used when none is configured.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Options controlling which files are checked and against what limit.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// A file is a violation when its line count is strictly greater than this
    pub max_lines: usize,
    /// File filter configuration
    pub filter: FilterConfig,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            filter: FilterConfig::new(),
        }
    }
}

impl CheckOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum allowed number of lines per module.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}
