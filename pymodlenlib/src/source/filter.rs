//! Candidate filtering with glob pattern support.
//!
//! Commit hooks hand over whatever was staged: deleted paths, directories,
//! config files, images. This module decides which of those are Python
//! modules that should be counted.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use crate::error::PymodlenError;
use crate::Result;

/// Extension of the files this tool checks, compared case-insensitively.
pub const SOURCE_EXTENSION: &str = "py";

/// Why a candidate path was not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Path does not exist (deleted or renamed)
    Missing,
    /// Path exists but is a directory, socket, or similar
    NotRegularFile,
    /// File does not carry the source extension
    NotSource,
    /// File matched an exclude pattern
    Excluded,
}

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (excludes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| PymodlenError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add an already compiled exclude pattern.
    pub fn exclude_pattern(mut self, pattern: Pattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check a path against the name-based criteria only.
    ///
    /// A path matches if:
    /// 1. It has the `.py` extension (any case)
    /// 2. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        self.name_skip_reason(path).is_none()
    }

    /// Decide whether `path` should be counted, touching the filesystem.
    ///
    /// Returns `None` when the path is an existing regular source file that
    /// no exclude pattern matches.
    pub fn skip_reason(&self, path: &Path) -> Option<SkipReason> {
        // Follows symlinks, so a link to a regular file is counted
        match path.metadata() {
            Err(_) => return Some(SkipReason::Missing),
            Ok(meta) if !meta.is_file() => return Some(SkipReason::NotRegularFile),
            Ok(_) => {}
        }

        self.name_skip_reason(path)
    }

    fn name_skip_reason(&self, path: &Path) -> Option<SkipReason> {
        if !has_source_extension(path) {
            return Some(SkipReason::NotSource);
        }

        let path_str = path.to_string_lossy();
        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return Some(SkipReason::Excluded);
        }

        None
    }
}

/// Normalize a candidate path the way the hook caller sees it.
///
/// Drops `.` components, repeated separators and a trailing separator, so
/// `./pkg//mod.py/` becomes `pkg/mod.py`. A path made only of `.` stays `.`.
/// `..` is kept as is.
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let normalized: PathBuf = path
        .as_ref()
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() && !path.as_ref().as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    normalized
}

/// Check whether the path's extension is the source extension, ignoring case.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SOURCE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_source_extension_is_case_insensitive() {
        assert!(has_source_extension(Path::new("pkg/module.py")));
        assert!(has_source_extension(Path::new("MODULE.PY")));
        assert!(has_source_extension(Path::new("legacy.Py")));
        assert!(!has_source_extension(Path::new("notes.txt")));
        assert!(!has_source_extension(Path::new("stub.pyi")));
        assert!(!has_source_extension(Path::new("Makefile")));
        assert!(!has_source_extension(Path::new(".py")));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./big.py"), PathBuf::from("big.py"));
        assert_eq!(normalize_path("big.py/"), PathBuf::from("big.py"));
        assert_eq!(normalize_path("pkg//./mod.py"), PathBuf::from("pkg/mod.py"));
        assert_eq!(normalize_path("pkg/../big.py"), PathBuf::from("pkg/../big.py"));
        assert_eq!(normalize_path("/repo/./app.py"), PathBuf::from("/repo/app.py"));
        assert_eq!(normalize_path("./"), PathBuf::from("."));
        assert_eq!(normalize_path("tests/x.py"), PathBuf::from("tests/x.py"));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/migrations/*.py").unwrap();

        assert!(filter.matches(Path::new("app/models.py")));
        assert!(!filter.matches(Path::new("app/migrations/0001_initial.py")));
        assert!(!filter.matches(Path::new("app/README.md")));
    }

    #[test]
    fn test_filter_with_multiple_patterns() {
        let filter = FilterConfig::new()
            .exclude_many(&["**/generated/**", "vendor/*"])
            .unwrap();

        assert!(filter.matches(Path::new("src/app.py")));
        assert!(!filter.matches(Path::new("src/generated/pb2.py")));
        assert!(!filter.matches(Path::new("vendor/six.py")));
    }

    #[test]
    fn test_skip_reason_missing_path() {
        let temp = tempdir().unwrap();
        let filter = FilterConfig::new();

        assert_eq!(
            filter.skip_reason(&temp.path().join("deleted.py")),
            Some(SkipReason::Missing)
        );
    }

    #[test]
    fn test_skip_reason_directory_named_like_source() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("package.py");
        fs::create_dir(&dir).unwrap();

        let filter = FilterConfig::new();
        assert_eq!(filter.skip_reason(&dir), Some(SkipReason::NotRegularFile));
    }

    #[test]
    fn test_skip_reason_regular_files() {
        let temp = tempdir().unwrap();
        let module = temp.path().join("module.py");
        let notes = temp.path().join("notes.txt");
        fs::write(&module, "x = 1\n").unwrap();
        fs::write(&notes, "hello\n").unwrap();

        let filter = FilterConfig::new();
        assert_eq!(filter.skip_reason(&module), None);
        assert_eq!(filter.skip_reason(&notes), Some(SkipReason::NotSource));
    }

    #[test]
    fn test_skip_reason_excluded() {
        let temp = tempdir().unwrap();
        let module = temp.path().join("generated.py");
        fs::write(&module, "x = 1\n").unwrap();

        let filter = FilterConfig::new().exclude("*/generated.py").unwrap();
        assert_eq!(filter.skip_reason(&module), Some(SkipReason::Excluded));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().exclude("[invalid");

        assert!(result.is_err());
        if let Err(PymodlenError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
