//! Test vs. application classification.

use std::path::{Component, Path};

use crate::data::violation::Violation;

/// Directory name that marks test code.
const TESTS_DIR: &str = "tests";

/// Which kind of code a path holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// Anything under a `tests` directory
    Test,
    /// Everything else
    Application,
}

impl Category {
    /// Determine the category from a file path.
    ///
    /// Only whole path components count, compared case-insensitively:
    /// `pkg/Tests/foo.py` is a test, `pkg/testsuite/foo.py` is not.
    pub fn from_file_path(path: impl AsRef<Path>) -> Self {
        if is_test_path(path) {
            Self::Test
        } else {
            Self::Application
        }
    }
}

/// Check whether any component of `path` is a `tests` directory.
pub fn is_test_path(path: impl AsRef<Path>) -> bool {
    path.as_ref().components().any(|component| match component {
        Component::Normal(os_str) => os_str.to_string_lossy().eq_ignore_ascii_case(TESTS_DIR),
        _ => false,
    })
}

/// Split violations into `(tests, application)`, keeping input order in each.
pub fn classify(violations: &[Violation]) -> (Vec<Violation>, Vec<Violation>) {
    violations
        .iter()
        .cloned()
        .partition(|v| Category::from_file_path(&v.path) == Category::Test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_directory_component() {
        assert!(is_test_path("pkg/tests/foo.py"));
        assert!(is_test_path("tests/big_test.py"));
        assert!(is_test_path("/repo/src/tests/unit/test_api.py"));
    }

    #[test]
    fn test_component_match_is_case_insensitive() {
        assert!(is_test_path("pkg/Tests/foo.py"));
        assert!(is_test_path("pkg/TESTS/foo.py"));
    }

    #[test]
    fn test_partial_names_are_application() {
        assert!(!is_test_path("pkg/testsuite/foo.py"));
        assert!(!is_test_path("pkg/test/foo.py"));
        assert!(!is_test_path("pkg/my_tests/foo.py"));
        assert!(!is_test_path("pkg/test_foo.py"));
        assert!(!is_test_path("tests.py"));
        assert!(!is_test_path("big.py"));
    }

    #[test]
    fn test_file_segment_named_tests_counts() {
        // A bare file named `tests` is still a matching component
        assert!(is_test_path("pkg/tests"));
    }

    #[test]
    fn test_redundant_separators() {
        assert!(is_test_path("pkg//tests/./foo.py"));
        assert!(is_test_path("./tests/foo.py"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_separators() {
        assert!(is_test_path(r"C:\repo\tests\foo.py"));
        assert!(!is_test_path(r"C:\repo\testsuite\foo.py"));
    }

    #[test]
    fn test_category_from_file_path() {
        assert_eq!(Category::from_file_path("tests/a.py"), Category::Test);
        assert_eq!(Category::from_file_path("app/a.py"), Category::Application);
    }

    #[test]
    fn test_classify_partitions_in_order() {
        let violations = vec![
            Violation::new("app/b.py", 1200),
            Violation::new("tests/test_b.py", 1100),
            Violation::new("app/a.py", 1500),
            Violation::new("pkg/tests/test_a.py", 1300),
        ];

        let (tests, application) = classify(&violations);

        assert_eq!(
            tests,
            vec![
                Violation::new("tests/test_b.py", 1100),
                Violation::new("pkg/tests/test_a.py", 1300),
            ]
        );
        assert_eq!(
            application,
            vec![
                Violation::new("app/b.py", 1200),
                Violation::new("app/a.py", 1500),
            ]
        );
        assert_eq!(tests.len() + application.len(), violations.len());
        assert!(tests.iter().all(|t| !application.contains(t)));
    }

    #[test]
    fn test_classify_empty() {
        let (tests, application) = classify(&[]);
        assert!(tests.is_empty());
        assert!(application.is_empty());
    }
}
