//! Line counting for source files.
//!
//! Files are decoded as UTF-8 with replacement, so legacy encodings and stray
//! binary bytes never abort a run. Lines are delimited the way Python's
//! universal newlines mode delimits them: `\n`, `\r\n` and a lone `\r` each end
//! one line, and a trailing line without a terminator still counts.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::PymodlenError;
use crate::Result;

/// Count the lines of the file at `path`.
///
/// The file is opened read-only and closed before this returns.
///
/// # Example
///
/// ```rust
/// use pymodlenlib::count_lines;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("module.py");
/// fs::write(&path, "import os\n\nprint(os.getcwd())").unwrap();
///
/// assert_eq!(count_lines(&path).unwrap(), 3);
/// ```
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PymodlenError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    count_lines_from_reader(file).map_err(|e| match e {
        PymodlenError::Io(source) => PymodlenError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Count the lines produced by any reader.
///
/// This is useful for testing without actual files.
pub fn count_lines_from_reader<R: Read>(reader: R) -> Result<usize> {
    let mut bytes = Vec::new();
    BufReader::new(reader).read_to_end(&mut bytes)?;

    Ok(count_text_lines(&String::from_utf8_lossy(&bytes)))
}

/// Count the lines of already decoded text.
pub fn count_text_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut pending = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                lines += 1;
                pending = false;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines += 1;
                pending = false;
            }
            _ => pending = true,
        }
    }

    if pending {
        lines += 1;
    }

    lines
}
