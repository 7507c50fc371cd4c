//! Pattern file loading.
//!
//! Two on-disk formats are understood:
//!
//! ```text
//! .cells (plaintext):
//!   !Name: Glider          optional metadata / comment lines
//!   .O.                    one row per line, 'O' alive, '.' dead
//!   ..O
//!   OOO
//!
//! .rle (run-length encoded):
//!   #N Glider              metadata (#N name, #C comment, #O author)
//!   x = 3, y = 3, rule = B3/S23
//!   bo$2bo$3o!             <count><b|o> runs, '$' ends a row, '!' ends the pattern
//! ```
//!
//! Both decode to a [`ParsedPattern`]: rows of explicit cell markers. Rows may
//! be ragged; cells past the end of a short row are unspecified.

mod plaintext;
mod rle;

use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::RuleSet;

pub use plaintext::load_plaintext;
pub use rle::{MAX_PATTERN_EXTENT, load_rle};

/// Pattern loading errors.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern file {0} does not exist")]
    PatternFileNotFound(PathBuf),
    #[error("Unsupported pattern format {0} (expected .cells or .rle)")]
    UnsupportedPatternFormat(PathBuf),
    #[error("Failed to read pattern file {path}: {source}")]
    IoReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single decoded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Alive,
    Dead,
    /// Present in the row but neither alive nor dead; never written to a grid.
    Unspecified,
}

impl Marker {
    /// Character used when a row is printed back out.
    pub fn as_char(self) -> char {
        match self {
            Marker::Alive => 'o',
            Marker::Dead => '.',
            Marker::Unspecified => '?',
        }
    }
}

/// Decoded pattern plus whatever metadata the file carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPattern {
    /// Rows top to bottom, each left to right.
    pub rows: Vec<Vec<Marker>>,
    pub name: String,
    pub author: String,
    pub comments: Vec<String>,
    /// Width declared in an RLE header (0 if none).
    pub declared_width: usize,
    /// Height declared in an RLE header (0 if none).
    pub declared_height: usize,
    /// Rule declared in an RLE header.
    pub rule: Option<RuleSet>,
}

impl ParsedPattern {
    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Marker at `(x, y)`; anything past the end of a row is unspecified.
    pub fn marker(&self, x: usize, y: usize) -> Marker {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Marker::Unspecified)
    }

    /// Number of alive markers.
    pub fn alive_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&m| m == Marker::Alive)
            .count()
    }

    /// Rows as strings of `o` / `.` / `?`, without padding.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|m| m.as_char()).collect())
            .collect()
    }
}

/// Supported pattern file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    Plaintext,
    Rle,
}

impl PatternFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cells" => Some(PatternFormat::Plaintext),
            "rle" => Some(PatternFormat::Rle),
            _ => None,
        }
    }
}

/// Load a pattern file, dispatching on its extension.
///
/// A file that exists but cannot be read is logged and yields an empty
/// pattern rather than an error.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ParsedPattern, PatternError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PatternError::PatternFileNotFound(path.to_path_buf()));
    }
    let format = PatternFormat::from_path(path)
        .ok_or_else(|| PatternError::UnsupportedPatternFormat(path.to_path_buf()))?;

    let pattern = decode(format, read_bytes(path));
    log::info!(
        "Loaded pattern {} ({}x{}, {} alive)",
        path.display(),
        pattern.width(),
        pattern.height(),
        pattern.alive_count()
    );
    Ok(pattern)
}

/// Decode file contents, falling back to an empty pattern on a read error.
fn decode(format: PatternFormat, read: Result<Vec<u8>, PatternError>) -> ParsedPattern {
    match read {
        Ok(bytes) => match format {
            PatternFormat::Plaintext => load_plaintext(&bytes),
            PatternFormat::Rle => load_rle(&bytes),
        },
        Err(e) => {
            log::warn!("{e}; using an empty pattern");
            ParsedPattern::default()
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, PatternError> {
    fs::read(path).map_err(|source| PatternError::IoReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempdir().unwrap();
        let cells = write_file(dir.path(), "glider.cells", "!Name: Glider\n.O.\n..O\nOOO\n");
        let rle = write_file(dir.path(), "glider.RLE", "x = 3, y = 3\nbo$2bo$3o!\n");

        let from_cells = load(&cells).unwrap();
        let from_rle = load(&rle).unwrap();
        assert_eq!(from_cells.row_strings(), vec![".o.", "..o", "ooo"]);
        assert_eq!(from_rle.row_strings(), vec![".o", "..o", "ooo"]);
        assert_eq!(from_cells.alive_count(), 5);
        assert_eq!(from_rle.alive_count(), 5);
    }

    #[test]
    fn test_read_error_yields_empty_pattern() {
        let denied = || PatternError::IoReadError {
            path: PathBuf::from("locked.rle"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(denied().to_string().contains("locked.rle"));

        for format in [PatternFormat::Rle, PatternFormat::Plaintext] {
            let pattern = decode(format, Err(denied()));
            assert!(pattern.is_empty());
            assert_eq!(pattern.rule, None);
        }
    }

    #[test]
    fn test_decode_readable_bytes() {
        let pattern = decode(PatternFormat::Rle, Ok(b"2o!".to_vec()));
        assert_eq!(pattern.alive_count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load(dir.path().join("nope.rle")).unwrap_err();
        assert!(matches!(err, PatternError::PatternFileNotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "glider.txt", ".o.\n");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedPatternFormat(_)));
    }

    #[test]
    fn test_directory_is_not_a_pattern() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("shapes.rle");
        fs::create_dir(&sub).unwrap();
        assert!(matches!(
            load(&sub),
            Err(PatternError::PatternFileNotFound(_))
        ));
    }

    #[test]
    fn test_ragged_rows_are_unspecified() {
        let pattern = load_rle(b"bo$2o$o!");
        assert_eq!(pattern.width(), 2);
        assert_eq!(pattern.height(), 3);
        assert_eq!(pattern.marker(1, 2), Marker::Unspecified);
        assert_eq!(pattern.marker(0, 2), Marker::Alive);
        assert_eq!(pattern.marker(5, 5), Marker::Unspecified);
    }
}
