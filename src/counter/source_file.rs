//! Source-file metrics — line count and on-disk size
//!
//! Line-counting convention: one line per `BufRead::lines` item, i.e. every
//! `\n`-terminated segment plus a final unterminated segment. An empty file
//! has 0 lines and a trailing newline does not add a phantom final line.
//! Byte size comes from file metadata, never from decoded text.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Error, Result};

/// Metrics for a single referenced source file, computed once at
/// construction and immutable thereafter.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Resolved path of the file.
    pub file_name: PathBuf,
    /// Number of text lines.
    pub lines_count: u64,
    /// Size in bytes, per filesystem metadata.
    pub size: u64,
}

impl SourceFile {
    /// Read `path` and record its line count and byte size.
    ///
    /// Any open/read failure is fatal for the whole run; callers propagate
    /// it unchanged (no skip-and-continue).
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let file_name = path.into();

        let lines_count = count_lines(&file_name).map_err(|source| Error::ReadSource {
            path: file_name.clone(),
            source,
        })?;
        let size = fs::metadata(&file_name)
            .map_err(|source| Error::ReadSource {
                path: file_name.clone(),
                source,
            })?
            .len();

        debug!(path = %file_name.display(), lines = lines_count, size, "read source file");

        Ok(SourceFile {
            file_name,
            lines_count,
            size,
        })
    }
}

/// Count lines in a single file via a buffered reader.
fn count_lines(path: &Path) -> std::io::Result<u64> {
    let reader = BufReader::new(fs::File::open(path)?);

    let mut count = 0;
    for line in reader.lines() {
        line?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_counts_lines_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.cs");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "line1").unwrap();
        writeln!(file, "line2").unwrap();
        writeln!(file, "line3").unwrap();

        let source = SourceFile::read(&path).unwrap();
        assert_eq!(source.lines_count, 3);
        assert_eq!(source.size, 18); // three lines of "lineN\n"
        assert_eq!(source.file_name, path);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.cs");
        File::create(&path).unwrap();

        let source = SourceFile::read(&path).unwrap();
        assert_eq!(source.lines_count, 0);
        assert_eq!(source.size, 0);
    }

    #[test]
    fn test_read_unterminated_last_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.cs");
        fs::write(&path, "one\ntwo\nthree").unwrap();

        let source = SourceFile::read(&path).unwrap();
        assert_eq!(source.lines_count, 3);
        assert_eq!(source.size, 13);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trailing.cs");
        fs::write(&path, "one\ntwo\n").unwrap();

        let source = SourceFile::read(&path).unwrap();
        assert_eq!(source.lines_count, 2);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.cs");

        let err = SourceFile::read(&path).unwrap_err();
        match err {
            Error::ReadSource { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ReadSource, got {:?}", other),
        }
    }
}
