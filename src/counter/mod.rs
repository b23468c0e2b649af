//! Build-descriptor parsing and line/size aggregation
//!
//! Three-level ownership tree: Solution → Project → SourceFile.
//! Every level is parsed eagerly at construction and read-only afterward;
//! aggregate totals are computed on demand by summing over children.

mod project;
mod solution;
mod source_file;

// Re-export the descriptor types
pub use project::Project;
pub use solution::{Solution, PROJECT_EXTENSION};
pub use source_file::SourceFile;

use std::path::{Path, PathBuf};

/// Errors from descriptor parsing and source-file reading.
///
/// All of these are fatal to the run: a malformed or unreadable project tree
/// is an unrecoverable input error, not a condition to partially tolerate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error parsing solution {}: {source}", .path.display())]
    ParseSolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing project {}: {source}", .path.display())]
    ParseProject {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Error reading source file {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Join a descriptor-relative path fragment onto `dir`.
///
/// Both descriptor formats write fragments with Windows `\` separators;
/// normalize them so resolution works on any host.
pub(crate) fn join_fragment(dir: &Path, fragment: &str) -> PathBuf {
    dir.join(fragment.replace('\\', "/"))
}

/// Case-insensitive extension comparison.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Derive a display name from the file name with its extension stripped.
pub(crate) fn file_stem_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
