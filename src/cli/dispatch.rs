//! Extension-based dispatch
//!
//! Decides between solution and project parsing from the target file's
//! extension, runs the count, and maps the outcome to an exit code.
//! User-level misuse (missing file, unsupported type) prints a message and
//! exits cleanly; descriptor and source-read failures abort the run with a
//! diagnostic on stderr and a failing exit code.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::args::Options;
use crate::cli::report::report;
use crate::cli::{Result, EXIT_FAILURE, EXIT_SUCCESS};
use crate::counter::{Project, Solution};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Supported descriptor kinds, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Solution,
    Project,
}

/// Run a `Count` invocation and return the process exit code.
pub fn run_count(options: Options, file_name: &str, log_file: Option<&str>) -> ExitCode {
    let path = absolutize(Path::new(file_name));
    let log_file = log_file.map(|f| absolutize(Path::new(f)));

    if !path.exists() {
        println!("File doesn't exists.");
        return EXIT_SUCCESS;
    }

    let Some(target) = classify(&path) else {
        println!("The file type is not supported.");
        return EXIT_SUCCESS;
    };

    match count(target, &path, options, log_file.as_deref()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Parse the target, print the selected metrics, append the optional log.
fn count(target: Target, path: &Path, options: Options, log_file: Option<&Path>) -> Result<()> {
    let (lines, size) = match target {
        Target::Solution => {
            let solution = Solution::parse(path)?;
            (solution.lines_count(), solution.size())
        }
        Target::Project => {
            let project = Project::parse(path)?;
            (project.lines_count(), project.size())
        }
    };

    info!(path = %path.display(), lines, size, "counted");

    report(options, lines, size, log_file);
    Ok(())
}

/// Map a file extension to its descriptor kind (case-insensitive).
fn classify(path: &Path) -> Option<Target> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match ext.as_str() {
        "sln" => Some(Target::Solution),
        "csproj" => Some(Target::Project),
        _ => None,
    }
}

/// Resolve to an absolute path without touching the filesystem, so the
/// missing-file check still owns dangling paths.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify(Path::new("/a/App.sln")), Some(Target::Solution));
        assert_eq!(classify(Path::new("/a/App.SLN")), Some(Target::Solution));
        assert_eq!(classify(Path::new("App.csproj")), Some(Target::Project));
        assert_eq!(classify(Path::new("App.CsProj")), Some(Target::Project));
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(classify(Path::new("notes.txt")), None);
        assert_eq!(classify(Path::new("App.vcxproj")), None);
        assert_eq!(classify(Path::new("no_extension")), None);
    }

    #[test]
    fn test_absolutize_keeps_absolute_paths() {
        let path = Path::new("/already/absolute/App.sln");
        assert_eq!(absolutize(path), path);
    }

    #[test]
    fn test_absolutize_joins_cwd() {
        let resolved = absolutize(Path::new("App.sln"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("App.sln"));
    }
}
