//! Solution-descriptor parsing
//!
//! Solution files (`.sln`) are plain text. A project reference is a line of
//! the shape
//!
//! ```text
//! Project("{GUID}") = "Name", "Rel\Path\App.csproj", "{GUID}"
//! ```
//!
//! capturing the display name first and the descriptor path fragment second.
//! Only references that resolve to the supported project extension are kept;
//! everything else is silently skipped.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use super::{file_stem_name, has_extension, join_fragment, Error, Project, Result};

/// Extension of project descriptors a solution is allowed to reference.
pub const PROJECT_EXTENSION: &str = "csproj";

/// Project-reference pattern: multi-line, case-insensitive; `.` stays within
/// a line, so this is equivalent to matching each line independently.
const PROJECT_LINE: &str = r#"(?im)^Project.*=.*"(.*)",\s*"(.*)","#;

/// A multi-project build: a descriptor plus its member projects, filtered to
/// the supported project type, in discovery order.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Resolved path of the descriptor.
    pub file_name: PathBuf,
    /// Display name, derived from the file stem.
    pub name: String,
    /// Member projects, in the order their references appear.
    pub projects: Vec<Project>,
}

/// One project reference captured from solution text, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectRef {
    pub name: String,
    pub path: String,
}

impl Solution {
    /// Parse a solution descriptor and all member projects it references.
    pub fn parse(path: impl Into<PathBuf>) -> Result<Self> {
        let file_name = path.into();
        let name = file_stem_name(&file_name);
        let dir = file_name
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let text = fs::read_to_string(&file_name).map_err(|source| Error::ParseSolution {
            path: file_name.clone(),
            source,
        })?;

        let mut projects = Vec::new();
        for reference in scan_project_refs(&text) {
            let project_path = join_fragment(&dir, &reference.path);
            if !has_extension(&project_path, PROJECT_EXTENSION) {
                debug!(path = %project_path.display(), "skipping non-project reference");
                continue;
            }
            projects.push(Project::parse_named(project_path, reference.name)?);
        }

        debug!(path = %file_name.display(), projects = projects.len(), "parsed solution");

        Ok(Solution {
            file_name,
            name,
            projects,
        })
    }

    /// Total line count over all member projects.
    pub fn lines_count(&self) -> u64 {
        self.projects.iter().map(|p| p.lines_count()).sum()
    }

    /// Total byte size over all member projects.
    pub fn size(&self) -> u64 {
        self.projects.iter().map(|p| p.size()).sum()
    }
}

/// Scan solution text for project-reference lines, in order of appearance.
pub(crate) fn scan_project_refs(text: &str) -> Vec<ProjectRef> {
    let re = Regex::new(PROJECT_LINE).expect("Invalid regex");

    re.captures_iter(text)
        .map(|caps| ProjectRef {
            name: caps[1].to_string(),
            path: caps[2].to_string(),
        })
        .collect()
}
