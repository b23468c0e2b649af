//! Project-descriptor parsing
//!
//! A project descriptor (`.csproj`) is an XML document. Every `Compile`
//! element declares one source file to count via its `Include` attribute,
//! a path fragment relative to the descriptor's directory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::{file_stem_name, join_fragment, Error, Result, SourceFile};

/// Build-item tag marking a compilable source entry.
const COMPILE_TAG: &[u8] = b"Compile";
/// Attribute holding the source path fragment.
const INCLUDE_ATTR: &[u8] = b"Include";

/// One build unit: a descriptor plus the source files it references,
/// in document order.
#[derive(Debug, Clone)]
pub struct Project {
    /// Resolved path of the descriptor.
    pub file_name: PathBuf,
    /// Display name (solution-supplied, or the file stem when standalone).
    pub name: String,
    /// Referenced source files, in document order.
    pub source_files: Vec<SourceFile>,
}

impl Project {
    /// Parse a standalone project descriptor; the display name is derived
    /// from the descriptor's file name with its extension stripped.
    pub fn parse(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = file_stem_name(&path);
        Self::parse_named(path, name)
    }

    /// Parse a project descriptor with a caller-supplied display name
    /// (the solution-driven case).
    pub fn parse_named(path: impl Into<PathBuf>, name: String) -> Result<Self> {
        let file_name = path.into();
        let dir = file_name
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let fragments = open_and_scan(&file_name).map_err(|source| Error::ParseProject {
            path: file_name.clone(),
            source,
        })?;

        let mut source_files = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            source_files.push(SourceFile::read(join_fragment(&dir, fragment))?);
        }

        debug!(path = %file_name.display(), files = source_files.len(), "parsed project");

        Ok(Project {
            file_name,
            name,
            source_files,
        })
    }

    /// Total line count over all referenced source files.
    pub fn lines_count(&self) -> u64 {
        self.source_files.iter().map(|f| f.lines_count).sum()
    }

    /// Total byte size over all referenced source files.
    pub fn size(&self) -> u64 {
        self.source_files.iter().map(|f| f.size).sum()
    }
}

fn open_and_scan(path: &Path) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let file = File::open(path)?;
    scan_compile_items(BufReader::new(file))
}

/// Scan an XML descriptor stream for `Compile` elements and collect their
/// `Include` attribute values, preserving document order.
///
/// Both `<Compile Include="..."/>` and `<Compile Include="...">...</Compile>`
/// forms count; elements without an `Include` attribute are ignored.
pub(crate) fn scan_compile_items<R: BufRead>(
    reader: R,
) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_reader(reader);
    let mut buf = Vec::new();
    let mut items = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == COMPILE_TAG => {
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    if attr.key.as_ref() == INCLUDE_ATTR {
                        items.push(attr.unescape_value()?.into_owned());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}
