//! Data model shared by the collector, extractor and assembler
//!
//! Every run builds these once, renders them, and throws them away.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::{capitalize_first, file_stem, make_relative};

/// Errors surfaced by a regeneration run
#[derive(Error, Debug)]
pub enum TocError {
    /// Collection root, a collected file or the README could not be read/written
    #[error("cannot access {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The README does not contain the splice marker
    #[error("{marker:?} section not found in {}", .path.display())]
    MissingMarker { marker: String, path: PathBuf },

    /// Two collected entries normalize to the same section name
    #[error("section {name:?} is claimed by both {first} and {second}")]
    SectionCollision {
        name: String,
        first: String,
        second: String,
    },

    /// Config file unreadable or invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TocError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TocError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TocError::Filesystem { .. } => crate::exitcode::IOERR,
            TocError::MissingMarker { .. } => crate::exitcode::MISSING_MARKER,
            TocError::SectionCollision { .. } => crate::exitcode::DATAERR,
            TocError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}

/// A markdown file found under the collection root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    /// Absolute (or root-joined) path on disk
    pub path: PathBuf,

    /// Path relative to the collection root, '/' separated
    pub relative: String,

    /// File name without the markdown extension
    pub stem: String,

    /// Raw text, read once
    pub content: String,
}

impl MarkdownFile {
    /// Read a collected file
    pub fn load(path: &Path, collection_root: &Path) -> Result<Self, TocError> {
        let bytes = std::fs::read(path).map_err(|e| TocError::filesystem(path, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), "not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Self::from_content(path, collection_root, content))
    }

    /// Build from already-read content
    pub fn from_content(path: &Path, collection_root: &Path, content: impl Into<String>) -> Self {
        let relative = make_relative(path, collection_root)
            .unwrap_or_else(|| crate::core::paths::normalize_path(path));
        Self {
            path: path.to_path_buf(),
            relative,
            stem: file_stem(path),
            content: content.into(),
        }
    }

    /// Path components relative to the collection root
    pub fn components(&self) -> Vec<&str> {
        self.relative.split('/').filter(|c| !c.is_empty()).collect()
    }

    /// Display name used for sections and subsections
    pub fn display_name(&self) -> String {
        capitalize_first(&self.stem)
    }
}

/// One second-level heading discovered in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLink {
    /// Heading text as written
    pub text: String,

    /// Slug derived from the text
    pub anchor: String,

    /// Link path of the owning file
    pub target: String,
}

impl HeadingLink {
    pub fn new(text: impl Into<String>, anchor: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: anchor.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for HeadingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [{}]({}#{})", self.text, self.target, self.anchor)
    }
}

/// How a section maps onto collected files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// A file directly under the collection root
    Flat(MarkdownFile),
    /// A top-level folder; each file becomes a subsection
    Grouped(Vec<MarkdownFile>),
}

/// A named Table-of-Contents entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub kind: SectionKind,
}

impl Section {
    pub fn flat(name: impl Into<String>, file: MarkdownFile) -> Self {
        Self {
            name: name.into(),
            kind: SectionKind::Flat(file),
        }
    }

    pub fn grouped(name: impl Into<String>, files: Vec<MarkdownFile>) -> Self {
        Self {
            name: name.into(),
            kind: SectionKind::Grouped(files),
        }
    }

    /// Where this section came from, for collision reports
    pub fn origin(&self) -> String {
        match &self.kind {
            SectionKind::Flat(file) => file.relative.clone(),
            SectionKind::Grouped(files) => files
                .first()
                .and_then(|f| f.components().first().map(|c| format!("{}/", c)))
                .unwrap_or_default(),
        }
    }

    /// Number of files rendered under this section
    pub fn file_count(&self) -> usize {
        match &self.kind {
            SectionKind::Flat(_) => 1,
            SectionKind::Grouped(files) => files.len(),
        }
    }
}
