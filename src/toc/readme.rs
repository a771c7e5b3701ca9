//! The README being rewritten
//!
//! Read once up front, spliced in memory, written back in a single call.

use std::path::{Path, PathBuf};

use crate::core::model::TocError;

/// README content plus the location of the splice marker
#[derive(Debug, Clone)]
pub struct ReadmeDocument {
    pub path: PathBuf,
    pub content: String,
    /// Byte offset of the first marker occurrence
    pub marker_offset: usize,
}

impl ReadmeDocument {
    /// Read `path` and locate `marker`
    pub fn read(path: &Path, marker: &str) -> Result<Self, TocError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TocError::filesystem(path, e))?;
        Self::parse(path, content, marker)
    }

    /// Locate `marker` in already-read content
    pub fn parse(path: &Path, content: String, marker: &str) -> Result<Self, TocError> {
        let marker_offset = content
            .find(marker)
            .ok_or_else(|| TocError::MissingMarker {
                marker: marker.to_string(),
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
            marker_offset,
        })
    }

    /// Everything before the marker, kept verbatim
    pub fn prefix(&self) -> &str {
        &self.content[..self.marker_offset]
    }

    /// New document text: prefix followed by `tail`
    pub fn splice(&self, tail: &str) -> String {
        let mut out = String::with_capacity(self.marker_offset + tail.len());
        out.push_str(self.prefix());
        out.push_str(tail);
        out
    }

    /// Whether `updated` differs from what is on disk
    pub fn is_stale(&self, updated: &str) -> bool {
        self.content != updated
    }

    /// Overwrite the README with `updated`
    pub fn write(&self, updated: &str) -> Result<(), TocError> {
        std::fs::write(&self.path, updated).map_err(|e| TocError::filesystem(&self.path, e))?;
        tracing::info!(path = %self.path.display(), bytes = updated.len(), "README written");
        Ok(())
    }
}
