//! Markdown collection scanning
//!
//! Uses walkdir for a plain recursive traversal: no ignore rules, no depth limit.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::model::{MarkdownFile, TocError};
use crate::core::paths::has_extension;

/// Collect every file under `root` whose name ends in `.{extension}`
///
/// Paths come back sorted so that downstream output does not depend on
/// filesystem listing order.
pub fn collect_markdown_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, TocError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            TocError::filesystem(path, e.into())
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if has_extension(path, extension) {
            tracing::debug!(path = %path.display(), "collected");
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Collect and read every markdown file under `root`
pub fn load_markdown_files(root: &Path, extension: &str) -> Result<Vec<MarkdownFile>, TocError> {
    collect_markdown_files(root, extension)?
        .iter()
        .map(|path| MarkdownFile::load(path, root))
        .collect()
}
