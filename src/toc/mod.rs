//! TOC module - Heading extraction and README regeneration
//!
//! This module provides:
//! - Anchor slugs for headings (anchor)
//! - Second-level heading extraction (extract)
//! - Section grouping, ordering and rendering (assemble)
//! - README splicing (readme)
//! - Trailer boilerplate (templates)

pub mod anchor;
pub mod assemble;
pub mod extract;
pub mod readme;
pub mod templates;

use std::path::Path;

use crate::backends::scan::load_markdown_files;
use crate::config::TocConfig;
use crate::core::model::TocError;
use crate::core::paths::resolve;
use assemble::{group_sections, order_sections, Assembler};
use readme::ReadmeDocument;

/// Result of one in-memory regeneration
#[derive(Debug)]
pub struct Regeneration {
    pub readme: ReadmeDocument,
    pub updated: String,
    /// Sections emitted
    pub sections: usize,
    /// Files rendered across emitted sections
    pub files: usize,
}

impl Regeneration {
    pub fn is_stale(&self) -> bool {
        self.readme.is_stale(&self.updated)
    }

    /// Write the regenerated README
    pub fn write(&self) -> Result<(), TocError> {
        self.readme.write(&self.updated)
    }
}

/// Collect, extract and assemble without touching the README on disk
pub fn regenerate(root: &Path, config: &TocConfig) -> Result<Regeneration, TocError> {
    let readme_path = resolve(root, &config.readme);
    let collection = resolve(root, &config.collection);

    let readme = ReadmeDocument::read(&readme_path, &config.marker)?;
    let files = load_markdown_files(&collection, &config.extension)?;
    tracing::debug!(count = files.len(), collection = %collection.display(), "loaded markdown files");

    let grouped = group_sections(files)?;
    let ordered = order_sections(grouped, &config.section_order, config.unknown_sections);

    let readme_dir = readme_path.parent().unwrap_or(root);
    let assembler = Assembler::from_config(config, readme_dir);
    let updated = readme.splice(&assembler.render(&ordered));

    Ok(Regeneration {
        sections: ordered.len(),
        files: ordered.iter().map(|s| s.file_count()).sum(),
        readme,
        updated,
    })
}
