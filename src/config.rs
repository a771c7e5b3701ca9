//! Configuration for a regeneration run
//!
//! Loaded from an optional TOML file; every key has a compiled default so a
//! bare invocation behaves like the historical script.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::model::TocError;
use crate::toc::templates::{Boilerplate, CONTRIBUTING, LICENSE};

/// Config file looked up under the root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "readme-toc.toml";

/// Marker that starts the regenerated region
pub const DEFAULT_MARKER: &str = "## Table of Contents";

/// What to do with sections missing from `section_order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSections {
    /// Log a warning and leave them out
    #[default]
    Skip,
    /// Emit them after the ordered sections, sorted by name
    Append,
}

/// How heading links point at their file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkTarget {
    /// Path of the file relative to the README's directory
    #[default]
    Relative,
    /// Bare file name
    FileName,
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Collection root, relative to the run root unless absolute
    pub collection: PathBuf,

    /// README to rewrite, relative to the run root unless absolute
    pub readme: PathBuf,

    /// Literal text locating the splice point
    pub marker: String,

    /// Markdown file extension, without the dot
    pub extension: String,

    /// Recognized section names in display order
    pub section_order: Vec<String>,

    pub unknown_sections: UnknownSections,

    pub link_target: LinkTarget,

    /// Trailer blocks
    pub contributing: String,
    pub license: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            collection: PathBuf::from("collection"),
            readme: PathBuf::from("README.md"),
            marker: DEFAULT_MARKER.to_string(),
            extension: "md".to_string(),
            section_order: ["Javascript", "Typescript", "WebFundamental", "Graphql", "Mongodb"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            unknown_sections: UnknownSections::Skip,
            link_target: LinkTarget::Relative,
            contributing: CONTRIBUTING.to_string(),
            license: LICENSE.to_string(),
        }
    }
}

impl TocConfig {
    /// Parse a TOML document
    pub fn from_toml(text: &str) -> Result<Self, TocError> {
        toml::from_str(text).map_err(|e| TocError::Config(e.to_string()))
    }

    /// Load from an explicit file
    pub fn from_file(path: &Path) -> Result<Self, TocError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TocError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Load `path` if given, else `<root>/readme-toc.toml` if present, else defaults
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self, TocError> {
        if let Some(path) = path {
            return Self::from_file(&crate::core::paths::resolve(root, path));
        }

        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn boilerplate(&self) -> Boilerplate {
        Boilerplate {
            contributing: self.contributing.clone(),
            license: self.license.clone(),
        }
    }
}
