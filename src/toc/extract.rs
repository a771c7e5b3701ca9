//! Second-level heading extraction
//!
//! Only `## ` lines are considered; `#` and `###` and deeper are ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{HeadingLink, MarkdownFile};
use crate::toc::anchor::anchor;

/// Static regex for a second-level heading line
/// Format: ## Heading text
pub static H2_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+(\S.*)$").expect("Invalid H2_RE regex"));

/// Heading texts in document order
pub fn extract_headings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| H2_RE.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim_end().to_string()))
        .collect()
}

/// Heading links for one file, pointing at `target`
pub fn extract_links(file: &MarkdownFile, target: &str) -> Vec<HeadingLink> {
    let links: Vec<HeadingLink> = extract_headings(&file.content)
        .into_iter()
        .map(|text| {
            let slug = anchor(&text);
            HeadingLink::new(text, slug, target)
        })
        .collect();

    tracing::debug!(file = %file.relative, headings = links.len(), "extracted");
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_document_order() {
        let content = "# Title\n\n## Zeta\ntext\n## Alpha\n### Nested\n## Middle\n";
        assert_eq!(extract_headings(content), vec!["Zeta", "Alpha", "Middle"]);
    }

    #[test]
    fn test_requires_whitespace_after_markers() {
        let content = "##NoSpace\n##\tTabbed\n ## Indented\n####  Deep\n";
        assert_eq!(extract_headings(content), vec!["Tabbed"]);
    }

    #[test]
    fn test_skips_blank_headings_and_trims_crlf() {
        let content = "##   \r\n## Windows line \r\n";
        assert_eq!(extract_headings(content), vec!["Windows line"]);
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_headings("just text\n# H1 only\n").is_empty());
    }

    #[test]
    fn test_extract_links() {
        let root = Path::new("/repo/collection");
        let file = MarkdownFile::from_content(
            &root.join("javascript/closures.md"),
            root,
            "## What is a closure?\n## Q&A Basics\n",
        );

        let links = extract_links(&file, "collection/javascript/closures.md");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].anchor, "what-is-a-closure");
        assert_eq!(
            links[1].to_string(),
            "- [Q&A Basics](collection/javascript/closures.md#q--a-basics)"
        );
    }
}
