//! Section grouping, ordering and rendering
//!
//! Files directly under the collection root become flat sections; files in a
//! subfolder are grouped under that folder's top-level name no matter how deep
//! they sit.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{LinkTarget, TocConfig, UnknownSections};
use crate::core::model::{MarkdownFile, Section, SectionKind, TocError};
use crate::core::paths::{capitalize_first, relative_from};
use crate::toc::anchor::anchor;
use crate::toc::extract::extract_links;
use crate::toc::templates::Boilerplate;

/// Group collected files into sections keyed by display name
pub fn group_sections(files: Vec<MarkdownFile>) -> Result<BTreeMap<String, Section>, TocError> {
    let mut sections: BTreeMap<String, Section> = BTreeMap::new();

    for file in files {
        let folder = match file.components().as_slice() {
            [] => continue,
            [_] => None,
            [first, ..] => Some(first.to_string()),
        };

        match folder {
            None => {
                let name = file.display_name();
                if let Some(existing) = sections.get(&name) {
                    return Err(collision(&name, existing.origin(), file.relative.clone()));
                }
                sections.insert(name.clone(), Section::flat(name, file));
            }
            Some(folder) => {
                let name = capitalize_first(&folder);
                let origin = format!("{}/", folder);
                let section = sections
                    .entry(name.clone())
                    .or_insert_with(|| Section::grouped(name.clone(), Vec::new()));

                let compatible = match &section.kind {
                    SectionKind::Grouped(members) => {
                        members.is_empty() || section.origin() == origin
                    }
                    SectionKind::Flat(_) => false,
                };
                if !compatible {
                    return Err(collision(&name, section.origin(), origin));
                }
                if let SectionKind::Grouped(members) = &mut section.kind {
                    members.push(file);
                }
            }
        }
    }

    Ok(sections)
}

fn collision(name: &str, first: String, second: String) -> TocError {
    TocError::SectionCollision {
        name: name.to_string(),
        first,
        second,
    }
}

/// Put sections in display order, applying the unknown-section policy
pub fn order_sections(
    mut sections: BTreeMap<String, Section>,
    order: &[String],
    unknown: UnknownSections,
) -> Vec<Section> {
    let mut ordered = Vec::with_capacity(sections.len());

    for name in order {
        if let Some(section) = sections.remove(name) {
            ordered.push(section);
        }
    }

    match unknown {
        UnknownSections::Skip => {
            for (name, section) in &sections {
                tracing::warn!(
                    section = %name,
                    origin = %section.origin(),
                    "section not in section_order, skipping"
                );
            }
        }
        UnknownSections::Append => ordered.extend(sections.into_values()),
    }

    ordered
}

/// Renders the regenerated README tail
#[derive(Debug, Clone)]
pub struct Assembler {
    marker: String,
    link_target: LinkTarget,
    readme_dir: PathBuf,
    boilerplate: Boilerplate,
}

impl Assembler {
    pub fn new(
        marker: impl Into<String>,
        link_target: LinkTarget,
        readme_dir: impl Into<PathBuf>,
        boilerplate: Boilerplate,
    ) -> Self {
        Self {
            marker: marker.into(),
            link_target,
            readme_dir: readme_dir.into(),
            boilerplate,
        }
    }

    /// Assembler for a README living in `readme_dir`
    pub fn from_config(config: &TocConfig, readme_dir: &Path) -> Self {
        Self::new(
            config.marker.clone(),
            config.link_target,
            readme_dir,
            config.boilerplate(),
        )
    }

    /// Link path for a collected file
    fn link_target(&self, file: &MarkdownFile) -> String {
        match self.link_target {
            LinkTarget::Relative => relative_from(&file.path, &self.readme_dir),
            LinkTarget::FileName => file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.relative.clone()),
        }
    }

    fn file_links(&self, file: &MarkdownFile) -> String {
        let target = self.link_target(file);
        extract_links(file, &target)
            .iter()
            .map(|link| link.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Marker heading plus one entry per section
    pub fn render_toc(&self, sections: &[Section]) -> String {
        let mut out = format!("{}\n\n", self.marker);
        for section in sections {
            out.push_str(&format!("- [{}](#{})\n", section.name, anchor(&section.name)));
        }
        out
    }

    /// One `##` block per section, `###` per file for grouped sections
    pub fn render_body(&self, sections: &[Section]) -> String {
        let mut out = String::new();
        for section in sections {
            match &section.kind {
                SectionKind::Flat(file) => {
                    out.push_str(&format!(
                        "\n## {}\n\n{}\n",
                        section.name,
                        self.file_links(file)
                    ));
                }
                SectionKind::Grouped(files) => {
                    out.push_str(&format!("\n## {}\n", section.name));
                    for file in files {
                        out.push_str(&format!(
                            "\n### {}\n\n{}\n",
                            file.display_name(),
                            self.file_links(file)
                        ));
                    }
                }
            }
        }
        out
    }

    /// Everything that replaces the README from the marker onward
    pub fn render(&self, sections: &[Section]) -> String {
        format!(
            "{}{}{}",
            self.render_toc(sections),
            self.render_body(sections),
            self.boilerplate.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/repo/collection";

    fn file(relative: &str, content: &str) -> MarkdownFile {
        let root = Path::new(ROOT);
        MarkdownFile::from_content(&root.join(relative), root, content)
    }

    fn names(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.name.as_str()).collect()
    }

    fn assembler(link_target: LinkTarget) -> Assembler {
        Assembler::new(
            "## Table of Contents",
            link_target,
            "/repo",
            Boilerplate {
                contributing: "\n## Contributing\n".to_string(),
                license: "\n## License\n".to_string(),
            },
        )
    }

    #[test]
    fn test_grouping_rules() {
        let sections = group_sections(vec![
            file("a.md", ""),
            file("topic/b.md", ""),
            file("topic/c.md", ""),
            file("topic/deep/d.md", ""),
        ])
        .unwrap();

        assert!(matches!(sections["A"].kind, SectionKind::Flat(_)));
        match &sections["Topic"].kind {
            SectionKind::Grouped(files) => {
                let stems: Vec<_> = files.iter().map(|f| f.stem.as_str()).collect();
                assert_eq!(stems, vec!["b", "c", "d"]);
            }
            other => panic!("expected grouped section, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_collision_is_error() {
        let err = group_sections(vec![file("topic.md", ""), file("Topic.md", "")]).unwrap_err();
        assert!(matches!(err, TocError::SectionCollision { ref name, .. } if name == "Topic"));
    }

    #[test]
    fn test_flat_and_folder_collision_is_error() {
        let err =
            group_sections(vec![file("topic.md", ""), file("topic/b.md", "")]).unwrap_err();
        match err {
            TocError::SectionCollision { first, second, .. } => {
                assert_eq!(first, "topic.md");
                assert_eq!(second, "topic/");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_folder_case_collision_is_error() {
        let err =
            group_sections(vec![file("Topic/a.md", ""), file("topic/b.md", "")]).unwrap_err();
        assert!(matches!(err, TocError::SectionCollision { .. }));
    }

    #[test]
    fn test_order_follows_priority_list() {
        let sections =
            group_sections(vec![file("zeta.md", ""), file("alpha/b.md", "")]).unwrap();
        let order = vec!["Zeta".to_string(), "Alpha".to_string()];

        let ordered = order_sections(sections, &order, UnknownSections::Skip);
        assert_eq!(names(&ordered), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_unknown_sections_skip() {
        let sections = group_sections(vec![file("a.md", ""), file("extra.md", "")]).unwrap();
        let ordered = order_sections(sections, &["A".to_string()], UnknownSections::Skip);
        assert_eq!(names(&ordered), vec!["A"]);
    }

    #[test]
    fn test_unknown_sections_append_sorted() {
        let sections = group_sections(vec![
            file("a.md", ""),
            file("zed.md", ""),
            file("extra.md", ""),
        ])
        .unwrap();
        let ordered = order_sections(sections, &["A".to_string()], UnknownSections::Append);
        assert_eq!(names(&ordered), vec!["A", "Extra", "Zed"]);
    }

    #[test]
    fn test_render_flat_and_grouped() {
        let sections = vec![
            Section::flat("A", file("a.md", "## Hello World\n")),
            Section::grouped(
                "Topic",
                vec![
                    file("topic/b.md", "## Q&A Basics\n## Second\n"),
                    file("topic/c.md", "no headings\n"),
                ],
            ),
        ];

        let rendered = assembler(LinkTarget::Relative).render(&sections);
        let expected = "## Table of Contents\n\n\
- [A](#a)\n\
- [Topic](#topic)\n\
\n## A\n\n\
- [Hello World](collection/a.md#hello-world)\n\
\n## Topic\n\
\n### B\n\n\
- [Q&A Basics](collection/topic/b.md#q--a-basics)\n\
- [Second](collection/topic/b.md#second)\n\
\n### C\n\n\n\
\n## Contributing\n\
\n## License\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_file_name_targets() {
        let sections = vec![Section::flat("A", file("nested/a.md", "## One\n"))];
        let body = assembler(LinkTarget::FileName).render_body(&sections);
        assert!(body.contains("- [One](a.md#one)"));
    }

    #[test]
    fn test_render_relative_targets_outside_readme_dir() {
        let assembler = Assembler::new(
            "## Table of Contents",
            LinkTarget::Relative,
            "/repo/docs",
            Boilerplate::default(),
        );
        let sections = vec![Section::flat("A", file("a.md", "## One\n"))];
        let body = assembler.render_body(&sections);
        assert!(body.contains("- [One](../collection/a.md#one)"));
    }

    #[test]
    fn test_toc_anchor_uses_slug() {
        let sections = vec![Section::flat("Web Fundamental", file("x.md", ""))];
        let toc = assembler(LinkTarget::Relative).render_toc(&sections);
        assert_eq!(
            toc,
            "## Table of Contents\n\n- [Web Fundamental](#web-fundamental)\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let rendered = assembler(LinkTarget::Relative).render(&[]);
        assert_eq!(
            rendered,
            "## Table of Contents\n\n\n## Contributing\n\n## License\n"
        );
    }
}
