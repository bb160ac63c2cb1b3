//! Presentation adapter: render a [`StructuredPost`] as plain/Markdown text
//! for copy and `.md` download, and as a document node tree for the
//! word-processor renderer.
//!
//! The document renderer itself is an opaque collaborator: it receives the
//! node list and produces the final byte stream.

use serde::Serialize;

use crate::post::{Block, StructuredPost};

/// Label on image-generation callouts in the document tree.
const IMAGE_CALLOUT_LABEL: &str = "이미지 생성 프롬프트";

/// A run of styled text inside a paragraph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }
}

/// One node of the export document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentNode {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    /// Bordered single-cell callout for an image-generation prompt: a bold
    /// label line and an italic description line. The alt text travels as
    /// metadata and is not rendered as visible body text.
    Callout {
        label: String,
        description: String,
        alt: String,
    },
}

/// Render the post as plain/Markdown text.
///
/// Title line, then each block separated by blank lines (headings as their
/// bare text, image directives omitted), then the labeled footnote list,
/// then a single tag line.
pub fn to_plain_text(post: &StructuredPost) -> String {
    let mut sections: Vec<String> = vec![format!("# {}", post.title)];

    for block in &post.content {
        match block {
            Block::Paragraph(text) => sections.push(text.clone()),
            Block::Heading(text) => sections.push(text.clone()),
            // Not representable in plain text.
            Block::Image(_) => {}
        }
    }

    if !post.footnotes.is_empty() {
        let mut lines = vec!["출처:".to_string()];
        for (i, footnote) in post.footnotes.iter().enumerate() {
            lines.push(format!(
                "[{}] {} - {} ({})",
                i + 1,
                footnote.source_name,
                footnote.author_or_institution,
                footnote.url
            ));
        }
        sections.push(lines.join("\n"));
    }

    if !post.tags.is_empty() {
        sections.push(format!("태그: {}", post.tags.join(", ")));
    }

    sections.join("\n\n")
}

/// Render the post as a document node tree for the word-processor renderer.
pub fn to_document_tree(post: &StructuredPost) -> Vec<DocumentNode> {
    let mut nodes = vec![DocumentNode::Heading {
        level: 1,
        text: post.title.clone(),
    }];

    for block in &post.content {
        match block {
            Block::Paragraph(text) => nodes.push(DocumentNode::Paragraph {
                runs: vec![Run::plain(text.clone())],
            }),
            Block::Heading(text) => nodes.push(DocumentNode::Heading {
                level: 2,
                text: text.clone(),
            }),
            Block::Image(image) => nodes.push(DocumentNode::Callout {
                label: IMAGE_CALLOUT_LABEL.to_string(),
                description: image.depiction.clone(),
                alt: image.alttag.clone(),
            }),
        }
    }

    if !post.footnotes.is_empty() {
        nodes.push(DocumentNode::Heading {
            level: 2,
            text: "출처".to_string(),
        });
        for (i, footnote) in post.footnotes.iter().enumerate() {
            nodes.push(DocumentNode::Paragraph {
                runs: vec![
                    Run::bold(format!("[{}] ", i + 1)),
                    Run::plain(format!(
                        "{} - {} ({})",
                        footnote.source_name, footnote.author_or_institution, footnote.url
                    )),
                ],
            });
        }
    }

    if !post.tags.is_empty() {
        nodes.push(DocumentNode::Paragraph {
            runs: vec![Run::bold("태그: "), Run::plain(post.tags.join(", "))],
        });
    }

    nodes
}

/// Build a download filename from the post title: whitespace collapses to
/// underscores and filesystem-hostile characters are dropped.
pub fn markdown_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let name = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() {
        "post.md".to_string()
    } else {
        format!("{name}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{Footnote, ImageDirective};

    fn sample_post() -> StructuredPost {
        StructuredPost {
            title: "바다 이야기".to_string(),
            content: vec![
                Block::Paragraph("첫 문단".to_string()),
                Block::Heading("소제목".to_string()),
                Block::Image(ImageDirective {
                    depiction: "노을 지는 바다".to_string(),
                    alttag: "바다 사진".to_string(),
                }),
                Block::Paragraph("둘째 문단".to_string()),
            ],
            tags: vec!["여행".to_string(), "바다".to_string()],
            footnotes: vec![Footnote {
                source_name: "해양연구소".to_string(),
                author_or_institution: "KIOST".to_string(),
                url: "https://example.com".to_string(),
            }],
            category: "news".to_string(),
        }
    }

    #[test]
    fn test_plain_text_layout() {
        let text = to_plain_text(&sample_post());
        assert_eq!(
            text,
            "# 바다 이야기\n\n첫 문단\n\n소제목\n\n둘째 문단\n\n출처:\n[1] 해양연구소 - KIOST (https://example.com)\n\n태그: 여행, 바다"
        );
    }

    #[test]
    fn test_plain_text_omits_images() {
        let text = to_plain_text(&sample_post());
        assert!(!text.contains("노을"));
        assert!(!text.contains("바다 사진"));
    }

    #[test]
    fn test_plain_text_without_footnotes_or_tags() {
        let mut post = sample_post();
        post.footnotes.clear();
        post.tags.clear();
        let text = to_plain_text(&post);
        assert!(!text.contains("출처"));
        assert!(!text.contains("태그"));
    }

    #[test]
    fn test_document_tree_layout() {
        let nodes = to_document_tree(&sample_post());
        assert_eq!(
            nodes[0],
            DocumentNode::Heading {
                level: 1,
                text: "바다 이야기".to_string()
            }
        );
        assert_eq!(
            nodes[2],
            DocumentNode::Heading {
                level: 2,
                text: "소제목".to_string()
            }
        );
        assert_eq!(
            nodes[3],
            DocumentNode::Callout {
                label: "이미지 생성 프롬프트".to_string(),
                description: "노을 지는 바다".to_string(),
                alt: "바다 사진".to_string(),
            }
        );
        // Footnote section: heading, then one paragraph with a bold index.
        assert_eq!(
            nodes[5],
            DocumentNode::Heading {
                level: 2,
                text: "출처".to_string()
            }
        );
        match &nodes[6] {
            DocumentNode::Paragraph { runs } => {
                assert!(runs[0].bold);
                assert_eq!(runs[0].text, "[1] ");
                assert_eq!(runs[1].text, "해양연구소 - KIOST (https://example.com)");
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
        // Tag line last.
        match nodes.last().unwrap() {
            DocumentNode::Paragraph { runs } => {
                assert!(runs[0].bold);
                assert_eq!(runs[0].text, "태그: ");
                assert_eq!(runs[1].text, "여행, 바다");
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_markdown_filename_sanitizes_title() {
        assert_eq!(markdown_filename("바다 이야기"), "바다_이야기.md");
        assert_eq!(markdown_filename("a/b\\c: d"), "abc_d.md");
        assert_eq!(markdown_filename("!!!"), "post.md");
    }
}
