//! Structured post model and response normalization.
//!
//! The model returns one JSON object as text. `normalize` turns that text
//! into a [`StructuredPost`], falling back to a minimal wrapper post when
//! the text is not valid JSON; it never fails.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Markers wrapping heading blocks in model output.
const HEADING_OPEN: &str = "<h3>";
const HEADING_CLOSE: &str = "</h3>";

/// A content block describing an image to be generated out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDirective {
    #[serde(rename = "imageDepiction")]
    pub depiction: String,
    pub alttag: String,
}

/// One block of post content.
///
/// The wire format mixes plain strings and image objects; heading blocks are
/// strings wrapped in an `<h3>` pair. Classification happens once at parse
/// time so every consumer matches exhaustively instead of probing shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading(String),
    Image(ImageDirective),
}

/// Classify a raw content string.
///
/// A string is a heading iff it contains an opening marker with a closing
/// marker somewhere after it; the text strictly between the first such pair
/// is extracted and the markers discarded. An opening marker with no close
/// keeps the whole raw string as a paragraph.
fn classify(text: String) -> Block {
    if let Some(open) = text.find(HEADING_OPEN) {
        let after = open + HEADING_OPEN.len();
        if let Some(close) = text[after..].find(HEADING_CLOSE) {
            return Block::Heading(text[after..after + close].to_string());
        }
    }
    Block::Paragraph(text)
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Paragraph(text) => serializer.serialize_str(text),
            Block::Heading(text) => {
                serializer.serialize_str(&format!("{HEADING_OPEN}{text}{HEADING_CLOSE}"))
            }
            Block::Image(image) => image.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawBlock {
            Image(ImageDirective),
            Text(String),
        }

        Ok(match RawBlock::deserialize(deserializer)? {
            RawBlock::Image(image) => Block::Image(image),
            RawBlock::Text(text) => classify(text),
        })
    }
}

/// Source citation attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub author_or_institution: String,
    #[serde(default)]
    pub url: String,
}

/// Normalized output of a generation request. Held in UI state until reset
/// or replaced; never persisted server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredPost {
    pub title: String,
    #[serde(deserialize_with = "one_or_many")]
    pub content: Vec<Block>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "footnote")]
    pub footnotes: Vec<Footnote>,
    #[serde(default, rename = "contentPurpose")]
    pub category: String,
}

/// Accept either a block list or one bare string (older templates returned
/// the whole body as a single markdown string).
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Block>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ContentField {
        Many(Vec<Block>),
        One(String),
    }

    Ok(match ContentField::deserialize(deserializer)? {
        ContentField::Many(blocks) => blocks,
        ContentField::One(text) => vec![classify(text)],
    })
}

impl StructuredPost {
    /// Fixed placeholder returned when no API credential is configured. Sent
    /// as a successful response, not an error.
    pub fn missing_credential(category: &str) -> Self {
        Self {
            title: "API 키 미설정".to_string(),
            content: vec![Block::Paragraph(
                "OpenAI API 키가 설정되지 않았습니다. 관리자에게 문의하세요.".to_string(),
            )],
            tags: ["API", "오류", "설정", "OpenAI", "키"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            footnotes: Vec::new(),
            category: category.to_string(),
        }
    }
}

/// Normalize raw model output into a [`StructuredPost`].
///
/// Total over arbitrary input: parse failures produce the fallback post
/// carrying the raw text verbatim, never an error. The supplied category is
/// attached as the post's content-purpose tag either way.
pub fn normalize(raw_text: &str, category: &str) -> StructuredPost {
    match serde_json::from_str::<StructuredPost>(raw_text) {
        Ok(mut post) => {
            post.category = category.to_string();
            post
        }
        Err(err) => {
            tracing::debug!("model output is not valid JSON, using fallback post: {err}");
            StructuredPost {
                title: "생성된 블로그 포스트".to_string(),
                content: vec![Block::Paragraph(raw_text.to_string())],
                tags: vec!["블로그".to_string(), "포스트".to_string()],
                footnotes: Vec::new(),
                category: category.to_string(),
            }
        }
    }
}
