//! Request assembly: validate a submission, resolve its template, and build
//! the two-message completion payload.
//!
//! All validation happens here, before any network call is made. The output
//! is deterministic for a given submission and store contents.

use std::collections::HashMap;

use crate::error::AssembleError;
use crate::extract::{extract_content, UploadedFile};
use crate::prompts::{render, PromptStore};

/// Category key whose template is used when no more specific template
/// resolves.
pub const DEFAULT_CATEGORY: &str = "news";

/// Template key for file-based submissions.
pub const FILES_TEMPLATE: &str = "with_files";

/// Template key for file-based submissions that carry SEO keywords.
pub const SEO_TEMPLATE: &str = "seo_optimized";

/// Content body of a submission: typed directly or carried by files.
#[derive(Debug, Clone)]
pub enum SubmissionBody {
    Inline(String),
    Files(Vec<UploadedFile>),
}

impl Default for SubmissionBody {
    fn default() -> Self {
        Self::Inline(String::new())
    }
}

/// One generation request as received from the form. Request-scoped, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub category: String,
    pub purpose: String,
    pub persona: String,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub product_details: Option<String>,
    pub review_info: Option<String>,
    pub seo_keywords: Option<String>,
    pub body: SubmissionBody,
}

/// Finalized model request: one instruction message, one context message.
#[derive(Debug, Clone)]
pub struct CompletionPayload {
    pub system_text: String,
    pub user_text: String,
}

fn require(value: &str, field: &'static str) -> Result<(), AssembleError> {
    if value.trim().is_empty() {
        Err(AssembleError::MissingField(field))
    } else {
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Validate a submission and compose the completion payload.
///
/// For inline entry the system text comes from the store's template for the
/// submission's category; file entry uses [`FILES_TEMPLATE`], or
/// [`SEO_TEMPLATE`] when SEO keywords are present. Either way an unresolved
/// key falls back to [`DEFAULT_CATEGORY`]. Placeholders are substituted with
/// the submission's fields. The user text is a labeled concatenation of the
/// same fields in fixed order.
pub fn assemble(
    submission: &Submission,
    store: &PromptStore,
) -> Result<CompletionPayload, AssembleError> {
    require(&submission.category, "contentPurpose")?;
    require(&submission.purpose, "purpose")?;
    require(&submission.persona, "persona")?;

    match &submission.body {
        SubmissionBody::Inline(text) => require(text, "content")?,
        SubmissionBody::Files(files) => {
            if files.is_empty() {
                return Err(AssembleError::NoFilesProvided);
            }
        }
    }

    match submission.category.as_str() {
        "product" if non_empty(&submission.product_details).is_none() => {
            return Err(AssembleError::MissingField("productDetails"));
        }
        "review" if non_empty(&submission.review_info).is_none() => {
            return Err(AssembleError::MissingField("reviewInfo"));
        }
        _ => {}
    }

    let content = match &submission.body {
        SubmissionBody::Inline(text) => text.clone(),
        SubmissionBody::Files(files) => extract_content(files),
    };

    let template_key = match &submission.body {
        SubmissionBody::Inline(_) => submission.category.as_str(),
        SubmissionBody::Files(_) => {
            if non_empty(&submission.seo_keywords).is_some() {
                SEO_TEMPLATE
            } else {
                FILES_TEMPLATE
            }
        }
    };
    let template = match store.get(template_key)? {
        Some(t) => t,
        None => store
            .get(DEFAULT_CATEGORY)?
            .ok_or(AssembleError::NoSystemPrompt)?,
    };

    let opt = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("유형", submission.category.clone());
    vars.insert("목적", submission.purpose.clone());
    vars.insert("내용", content.clone());
    vars.insert("페르소나", submission.persona.clone());
    vars.insert("타깃독자층", opt(&submission.audience));
    vars.insert("문체", opt(&submission.tone));
    vars.insert("문장스타일", opt(&submission.style));
    vars.insert("키워드", opt(&submission.seo_keywords));

    let system_text = render(&template.system, &vars);

    let mut user_text = format!(
        "유형: {}\n목적: {}\n내용: {}\n페르소나: {}",
        submission.category, submission.purpose, content, submission.persona
    );
    if let Some(v) = non_empty(&submission.product_details) {
        user_text.push_str(&format!("\n제품/서비스 정보: {v}"));
    }
    if let Some(v) = non_empty(&submission.review_info) {
        user_text.push_str(&format!("\n후기/사용경험: {v}"));
    }
    if let Some(v) = non_empty(&submission.audience) {
        user_text.push_str(&format!("\n타깃 독자층: {v}"));
    }
    if let Some(v) = non_empty(&submission.tone) {
        user_text.push_str(&format!("\n문체: {v}"));
    }
    if let Some(v) = non_empty(&submission.style) {
        user_text.push_str(&format!("\n문장스타일: {v}"));
    }
    if let Some(v) = non_empty(&submission.seo_keywords) {
        user_text.push_str(&format!("\nSEO 키워드: {v}"));
    }

    Ok(CompletionPayload {
        system_text,
        user_text,
    })
}
