//! End-to-end tests for the generation pipeline: submission -> assembled
//! payload -> provider -> normalized post -> export renderings.

use std::io::Write;

use draftmill_core::llm::LlmProvider;
use draftmill_core::{
    assemble, normalize, to_plain_text, Block, FakeProvider, PromptStore, StructuredPost,
    Submission, SubmissionBody,
};

fn seeded_store() -> (tempfile::TempDir, PromptStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompts.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        r#"{
            "news": {"system": "news template for {{유형}}"},
            "insight": {"system": "insight template"}
        }"#
        .as_bytes(),
    )
    .unwrap();
    (dir, PromptStore::new(path))
}

fn news_submission() -> Submission {
    Submission {
        category: "news".to_string(),
        purpose: "announce".to_string(),
        persona: "reporter".to_string(),
        body: SubmissionBody::Inline("X".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generation_happy_path() {
    let (_dir, store) = seeded_store();
    let provider = FakeProvider::with_response(
        "announce",
        r#"{"title": "발표 소식", "content": ["본문", "<h3>배경</h3>"], "tags": ["뉴스"], "footnote": []}"#,
    );

    let payload = assemble(&news_submission(), &store).unwrap();
    assert_eq!(
        payload.user_text,
        "유형: news\n목적: announce\n내용: X\n페르소나: reporter"
    );

    let raw = provider.complete(&payload).await.unwrap();
    assert_eq!(provider.calls(), 1);

    let post = normalize(&raw, "news");
    assert_eq!(post.title, "발표 소식");
    assert_eq!(post.category, "news");
    assert_eq!(
        post.content,
        vec![
            Block::Paragraph("본문".to_string()),
            Block::Heading("배경".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_validation_failure_never_reaches_provider() {
    let (_dir, store) = seeded_store();
    let provider = FakeProvider::default();

    let mut submission = news_submission();
    submission.purpose.clear();
    assert!(assemble(&submission, &store).is_err());

    // The provider is only invoked with a successfully assembled payload, so
    // a validation failure means zero calls.
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_malformed_model_output_recovers() {
    let (_dir, store) = seeded_store();
    let provider = FakeProvider::new().with_default_response("not json");

    let payload = assemble(&news_submission(), &store).unwrap();
    let raw = provider.complete(&payload).await.unwrap();
    let post = normalize(&raw, "news");

    assert_eq!(post.title, "생성된 블로그 포스트");
    assert_eq!(post.content, vec![Block::Paragraph("not json".to_string())]);
    assert_eq!(post.tags, vec!["블로그", "포스트"]);
}

#[test]
fn test_plain_text_round_trip() {
    // For a post without heading/image blocks, serializing and then
    // normalizing must reproduce the title, tag line, and footnote lines.
    let post = StructuredPost {
        title: "제목".to_string(),
        content: vec![
            Block::Paragraph("문단 하나".to_string()),
            Block::Paragraph("문단 둘".to_string()),
        ],
        tags: vec!["하나".to_string(), "둘".to_string()],
        footnotes: vec![draftmill_core::Footnote {
            source_name: "기관".to_string(),
            author_or_institution: "저자".to_string(),
            url: "https://example.com".to_string(),
        }],
        category: "news".to_string(),
    };

    let json = serde_json::to_string(&post).unwrap();
    let round_tripped = normalize(&json, "news");
    assert_eq!(round_tripped, post);

    let text = to_plain_text(&round_tripped);
    assert!(text.contains("# 제목"));
    assert!(text.contains("태그: 하나, 둘"));
    assert!(text.contains("[1] 기관 - 저자 (https://example.com)"));
}

#[test]
fn test_missing_credential_placeholder_is_fixed() {
    let post = StructuredPost::missing_credential("news");
    assert_eq!(post.title, "API 키 미설정");
    assert_eq!(post.tags, vec!["API", "오류", "설정", "OpenAI", "키"]);
    assert!(post.footnotes.is_empty());
}
