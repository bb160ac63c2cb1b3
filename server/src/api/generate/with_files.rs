use std::collections::HashMap;

use crate::api::ErrorResponse;
use crate::SharedState;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use draftmill_core::{Submission, SubmissionBody, UploadedFile};
use utoipa::ToSchema;

/// Maximum total multipart payload size.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Documentation-only schema for the multipart form.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct GenerateWithFilesRequest {
    #[schema(value_type = String, format = Binary)]
    pub files: Vec<u8>,
}

fn multipart_error(e: MultipartError) -> Response {
    tracing::warn!("Multipart read error: {}", e);
    let message = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        "요청이 너무 큽니다. 최대 크기는 10MB입니다.".to_string()
    } else {
        format!("Failed to read multipart data: {}", e.body_text())
    };
    (e.status(), Json(ErrorResponse::new(message))).into_response()
}

fn required(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

fn optional(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields.get(key).cloned().filter(|s| !s.trim().is_empty())
}

#[utoipa::path(
    post,
    path = "/api/generate-with-files",
    tag = "generate",
    request_body(content_type = "multipart/form-data", content = GenerateWithFilesRequest),
    responses(
        (status = 200, description = "Structured blog post"),
        (status = 400, description = "Missing required field or no files", body = ErrorResponse),
        (status = 413, description = "Payload exceeds 10MB", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_with_files(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Response {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut files: Vec<UploadedFile> = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                if name == "files" {
                    let file_name = field.file_name().unwrap_or("file").to_string();
                    match field.bytes().await {
                        Ok(bytes) => files.push(UploadedFile {
                            name: file_name,
                            data: bytes.to_vec(),
                        }),
                        Err(e) => return multipart_error(e),
                    }
                } else {
                    match field.text().await {
                        Ok(text) => {
                            fields.insert(name, text);
                        }
                        Err(e) => return multipart_error(e),
                    }
                }
            }
            Ok(None) => break,
            Err(e) => return multipart_error(e),
        }
    }

    let submission = Submission {
        category: required(&fields, "contentPurpose"),
        purpose: required(&fields, "purpose"),
        persona: required(&fields, "persona"),
        audience: optional(&fields, "targetAudience"),
        tone: optional(&fields, "writingTone"),
        style: optional(&fields, "writingStyle"),
        product_details: optional(&fields, "productDetails"),
        review_info: optional(&fields, "reviewInfo"),
        seo_keywords: optional(&fields, "seoKeywords"),
        body: SubmissionBody::Files(files),
    };

    super::run_generation(&state, submission).await
}
