//! Uploaded-file content extraction.
//!
//! Extraction is synchronous and per-file in submission order. Only
//! plain-text formats are decoded; everything else contributes a note so the
//! model still sees that the file was attached.

/// An uploaded file as received from the form. Held only for the lifetime of
/// one submission.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub data: Vec<u8>,
}

fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Concatenate the decoded text of each file, in order.
pub fn extract_content(files: &[UploadedFile]) -> String {
    let mut out = String::new();
    for file in files {
        match extension(&file.name).as_str() {
            "txt" | "md" | "markdown" | "csv" => match std::str::from_utf8(&file.data) {
                Ok(text) => {
                    out.push_str(&format!("\n파일 '{}' 내용:\n{}\n", file.name, text));
                }
                Err(_) => {
                    out.push_str(&format!("\n파일 '{}'을 처리하지 못했습니다.\n", file.name));
                }
            },
            "doc" | "docx" | "hwp" => {
                out.push_str(&format!(
                    "\n파일 '{}'은 워드 문서 형식입니다. 본문 텍스트는 추출되지 않았습니다.\n",
                    file.name
                ));
            }
            _ => {
                out.push_str(&format!(
                    "\n파일 '{}'은 지원하지 않는 형식입니다.\n",
                    file.name
                ));
            }
        }
    }
    out
}
