pub mod assemble;
pub mod error;
pub mod export;
pub mod extract;
pub mod llm;
pub mod post;
pub mod prompts;

pub use assemble::{
    assemble, CompletionPayload, Submission, SubmissionBody, DEFAULT_CATEGORY, FILES_TEMPLATE,
    SEO_TEMPLATE,
};
pub use error::{AssembleError, StoreError};
pub use export::{markdown_filename, to_document_tree, to_plain_text, DocumentNode, Run};
pub use extract::{extract_content, UploadedFile};
pub use llm::{create_provider_from_env, FakeProvider, LlmError, LlmProvider, OpenAiProvider};
pub use post::{normalize, Block, Footnote, ImageDirective, StructuredPost};
pub use prompts::{render, PromptStore, PromptTemplate};
