use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("프롬프트 저장소를 읽을 수 없습니다: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("프롬프트 저장소가 손상되었습니다: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("존재하지 않는 프롬프트 키입니다: {0}")]
    UnknownKey(String),
}

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("필수 입력 값이 누락되었습니다: {0}")]
    MissingField(&'static str),

    #[error("첨부 파일이 없습니다")]
    NoFilesProvided,

    #[error("시스템 프롬프트를 찾을 수 없습니다")]
    NoSystemPrompt,

    #[error(transparent)]
    Store(#[from] StoreError),
}
