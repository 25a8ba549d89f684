use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatscoutError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Chat source error: {0}")]
    ChatSource(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChatscoutError>;
