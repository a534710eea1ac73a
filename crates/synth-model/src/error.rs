use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("resource json conversion failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
    #[error("resource id must not be empty")]
    EmptyId,
}

pub type Result<T> = std::result::Result<T, ModelError>;
