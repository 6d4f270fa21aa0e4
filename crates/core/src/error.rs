use thiserror::Error;

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Invalid glob pattern: {0}")]
    Glob(String),
    #[error("Invalid document URI: {0}")]
    InvalidUri(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StencilError>;
