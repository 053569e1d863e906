use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    RequestParse(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Invalid API response structure")]
    MalformedResult,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
