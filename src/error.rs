use quickaid_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickAidError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] quickaid_common::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Cancelled")]
    Cancelled,
}

impl QuickAidError {
    /// 送信前に弾かれたエラーか
    pub fn is_validation(&self) -> bool {
        match self {
            QuickAidError::Validation(_) | QuickAidError::FileNotFound(_) => true,
            QuickAidError::Api(e) => e.is_validation(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuickAidError>;
