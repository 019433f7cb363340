//! エラー型定義

use crate::notification::Severity;
use thiserror::Error;

/// 送信前の入力検証エラー
///
/// Displayはそのまま通知メッセージとして表示される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an image first")]
    NoFileSelected,

    #[error("File type not supported. Please use: {allowed}")]
    UnsupportedType { mime_type: String, allowed: String },

    #[error("File too large. Maximum size: {limit}")]
    FileTooLarge { size: u64, limit: String },

    #[error("Please describe the symptoms or situation")]
    EmptySymptoms,

    #[error("Please provide more detailed description (at least {min} characters)")]
    SymptomsTooShort { length: usize, min: usize },
}

impl ValidationError {
    /// 通知の重要度。未入力系は警告、ファイル不正はエラー
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::UnsupportedType { .. } | ValidationError::FileTooLarge { .. } => {
                Severity::Error
            }
            _ => Severity::Warning,
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 検証エラーか（ネットワークに到達する前に弾かれたか）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
