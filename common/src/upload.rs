//! アップロード画像の検証
//!
//! ブラウザの`File`とCLIのファイルパスの両方から`FileInfo`を作り、
//! 送信前に同じルールで検証する。

use crate::error::ValidationError;

/// 受け付けるMIMEタイプ
pub const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// 最大ファイルサイズ（16MiB）
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// 表示用サイズ（例: "1.5 KB"）
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// ファイルを検証
///
/// 種別チェックを先に行い、その後サイズをチェックする。
pub fn validate_file(file: &FileInfo) -> Result<(), ValidationError> {
    if !ALLOWED_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedType {
            mime_type: file.mime_type.clone(),
            allowed: ALLOWED_TYPES.join(", "),
        });
    }

    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            size: file.size,
            limit: format_file_size(MAX_FILE_SIZE),
        });
    }

    Ok(())
}

/// 選択済みファイルを取り出して検証
pub fn require_file(file: Option<&FileInfo>) -> Result<&FileInfo, ValidationError> {
    let file = file.ok_or(ValidationError::NoFileSelected)?;
    validate_file(file)?;
    Ok(file)
}

/// バイト数を人が読める形式に変換
///
/// 小数点以下2桁に丸め、末尾の0は落とす。
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // ちょうど中間の値は切り上げる（1.125 -> 1.13）
    let value = (value * 100.0).round() / 100.0;
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}
