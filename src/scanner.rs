//! ローカル画像ファイルの情報取得

use crate::error::{QuickAidError, Result};
use image::ImageFormat;
use quickaid_common::FileInfo;
use std::path::Path;

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定
///
/// 画像形式として認識できない拡張子は`application/octet-stream`。
pub fn mime_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// ファイル名・MIMEタイプ・サイズを取得（中身は読まない）
pub fn inspect(path: &Path) -> Result<FileInfo> {
    if !path.is_file() {
        return Err(QuickAidError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(FileInfo::new(name, mime_type_for(path), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_mime_type_for_supported_extensions() {
        assert_eq!(mime_type_for(Path::new("cut.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("cut.JPEG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("burn.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("rash.gif")), "image/gif");
        assert_eq!(mime_type_for(Path::new("bite.webp")), "image/webp");
    }

    #[test]
    fn test_mime_type_for_unknown_extension() {
        assert_eq!(mime_type_for(Path::new("notes.txt")), UNKNOWN_MIME_TYPE);
        assert_eq!(mime_type_for(Path::new("no_extension")), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn test_inspect_missing_file() {
        let err = inspect(Path::new("/nonexistent/path/wound.png")).unwrap_err();
        assert!(matches!(err, QuickAidError::FileNotFound(_)));
    }
}
