//! 解析結果の表示用整形

use serde_json::Value;

/// 結果パネルに表示する内容
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub title: String,
    pub body: String,
}

impl RenderedResult {
    pub fn new(title: impl Into<String>, data: &Value) -> Self {
        Self {
            title: title.into(),
            body: pretty_json(data),
        }
    }
}

/// インデント2のJSON文字列
pub fn pretty_json(data: &Value) -> String {
    // Valueのシリアライズは失敗しない
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_two_space_indent() {
        let data = json!({"status": "success", "analysis": {"burn": "minor"}});
        let body = pretty_json(&data);
        assert!(body.contains("\n  \"status\": \"success\""));
        assert!(body.contains("\n    \"burn\": \"minor\""));
    }

    #[test]
    fn test_rendered_result_keeps_opaque_shape() {
        let data = json!([1, "two", null]);
        let rendered = RenderedResult::new("Symptom Analysis", &data);
        assert_eq!(rendered.title, "Symptom Analysis");
        let parsed: Value = serde_json::from_str(&rendered.body).unwrap();
        assert_eq!(parsed, data);
    }
}
