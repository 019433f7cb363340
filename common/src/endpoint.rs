//! バックエンドAPIの契約

use serde::{Deserialize, Serialize};

/// multipartで画像を送るフィールド名
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    EmergencyContacts,
    FirstAidGuide,
    AnalyzeImage,
    AnalyzeSymptoms,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::EmergencyContacts => "/emergency_contacts",
            Endpoint::FirstAidGuide => "/first_aid_guide",
            Endpoint::AnalyzeImage => "/analyze_image",
            Endpoint::AnalyzeSymptoms => "/analyze_symptoms",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::AnalyzeImage | Endpoint::AnalyzeSymptoms => "POST",
            _ => "GET",
        }
    }

    /// 結果パネルのタイトル
    pub fn title(&self) -> &'static str {
        match self {
            Endpoint::Health => "Health Check",
            Endpoint::EmergencyContacts => "Emergency Contacts",
            Endpoint::FirstAidGuide => "First Aid Guide",
            Endpoint::AnalyzeImage => "Image Analysis",
            Endpoint::AnalyzeSymptoms => "Symptom Analysis",
        }
    }

    /// 読み込み中の表示文
    pub fn loading_message(&self) -> &'static str {
        match self {
            Endpoint::Health => "Checking connection...",
            Endpoint::EmergencyContacts => "Loading emergency contacts...",
            Endpoint::FirstAidGuide => "Loading first aid guide...",
            Endpoint::AnalyzeImage => "Analyzing image...",
            Endpoint::AnalyzeSymptoms => "Analyzing symptoms...",
        }
    }

    /// 失敗時の通知文
    ///
    /// 解析系はエラー内容を付けるが、参照系は固定文。
    pub fn failure_message(&self, detail: &str) -> String {
        match self {
            Endpoint::Health => "Health check failed".to_string(),
            Endpoint::EmergencyContacts => "Error loading emergency contacts".to_string(),
            Endpoint::FirstAidGuide => "Error loading first aid guide".to_string(),
            Endpoint::AnalyzeImage => format!("Error analyzing image: {}", detail),
            Endpoint::AnalyzeSymptoms => format!("Error analyzing symptoms: {}", detail),
        }
    }

    /// ベースURLと結合（末尾の`/`は1つに揃える）
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// `/analyze_symptoms`のリクエストボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomsRequest {
    pub symptoms: String,
}

/// `/health`のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn notice(&self) -> String {
        format!("Health check: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths_and_methods() {
        assert_eq!(Endpoint::AnalyzeImage.path(), "/analyze_image");
        assert_eq!(Endpoint::AnalyzeImage.method(), "POST");
        assert_eq!(Endpoint::AnalyzeSymptoms.method(), "POST");
        assert_eq!(Endpoint::FirstAidGuide.method(), "GET");
        assert_eq!(Endpoint::Health.path(), "/health");
    }

    #[test]
    fn test_url_join() {
        assert_eq!(
            Endpoint::EmergencyContacts.url("http://localhost:5000/"),
            "http://localhost:5000/emergency_contacts"
        );
        assert_eq!(Endpoint::Health.url(""), "/health");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            Endpoint::AnalyzeImage.failure_message("HTTP error! status: 413"),
            "Error analyzing image: HTTP error! status: 413"
        );
        assert_eq!(
            Endpoint::FirstAidGuide.failure_message("ignored"),
            "Error loading first aid guide"
        );
    }

    #[test]
    fn test_symptoms_request_body() {
        let body = SymptomsRequest {
            symptoms: "Someone fell and hurt their ankle".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"symptoms": "Someone fell and hurt their ankle"})
        );
    }

    #[test]
    fn test_health_status_tolerates_extra_fields() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "healthy",
            "message": "QuickAid app is running!",
            "version": "1.0.0",
            "uptime": 12
        }))
        .unwrap();
        assert_eq!(health.notice(), "Health check: healthy");
        assert_eq!(health.version.as_deref(), Some("1.0.0"));
    }
}
