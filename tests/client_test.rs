//! バックエンドクライアントのテスト
//!
//! axumで立てたローカルサーバーを相手に送受信を確認する。

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use quickaid::client::BackendClient;
use quickaid::error::QuickAidError;
use quickaid_common::{Endpoint, ValidationError};
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::tempdir;

/// 接続を受け付けないアドレス（検証で弾かれるべきケース用）
const UNREACHABLE: &str = "http://127.0.0.1:9";

async fn analyze_image(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("image") {
            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            return (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "filename": filename,
                    "contentType": content_type,
                    "bytes": bytes
                })),
            );
        }
    }
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "No image uploaded"})),
    )
}

async fn analyze_symptoms(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "symptoms": body["symptoms"],
        "analysis": "placeholder"
    }))
}

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({"status": "healthy", "version": "1.0.0"})) }),
        )
        .route(
            "/emergency_contacts",
            get(|| async {
                Json(json!({"emergency": {"number": "911", "description": "Police, Fire, Medical Emergency"}}))
            }),
        )
        .route(
            "/first_aid_guide",
            get(|| async { Json(json!({"burns": "Cool with running water for 10-20 minutes"})) }),
        )
        .route("/analyze_image", post(analyze_image))
        .route("/analyze_symptoms", post(analyze_symptoms));
    spawn_server(app).await
}

fn client(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn test_health() {
    let base = spawn_backend().await;
    let health = client(&base).health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.notice(), "Health check: healthy");
}

#[tokio::test]
async fn test_reference_endpoints_return_opaque_json() {
    let base = spawn_backend().await;
    let client = client(&base);

    let contacts = client.reference(Endpoint::EmergencyContacts).await.unwrap();
    assert_eq!(contacts["emergency"]["number"], "911");

    let guide = client.reference(Endpoint::FirstAidGuide).await.unwrap();
    assert!(guide["burns"].as_str().unwrap().contains("running water"));
}

#[tokio::test]
async fn test_analyze_symptoms_sends_trimmed_text() {
    let base = spawn_backend().await;
    let data = client(&base)
        .analyze_symptoms("   Person burned their hand on stove \n")
        .await
        .unwrap();
    assert_eq!(data["symptoms"], "Person burned their hand on stove");
}

#[tokio::test]
async fn test_analyze_image_uploads_multipart_field() {
    let base = spawn_backend().await;
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("wound.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0, 1, 2, 3]).unwrap();

    let data = client(&base).analyze_image(&path).await.unwrap();
    assert_eq!(data["filename"], "wound.png");
    assert_eq!(data["contentType"], "image/png");
    assert_eq!(data["bytes"], 8);
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let app = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Internal server error"})))
    });
    let base = spawn_server(app).await;

    let err = client(&base)
        .analyze_symptoms("Someone fell and hurt their ankle")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        QuickAidError::Api(quickaid_common::Error::Http { status: 500 })
    ));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let app = Router::new().route("/first_aid_guide", get(|| async { "<html>oops</html>" }));
    let base = spawn_server(app).await;

    let err = client(&base)
        .reference(Endpoint::FirstAidGuide)
        .await
        .unwrap_err();
    assert!(matches!(err, QuickAidError::JsonParse(_)));
}

/// 検証エラーはネットワークに到達しない（到達不能なサーバーでも検証エラーになる）
#[tokio::test]
async fn test_unsupported_type_rejected_before_network() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    let err = client(UNREACHABLE).analyze_image(&path).await.unwrap_err();
    assert!(matches!(
        err,
        QuickAidError::Validation(ValidationError::UnsupportedType { .. })
    ));
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_oversized_file_rejected_before_network() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("huge.jpg");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(16 * 1024 * 1024 + 1).unwrap();

    let err = client(UNREACHABLE).analyze_image(&path).await.unwrap_err();
    assert!(matches!(
        err,
        QuickAidError::Validation(ValidationError::FileTooLarge { .. })
    ));
}

#[tokio::test]
async fn test_short_symptoms_rejected_before_network() {
    let err = client(UNREACHABLE)
        .analyze_symptoms("  cut     ")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        QuickAidError::Validation(ValidationError::SymptomsTooShort { .. })
    ));
}

#[tokio::test]
async fn test_missing_file_rejected_before_network() {
    let err = client(UNREACHABLE)
        .analyze_image(std::path::Path::new("/nonexistent/path/wound.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuickAidError::FileNotFound(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let err = client(UNREACHABLE)
        .analyze_symptoms("Child is choking on food")
        .await
        .unwrap_err();
    assert!(matches!(err, QuickAidError::Request(_)));
    assert!(!err.is_validation());
}
