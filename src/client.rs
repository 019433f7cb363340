//! バックエンドAPIクライアント

use crate::error::Result;
use crate::scanner;
use quickaid_common::endpoint::IMAGE_FIELD;
use quickaid_common::{validate_file, validate_symptoms, Endpoint, HealthStatus, SymptomsRequest};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 2xx以外はステータス付きのエラー。ボディは形を問わずJSONとして読む
    async fn read_json(endpoint: Endpoint, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        tracing::debug!(path = endpoint.path(), status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(quickaid_common::Error::Http {
                status: status.as_u16(),
            }
            .into());
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Value> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        Self::read_json(endpoint, response).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let value = self.get(Endpoint::Health).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// 緊急連絡先・応急手当ガイド
    pub async fn reference(&self, endpoint: Endpoint) -> Result<Value> {
        self.get(endpoint).await
    }

    /// 画像を検証してから`/analyze_image`へ送る
    pub async fn analyze_image(&self, path: &Path) -> Result<Value> {
        let info = scanner::inspect(path)?;
        validate_file(&info)?;

        let bytes = tokio::fs::read(path).await?;
        let part = Part::bytes(bytes)
            .file_name(info.name.clone())
            .mime_str(&info.mime_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let endpoint = Endpoint::AnalyzeImage;
        let url = endpoint.url(&self.base_url);
        tracing::info!(%url, file = %info.name, size = info.size, "uploading image");
        let response = self.http.post(&url).multipart(form).send().await?;
        Self::read_json(endpoint, response).await
    }

    /// 症状を検証してから`/analyze_symptoms`へ送る
    pub async fn analyze_symptoms(&self, text: &str) -> Result<Value> {
        let symptoms = validate_symptoms(text)?;
        let body = SymptomsRequest {
            symptoms: symptoms.to_string(),
        };

        let endpoint = Endpoint::AnalyzeSymptoms;
        let url = endpoint.url(&self.base_url);
        tracing::info!(%url, length = symptoms.chars().count(), "sending symptoms");
        let response = self.http.post(&url).json(&body).send().await?;
        Self::read_json(endpoint, response).await
    }
}
