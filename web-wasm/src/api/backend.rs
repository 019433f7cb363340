//! QuickAidバックエンドへのfetch
//!
//! エンドポイントは同一オリジンの相対パス。レスポンスは形を問わず
//! `serde_json::Value`として返す。

use quickaid_common::endpoint::IMAGE_FIELD;
use quickaid_common::{Endpoint, Error, HealthStatus, Result, SymptomsRequest};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// JSの例外をネットワークエラーに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}

fn request_init(method: &str) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    opts
}

/// リクエスト送信（共通処理）
///
/// 2xx以外はステータス付きのエラーにする。
async fn send(request: Request) -> Result<Value> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Http {
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    Ok(serde_json::from_str(&text)?)
}

async fn get(endpoint: Endpoint) -> Result<Value> {
    let request = Request::new_with_str_and_init(endpoint.path(), &request_init("GET"))
        .map_err(js_error)?;
    send(request).await
}

pub async fn health() -> Result<HealthStatus> {
    let value = get(Endpoint::Health).await?;
    Ok(serde_json::from_value(value)?)
}

/// 参照系エンドポイント（緊急連絡先・応急手当ガイド）
pub async fn reference(endpoint: Endpoint) -> Result<Value> {
    get(endpoint).await
}

/// 画像をmultipartで送信
pub async fn analyze_image(file: &File) -> Result<Value> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(js_error)?;

    let opts = request_init(Endpoint::AnalyzeImage.method());
    opts.set_body(&JsValue::from(form));

    let request = Request::new_with_str_and_init(Endpoint::AnalyzeImage.path(), &opts)
        .map_err(js_error)?;
    send(request).await
}

/// 症状テキストをJSONで送信
pub async fn analyze_symptoms(symptoms: &str) -> Result<Value> {
    let body = serde_json::to_string(&SymptomsRequest {
        symptoms: symptoms.to_string(),
    })?;

    let opts = request_init(Endpoint::AnalyzeSymptoms.method());
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(Endpoint::AnalyzeSymptoms.path(), &opts)
        .map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    send(request).await
}
