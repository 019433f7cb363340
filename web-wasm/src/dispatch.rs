//! リクエスト送信と結果の振り分け
//!
//! 送信前に検証し、チャネルごとの世代で古いレスポンスを捨てる。

use crate::api::backend;
use crate::app::AppContext;
use gloo::console;
use leptos::task::spawn_local;
use quickaid_common::upload::require_file;
use quickaid_common::{validate_symptoms, Channel, Endpoint, RenderedResult, Result};
use serde_json::Value;
use std::future::Future;

/// 共通の送信処理
fn dispatch<F>(ctx: AppContext, channel: Channel, endpoint: Endpoint, request: F)
where
    F: Future<Output = Result<Value>> + 'static,
{
    let Some(ticket) = ctx.tracker.try_update(|t| t.begin(channel, endpoint)) else {
        return;
    };
    console::log!(format!("{} {} ({})", endpoint.method(), endpoint.path(), endpoint.loading_message()));

    spawn_local(async move {
        let outcome = request.await;

        let is_current = ctx.tracker.try_update(|t| t.finish(ticket)).unwrap_or(false);
        if !is_current {
            console::debug!(format!(
                "Discarding stale response from {} (generation {})",
                endpoint.path(),
                ticket.generation
            ));
            return;
        }

        match outcome {
            Ok(data) => {
                console::log!(format!("{} response received", endpoint.title()));
                ctx.result.set(Some(RenderedResult::new(endpoint.title(), &data)));
            }
            Err(e) => {
                console::error!(format!("{} error: {}", endpoint.title(), e));
                ctx.notifier.error(endpoint.failure_message(&e.to_string()));
            }
        }
    });
}

/// 選択中の画像を`/analyze_image`へ送る
pub fn submit_image(ctx: AppContext) {
    let selected = ctx.selected.get_untracked();
    if let Err(e) = require_file(selected.as_ref().map(|s| &s.info)) {
        ctx.notifier.show(e.to_string(), e.severity());
        return;
    }
    let Some(selected) = selected else {
        return;
    };

    dispatch(ctx, Channel::Image, Endpoint::AnalyzeImage, async move {
        backend::analyze_image(&selected.file).await
    });
}

/// 入力中の症状を`/analyze_symptoms`へ送る
pub fn submit_symptoms(ctx: AppContext) {
    let text = ctx.symptoms.get_untracked();
    let symptoms = match validate_symptoms(&text) {
        Ok(symptoms) => symptoms.to_string(),
        Err(e) => {
            ctx.notifier.show(e.to_string(), e.severity());
            return;
        }
    };

    dispatch(ctx, Channel::Symptoms, Endpoint::AnalyzeSymptoms, async move {
        backend::analyze_symptoms(&symptoms).await
    });
}

/// 緊急連絡先・応急手当ガイドを読み込む
pub fn load_reference(ctx: AppContext, endpoint: Endpoint) {
    dispatch(ctx, Channel::Reference, endpoint, backend::reference(endpoint));
}

/// 起動時の接続確認
pub fn health_check(ctx: AppContext) {
    spawn_local(async move {
        match backend::health().await {
            Ok(health) => {
                console::log!(format!("✅ Health check successful: {}", health.status));
                ctx.notifier.success(health.notice());
            }
            Err(e) => {
                console::error!(format!("❌ Health check failed: {}", e));
                ctx.notifier.error(Endpoint::Health.failure_message(&e.to_string()));
            }
        }
    });
}
