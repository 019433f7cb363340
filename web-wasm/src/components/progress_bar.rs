//! 読み込み中表示とプログレスバー

use crate::app::use_app;
use gloo::timers::callback::Interval;
use leptos::prelude::*;
use quickaid_common::progress::{STEPS, STEP_INTERVAL_MS};
use quickaid_common::{Endpoint, ProgressSimulation};

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let ctx = use_app();
    let endpoint = move || ctx.loading_endpoint();
    let is_analysis = move || {
        matches!(
            endpoint(),
            Some(Endpoint::AnalyzeImage | Endpoint::AnalyzeSymptoms)
        )
    };

    view! {
        <div id="loading" class="loading">
            <div class=move || {
                let kind = if is_analysis() { "analysis" } else { "upload" };
                format!("spinner spinner-{}", kind)
            } />
            <p>{move || endpoint().map(|e| e.loading_message()).unwrap_or("Processing...")}</p>
            <Show when=is_analysis>
                <ProgressBar />
            </Show>
        </div>
    }
}

/// 一定間隔で進む擬似プログレス
///
/// 最後のステップか表示が消えた時点でタイマーを破棄する。
#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = RwSignal::new(ProgressSimulation::new());

    let interval = StoredValue::new_local(Some(Interval::new(STEP_INTERVAL_MS, move || {
        let _ = progress.try_update(|p| p.tick());
    })));

    // 最後のステップに達したらタイマーを止める
    Effect::new(move |_| {
        if progress.with(|p| p.is_finished()) {
            interval.set_value(None);
        }
    });

    view! {
        <div class="progress-bar">
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get().fraction() * 100.0)
                />
            </div>
            <div class="progress-steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| view! {
                        <span
                            class="step"
                            class:active=move || progress.get().is_step_active(index)
                        >
                            {*step}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
