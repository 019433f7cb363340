//! 症状入力パネル

use crate::app::use_app;
use crate::dispatch;
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use quickaid_common::symptoms::{is_submittable, placeholder_with_hint};
use quickaid_common::SymptomCounter;
use web_sys::HtmlTextAreaElement;

const DEFAULT_PLACEHOLDER: &str = "Describe what happened, symptoms, or the emergency situation...";

/// 表示後にフォーカスするまでの待ち時間(ms)
const FOCUS_DELAY_MS: u32 = 300;

/// 入力内容に合わせて高さを伸ばす
fn auto_resize(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

#[component]
pub fn SymptomsPanel() -> impl IntoView {
    let ctx = use_app();
    let textarea_ref = NodeRef::<html::Textarea>::new();
    let (focused, set_focused) = signal(false);

    let placeholder = if ctx.symptoms.get_untracked().trim().is_empty() {
        placeholder_with_hint(js_sys::Math::random())
    } else {
        DEFAULT_PLACEHOLDER.to_string()
    };

    Timeout::new(FOCUS_DELAY_MS, move || {
        if let Some(textarea) = textarea_ref.try_get_untracked().flatten() {
            let _ = textarea.focus();
        }
    })
    .forget();

    let on_input = move |ev: web_sys::Event| {
        let textarea: HtmlTextAreaElement = event_target(&ev);
        auto_resize(&textarea);
        ctx.symptoms.set(textarea.value());
    };

    let counter = move || ctx.symptoms.with(|text| SymptomCounter::new(text));
    let ready = move || ctx.symptoms.with(|text| is_submittable(text));

    view! {
        <section id="symptoms-section" class="section section-enter">
            <h2>"📝 Describe the Symptoms"</h2>
            <div class="textarea-wrapper" class:focused=move || focused.get()>
                <textarea
                    id="symptoms-text"
                    node_ref=textarea_ref
                    rows="5"
                    placeholder=placeholder
                    prop:value=move || ctx.symptoms.get()
                    on:input=on_input
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                />
                <div class=move || format!("char-counter {}", counter().state.as_str())>
                    {move || counter().label()}
                </div>
            </div>

            <button
                class="btn primary"
                class:ready=ready
                disabled=move || !ready()
                on:click=move |_| dispatch::submit_symptoms(ctx)
            >
                "🔍 Analyze Symptoms"
            </button>
        </section>
    }
}
