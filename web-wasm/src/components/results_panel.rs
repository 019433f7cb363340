//! 解析結果パネル

use crate::app::use_app;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = use_app();
    let panel_ref = NodeRef::<html::Div>::new();

    // 結果が出たらスクロールして見せる
    Effect::new(move |_| {
        if ctx.result.with(|r| r.is_some()) {
            if let Some(panel) = panel_ref.get() {
                panel.scroll_into_view();
            }
        }
    });

    view! {
        <div
            id="results"
            class="results"
            node_ref=panel_ref
            style:display=move || if ctx.result.with(|r| r.is_some()) { "block" } else { "none" }
        >
            {move || ctx.result.get().map(|result| view! {
                <div class="results-header">
                    <h3>{result.title}</h3>
                    <button class="btn-small secondary" on:click=move |_| ctx.result.set(None)>
                        "Close"
                    </button>
                </div>
                <pre id="results-content">{result.body}</pre>
            })}
        </div>
    }
}
