//! 画像プレビュー

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn ImagePreview() -> impl IntoView {
    let ctx = use_app();

    view! {
        {move || ctx.preview.get().map(|preview| view! {
            <div class="image-preview">
                <div class="preview-header">
                    <span class="preview-title">"📸 Image Preview"</span>
                    <button class="preview-close" on:click=move |_| ctx.clear_file()>
                        "×"
                    </button>
                </div>
                <div class="preview-image">
                    <img src=preview.data_url alt=preview.file_name />
                </div>
                // 回転・切り抜きは未実装
                <div class="preview-actions">
                    <button
                        class="btn-small secondary"
                        on:click=move |_| ctx.notifier.info("Rotate is not available yet")
                    >
                        "🔄 Rotate"
                    </button>
                    <button
                        class="btn-small secondary"
                        on:click=move |_| ctx.notifier.info("Crop is not available yet")
                    >
                        "✂️ Crop"
                    </button>
                </div>
            </div>
        })}
    }
}
