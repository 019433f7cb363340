//! 画像アップロードパネル

use crate::app::use_app;
use crate::components::{image_preview::ImagePreview, upload_area::UploadArea};
use crate::dispatch;
use leptos::prelude::*;

#[component]
pub fn ImagePanel() -> impl IntoView {
    let ctx = use_app();
    let file_info = move || ctx.selected.with(|s| s.as_ref().map(|s| s.info.clone()));
    let has_file = move || ctx.selected.with(|s| s.is_some());

    view! {
        <section id="image-section" class="section section-enter">
            <h2>"📸 Upload an Image"</h2>
            <p class="text-muted">"Take or choose a photo of the injury"</p>

            <UploadArea />

            {move || file_info().map(|info| view! {
                <div class="file-info">
                    <p><strong>"Selected file: "</strong>{info.name.clone()}</p>
                    <p><strong>"Size: "</strong>{info.display_size()}</p>
                    <p><strong>"Type: "</strong>{info.mime_type.clone()}</p>
                </div>
            })}

            <ImagePreview />

            <button
                class="btn primary"
                class:ready=has_file
                disabled=move || !has_file()
                on:click=move |_| dispatch::submit_image(ctx)
            >
                "🔍 Analyze Image"
            </button>
        </section>
    }
}
