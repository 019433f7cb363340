//! アップロードエリアコンポーネント

use crate::app::use_app;
use gloo::console;
use leptos::prelude::*;
use quickaid_common::upload::ALLOWED_TYPES;
use web_sys::{DragEvent, HtmlInputElement};

#[component]
pub fn UploadArea() -> impl IntoView {
    let ctx = use_app();
    let (is_dragover, set_is_dragover) = signal(false);

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);

        // 複数ドロップされても先頭の1枚だけ扱う
        let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };

        let name = file.name();
        if ctx.select_file(file) {
            ctx.notifier.success(format!("File \"{}\" ready for analysis", name));
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                ctx.select_file(file);
            }
            None => console::log!("File dialog closed without a selection"),
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:dragenter=on_dragenter
            on:dragover=on_dragenter
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <label for="image-input" class="upload-label">
                <div class="upload-icon">"📷"</div>
                <p>"Drag & drop an image here, or click to choose"</p>
                <p class="text-muted">"JPEG, PNG, GIF, WebP · up to 16 MB"</p>
            </label>
            <input
                type="file"
                id="image-input"
                accept=ALLOWED_TYPES.join(",")
                style="display: none"
                on:change=on_change
            />
        </div>
    }
}
