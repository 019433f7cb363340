//! QuickAid Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod dispatch;
pub mod file_reader;
pub mod notify;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("🏥 QuickAid - initializing");
    leptos::mount::mount_to_body(app::App);
}
