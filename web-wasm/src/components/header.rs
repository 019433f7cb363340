//! ヘッダーコンポーネント

use crate::app::use_app;
use crate::dispatch;
use gloo::console;
use leptos::prelude::*;
use quickaid_common::{Endpoint, Panel};

const EMERGENCY_NUMBER: &str = "911";

const EMERGENCY_CONFIRM: &str = "🚨 EMERGENCY CALL\n\n\
    This will attempt to call 911 (Emergency Services).\n\
    Only use this for real emergencies.\n\n\
    Continue?";

const EMERGENCY_INSTRUCTIONS: &str = "Calling 911...\n\n\
    If the call doesn't work:\n\
    • Use your phone to dial 911\n\
    • Stay calm and speak clearly\n\
    • Provide your location first";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();

    let call_emergency = move |_: web_sys::MouseEvent| {
        let window = window();
        if !window.confirm_with_message(EMERGENCY_CONFIRM).unwrap_or(false) {
            return;
        }
        console::log!("Emergency call initiated");
        if let Err(e) = window.location().set_href(&format!("tel:{}", EMERGENCY_NUMBER)) {
            console::error!("tel: navigation failed", e);
        }
        ctx.notifier.emergency(EMERGENCY_INSTRUCTIONS);
    };

    view! {
        <header class="header">
            <h1>"🏥 QuickAid - AI First Aid Assistant"</h1>
            <nav class="mode-buttons">
                <button
                    class="btn primary"
                    class:active=move || ctx.is_visible(Panel::Image)
                    on:click=move |_| ctx.show_panel(Panel::Image)
                >
                    "📷 Upload Image"
                </button>
                <button
                    class="btn primary"
                    class:active=move || ctx.is_visible(Panel::Symptoms)
                    on:click=move |_| ctx.show_panel(Panel::Symptoms)
                >
                    "📝 Describe Symptoms"
                </button>
            </nav>
            <nav class="quick-actions">
                <button
                    class="btn secondary"
                    on:click=move |_| dispatch::load_reference(ctx, Endpoint::EmergencyContacts)
                >
                    "📞 Emergency Contacts"
                </button>
                <button
                    class="btn secondary"
                    on:click=move |_| dispatch::load_reference(ctx, Endpoint::FirstAidGuide)
                >
                    "🩹 First Aid Guide"
                </button>
                <button class="btn emergency" on:click=call_emergency>
                    "🚨 Call 911"
                </button>
            </nav>
        </header>
    }
}
