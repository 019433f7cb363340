//! キーボードショートカット一覧（F1）

use crate::app::use_app;
use leptos::prelude::*;
use quickaid_common::Shortcut;

#[component]
pub fn ShortcutsHelp() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="shortcuts-overlay" on:click=move |_| ctx.show_help.set(false)>
            <div class="shortcuts-dialog">
                <h3>"⌨️ Keyboard Shortcuts"</h3>
                <ul>
                    {Shortcut::help_entries()
                        .iter()
                        .map(|(keys, action)| view! {
                            <li><kbd>{*keys}</kbd>" - "{*action}</li>
                        })
                        .collect_view()}
                </ul>
                <p class="text-muted">"Click anywhere to close"</p>
            </div>
        </div>
    }
}
