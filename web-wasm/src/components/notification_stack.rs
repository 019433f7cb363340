//! 通知の積み重ね表示

use crate::app::use_app;
use leptos::prelude::*;
use quickaid_common::notification::STACK_TOP_PX;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_app();
    let notifier = ctx.notifier;

    view! {
        <div class="notifications">
            <For
                each=move || notifier.snapshot()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    let top = move || notifier.top_offset(id).unwrap_or(STACK_TOP_PX);
                    view! {
                        <div
                            class=format!("notification notification-{}", notification.severity.as_str())
                            style:top=move || format!("{}px", top())
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <div class="notification-icon">{notification.severity.icon()}</div>
                            <div class="notification-content">
                                <div class="notification-message">{notification.message}</div>
                            </div>
                            <button class="notification-close">"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
