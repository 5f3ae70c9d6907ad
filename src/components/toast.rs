//! Floating toast rendering the current notification, if any.

use leptos::prelude::*;

use crate::state::notify::{NotificationKind, NotifyStore};

/// Renders the single notification slot as a dismissible banner. Placement
/// is global; mount once near the router root.
#[component]
pub fn Toast() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();

    view! {
        {move || {
            notify
                .current()
                .map(|notification| {
                    let class = match notification.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| notify.dismiss()>
                            {notification.message}
                        </div>
                    }
                })
        }}
    }
}
