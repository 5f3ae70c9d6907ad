//! Side navigation for the authenticated area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Collapsible navigation rail. On narrow layouts `is_open` drives an
/// overlay; the toggle lives in the top navbar.
#[component]
pub fn Sidebar(is_open: RwSignal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let location = use_location();

    let link_class = move |target: &'static str| {
        if location.pathname.get().starts_with(target) {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    view! {
        <aside class="sidebar" class=("sidebar--open", move || is_open.get())>
            <div class="sidebar__brand">
                <span class="sidebar__brand-name">"Sou Influencer"</span>
                <button
                    class="sidebar__close"
                    aria-label="Fechar menu"
                    on:click=move |_| on_toggle.run(())
                >
                    "×"
                </button>
            </div>
            <nav class="sidebar__nav">
                <a class=move || link_class("/dashboard") href="/dashboard">
                    "Dashboard"
                </a>
                <a class=move || link_class("/meu-cadastro") href="/meu-cadastro">
                    "Meu Cadastro"
                </a>
            </nav>
        </aside>
    }
}
