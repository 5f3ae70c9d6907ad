//! Top navigation bar for the authenticated area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthStore;

fn page_title(path: &str) -> &'static str {
    match path {
        "/meu-cadastro" => "Meu Cadastro",
        _ => "Dashboard",
    }
}

/// Shows the current page title and the account menu with the logout
/// action. Logging out clears the session and returns to the login page.
#[component]
pub fn TopNavbar(on_toggle_sidebar: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let location = use_location();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);

    let title = move || page_title(&location.pathname.get());
    let user_name = move || auth.user().map(|user| user.name).unwrap_or_default();
    let user_email = move || auth.user().map(|user| user.email).unwrap_or_default();

    let on_logout = move |_| {
        menu_open.set(false);
        auth.logout();
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <header class="top-navbar">
            <button
                class="top-navbar__menu-button"
                aria-label="Abrir menu"
                on:click=move |_| on_toggle_sidebar.run(())
            >
                "☰"
            </button>
            <h2 class="top-navbar__title">{title}</h2>
            <div class="top-navbar__spacer"></div>
            <div class="top-navbar__account">
                <button
                    class="top-navbar__account-button"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="top-navbar__account-name">{user_name}</span>
                    <span class="top-navbar__account-caret">"▾"</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="top-navbar__dropdown">
                        <div class="top-navbar__dropdown-header">
                            <span class="top-navbar__dropdown-email">{user_email}</span>
                        </div>
                        <a class="top-navbar__dropdown-item" href="/meu-cadastro">
                            "Meu Cadastro"
                        </a>
                        <button class="top-navbar__dropdown-item" on:click=on_logout.clone()>
                            "Sair"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
