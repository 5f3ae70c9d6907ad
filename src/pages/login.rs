//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::LoginCredentials;
use crate::routes::HOME_PATH;
use crate::state::auth::AuthStore;
use crate::state::notify::NotifyStore;
use crate::util::validate::is_valid_email;

/// E-mail + password form. On success navigates to the path the route guard
/// recorded in the `from` query parameter, or to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<NotifyStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get() {
            return;
        }

        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            notify.error("Por favor, preencha todos os campos.");
            return;
        }
        if !is_valid_email(&email_value) {
            notify.error("Por favor, insira um endereço de e-mail válido.");
            return;
        }

        is_loading.set(true);
        let target = query
            .get_untracked()
            .get("from")
            .unwrap_or_else(|| HOME_PATH.to_owned());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let credentials = LoginCredentials {
                email: email_value,
                password: password_value,
            };
            match auth.login(&credentials).await {
                Ok(()) => {
                    notify.success("Login realizado com sucesso!");
                    navigate(&target, NavigateOptions::default());
                }
                Err(err) => notify.error(err.to_string()),
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1 class="auth-card__brand">"Sou Influencer"</h1>
                    <p class="auth-card__subtitle">"Entre com suas credenciais"</p>
                </header>

                <form class="auth-form" on:submit=submit>
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Endereço de e-mail"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="auth-form__password">
                        <input
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Senha"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__toggle"
                            on:click=move |_| show_password.update(|show| *show = !*show)
                        >
                            {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>
                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Carregando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <a href="/esqueci-a-senha">"Esqueceu sua senha?"</a>
                    <p class="auth-card__signup">
                        "Não tem uma conta? " <a href="/cadastro">"Criar conta"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
