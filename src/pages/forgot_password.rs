//! Password reset initiation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::routes::LOGIN_PATH;
use crate::util::delay::after;
use crate::util::validate::is_valid_email;

#[derive(Clone, PartialEq, Eq)]
enum Status {
    Error(String),
    Success(String),
}

/// Asks for the account e-mail and requests a reset link. On success the
/// page shows a confirmation banner and returns to login shortly after.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Status>);
    let is_loading = RwSignal::new(false);

    let submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if is_loading.get() {
                return;
            }
            status.set(None);

            let email_value = email.get();
            if email_value.is_empty() {
                status.set(Some(Status::Error(
                    "Por favor, insira um endereço de e-mail".to_owned(),
                )));
                return;
            }
            if !is_valid_email(&email_value) {
                status.set(Some(Status::Error(
                    "Por favor, insira um endereço de e-mail válido".to_owned(),
                )));
                return;
            }

            is_loading.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth::initiate_password_reset(&email_value).await {
                    Ok(_) => {
                        status.set(Some(Status::Success(format!(
                            "Link de redefinição enviado para {email_value}. Verifique sua caixa de entrada."
                        ))));
                        email.set(String::new());
                        after(3_000, move || {
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        });
                    }
                    Err(err) => status.set(Some(Status::Error(err.to_string()))),
                }
                is_loading.set(false);
            });
        }
    };

    let back_to_login = move |_| {
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1 class="auth-card__brand">"Esqueceu sua senha?"</h1>
                    <p class="auth-card__subtitle">"Digite seu e-mail para redefinir"</p>
                </header>

                {move || {
                    status
                        .get()
                        .map(|status| match status {
                            Status::Error(message) => {
                                view! { <div class="auth-banner auth-banner--error">{message}</div> }
                            }
                            Status::Success(message) => {
                                view! { <div class="auth-banner auth-banner--success">{message}</div> }
                            }
                        })
                }}

                <form class="auth-form" on:submit=submit>
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Endereço de e-mail"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="btn btn--primary auth-form__submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Enviando..." } else { "Enviar link" }}
                    </button>
                </form>

                <button class="auth-card__back" on:click=back_to_login>
                    "Voltar para o login"
                </button>
            </div>
        </div>
    }
}
