//! Password reset completion page, reached from the e-mailed link.
//!
//! The reset token travels as a `token` query parameter. It is extracted
//! and validated on mount; only a valid token reveals the form. After a
//! successful reset the page attempts an automatic login with the address
//! the backend returned and falls back to the login page when that fails.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::types::{LoginCredentials, PasswordResetRequest};
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthStore;
use crate::state::signup::MIN_PASSWORD_LEN;
use crate::util::delay::after;

#[derive(Clone, PartialEq, Eq)]
enum TokenPhase {
    Checking,
    Valid(String),
    Invalid,
}

#[derive(Clone, PartialEq, Eq)]
enum Status {
    Error(String),
    Success(String),
    Submitting(String),
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth_store = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let phase = RwSignal::new(TokenPhase::Checking);
    let status = RwSignal::new(None::<Status>);
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let show_confirmation = RwSignal::new(false);

    // Token extraction needs the browser URL, so the check only runs there.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match auth::extract_token_from_location(None) {
            None => {
                status.set(Some(Status::Error(
                    "Token de redefinição de senha não fornecido".to_owned(),
                )));
                phase.set(TokenPhase::Invalid);
            }
            Some(token) => match auth::validate_reset_token(&token).await {
                Ok(check) if check.success => phase.set(TokenPhase::Valid(token)),
                Ok(_) => {
                    status.set(Some(Status::Error("Token inválido ou expirado".to_owned())));
                    phase.set(TokenPhase::Invalid);
                }
                Err(err) => {
                    status.set(Some(Status::Error(err.to_string())));
                    phase.set(TokenPhase::Invalid);
                }
            },
        }
    });

    let password_is_valid = move || password.get().chars().count() >= MIN_PASSWORD_LEN;

    let submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if matches!(status.get(), Some(Status::Submitting(_))) {
                return;
            }

            let TokenPhase::Valid(token) = phase.get() else {
                status.set(Some(Status::Error(
                    "Token de redefinição de senha não encontrado".to_owned(),
                )));
                return;
            };

            let password_value = password.get();
            let confirmation_value = confirmation.get();
            if password_value.is_empty() || confirmation_value.is_empty() {
                status.set(Some(Status::Error(
                    "Por favor, preencha todos os campos".to_owned(),
                )));
                return;
            }
            if password_value != confirmation_value {
                status.set(Some(Status::Error("As senhas não coincidem".to_owned())));
                return;
            }
            if !password_is_valid() {
                status.set(Some(Status::Error(
                    "A senha deve ter pelo menos 8 caracteres".to_owned(),
                )));
                return;
            }

            status.set(Some(Status::Submitting("Alterando senha...".to_owned())));
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = PasswordResetRequest {
                    token,
                    password: password_value.clone(),
                    password_confirmation: confirmation_value,
                };
                let result = match auth::complete_password_reset(&request).await {
                    Ok(result) => result,
                    Err(err) => {
                        status.set(Some(Status::Error(err.to_string())));
                        return;
                    }
                };
                if !result.success {
                    status.set(Some(Status::Error("Erro ao redefinir senha".to_owned())));
                    return;
                }

                status.set(Some(Status::Success(
                    "Senha alterada com sucesso! Redirecionando...".to_owned(),
                )));

                // Automatic login with the address the backend confirmed.
                let credentials = LoginCredentials {
                    email: result.email.unwrap_or_default(),
                    password: password_value,
                };
                match auth_store.login(&credentials).await {
                    Ok(()) => {
                        after(2_000, move || {
                            navigate(HOME_PATH, NavigateOptions::default());
                        });
                    }
                    Err(_) => {
                        status.set(Some(Status::Success(
                            "Senha alterada, mas falha no login automático. Redirecionando para login..."
                                .to_owned(),
                        )));
                        after(2_000, move || {
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        });
                    }
                }
            });
        }
    };

    let request_new_link = move |_| {
        navigate("/esqueci-a-senha", NavigateOptions::default());
    };

    let status_banner = move || {
        status.get().map(|status| match status {
            Status::Error(message) => {
                view! { <div class="auth-banner auth-banner--error">{message}</div> }
            }
            Status::Success(message) => {
                view! { <div class="auth-banner auth-banner--success">{message}</div> }
            }
            Status::Submitting(message) => {
                view! { <div class="auth-banner auth-banner--info">{message}</div> }
            }
        })
    };

    view! {
        <div class="auth-page">
            {move || match phase.get() {
                TokenPhase::Checking => {
                    view! {
                        <div class="auth-card auth-card--center">
                            <div class="spinner"></div>
                            <p>"Verificando token..."</p>
                        </div>
                    }
                        .into_any()
                }
                TokenPhase::Invalid => {
                    view! {
                        <div class="auth-card auth-card--center">
                            <h2 class="auth-card__brand">"Token Inválido"</h2>
                            {status_banner}
                            <p class="auth-card__subtitle">
                                "O link de redefinição de senha expirou ou é inválido. \
                                 Por favor, solicite um novo link de redefinição."
                            </p>
                            <button class="btn btn--primary" on:click=request_new_link.clone()>
                                "Solicitar Novo Link"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                TokenPhase::Valid(_) => {
                    view! {
                        <div class="auth-card">
                            <header class="auth-card__header">
                                <h1 class="auth-card__brand">"Redefinir senha"</h1>
                                <p class="auth-card__subtitle">"Escolha sua nova senha"</p>
                            </header>
                            {status_banner}
                            <form class="auth-form" on:submit=submit.clone()>
                                <div class="auth-form__password">
                                    <input
                                        class="auth-form__input"
                                        type=move || {
                                            if show_password.get() { "text" } else { "password" }
                                        }
                                        placeholder="Nova senha"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="auth-form__toggle"
                                        on:click=move |_| {
                                            show_password.update(|show| *show = !*show)
                                        }
                                    >
                                        {move || {
                                            if show_password.get() { "Ocultar" } else { "Mostrar" }
                                        }}
                                    </button>
                                </div>
                                <div class="auth-form__password">
                                    <input
                                        class="auth-form__input"
                                        type=move || {
                                            if show_confirmation.get() { "text" } else { "password" }
                                        }
                                        placeholder="Confirme a nova senha"
                                        prop:value=move || confirmation.get()
                                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="auth-form__toggle"
                                        on:click=move |_| {
                                            show_confirmation.update(|show| *show = !*show)
                                        }
                                    >
                                        {move || {
                                            if show_confirmation.get() { "Ocultar" } else { "Mostrar" }
                                        }}
                                    </button>
                                </div>
                                <p class="auth-form__hint" class=("auth-form__hint--ok", password_is_valid)>
                                    "Mínimo de 8 caracteres"
                                </p>
                                <button type="submit" class="btn btn--primary auth-form__submit">
                                    "Alterar senha"
                                </button>
                            </form>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
