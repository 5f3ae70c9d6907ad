//! Multi-step signup page.
//!
//! The wizard walks through account type, username, contact details, and
//! password. Steps 2 and 3 only advance after an availability probe reports
//! the candidate as free; probe responses are tagged so a superseded probe
//! can never apply its result over a newer one. The final step creates the
//! account and logs the new user in automatically.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::types::{AccountProfile, LoginCredentials};
use crate::net::user;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthStore;
use crate::state::notify::NotifyStore;
use crate::state::signup::{
    CheckSequence, SignupDraft, SignupErrors, SignupStep, apply_email_check,
    apply_username_check, validate_step,
};
use crate::util::delay::after;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<NotifyStore>();
    let navigate = use_navigate();

    let step = RwSignal::new(SignupStep::AccountType);
    let draft = RwSignal::new(SignupDraft::default());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(SignupErrors::default());
    let is_loading = RwSignal::new(false);
    let is_checking = RwSignal::new(false);
    let checks = CheckSequence::new();

    // Field errors reset when the user moves between steps.
    Effect::new(move || {
        let _ = step.get();
        errors.set(SignupErrors::default());
    });

    let submit = {
        let navigate = navigate.clone();
        move || {
            let Some(data) = draft.get().to_signup_data() else {
                return;
            };
            is_loading.set(true);
            errors.set(SignupErrors::default());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match user::signup(&data).await {
                    Err(err) => {
                        let message = err.to_string();
                        errors.update(|errors| errors.general = Some(message.clone()));
                        notify.error(message);
                    }
                    Ok(_account) => {
                        let credentials = LoginCredentials {
                            email: data.email.clone(),
                            password: data.password.clone(),
                        };
                        match auth.login(&credentials).await {
                            Ok(()) => {
                                notify.success("Cadastro realizado com sucesso!");
                                let navigate = navigate.clone();
                                after(1_500, move || {
                                    navigate(
                                        HOME_PATH,
                                        NavigateOptions {
                                            replace: true,
                                            ..Default::default()
                                        },
                                    );
                                });
                            }
                            Err(_) => {
                                // The account exists; send the user to sign
                                // in manually.
                                notify.success("Cadastro realizado. Faça login para continuar.");
                                let navigate = navigate.clone();
                                after(1_500, move || {
                                    navigate(
                                        LOGIN_PATH,
                                        NavigateOptions {
                                            replace: true,
                                            ..Default::default()
                                        },
                                    );
                                });
                            }
                        }
                    }
                }
                is_loading.set(false);
            });
        }
    };

    let advance = {
        let submit = submit.clone();
        move || {
            if is_loading.get() || is_checking.get() {
                return;
            }
            let current = step.get();
            let local = validate_step(current, &draft.get(), &confirm_password.get());
            if !local.is_empty() {
                errors.set(local);
                return;
            }

            match current {
                SignupStep::AccountType => step.set(SignupStep::Username),
                SignupStep::Username => {
                    is_checking.set(true);
                    let tag = checks.issue();
                    let username = draft.get().username.trim().to_owned();
                    leptos::task::spawn_local(async move {
                        let result = user::check_username(&username).await;
                        if checks.is_current(tag) {
                            let mut probe_errors = SignupErrors::default();
                            if apply_username_check(&mut probe_errors, &result) {
                                step.set(SignupStep::Contact);
                            } else {
                                errors.set(probe_errors);
                            }
                        }
                        is_checking.set(false);
                    });
                }
                SignupStep::Contact => {
                    is_checking.set(true);
                    let tag = checks.issue();
                    let email = draft.get().email.trim().to_owned();
                    leptos::task::spawn_local(async move {
                        let result = user::check_email(&email).await;
                        if checks.is_current(tag) {
                            let mut probe_errors = SignupErrors::default();
                            if apply_email_check(&mut probe_errors, &result) {
                                step.set(SignupStep::Password);
                            } else {
                                errors.set(probe_errors);
                            }
                        }
                        is_checking.set(false);
                    });
                }
                SignupStep::Password => submit(),
            }
        }
    };

    let go_back = move |_| {
        if let Some(previous) = step.get().previous() {
            step.set(previous);
        }
    };

    let footer_label = move || {
        if is_loading.get() {
            "Enviando..."
        } else if is_checking.get() {
            "Verificando..."
        } else if step.get().is_last() {
            "Criar conta"
        } else {
            "Avançar"
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <header class="auth-card__header">
                    <h1 class="auth-card__brand">"Criar conta"</h1>
                    <StepIndicator step=step/>
                </header>

                {move || {
                    errors
                        .get()
                        .general
                        .map(|message| view! { <div class="auth-banner auth-banner--error">{message}</div> })
                }}

                {move || match step.get() {
                    SignupStep::AccountType => {
                        view! {
                            <div class="signup-step">
                                <h2 class="signup-step__title">"Escolha seu tipo de conta"</h2>
                                <p class="signup-step__subtitle">
                                    "Selecione o tipo de conta que melhor se adequa ao seu perfil"
                                </p>
                                <div class="signup-step__cards">
                                    <AccountTypeCard
                                        title="Influenciador"
                                        description="Crie conteúdo e expanda sua audiência"
                                        selected=Signal::derive(move || {
                                            draft.get().profile == Some(AccountProfile::Influencer)
                                        })
                                        on_select=Callback::new(move |()| {
                                            draft
                                                .update(|draft| {
                                                    draft.profile = Some(AccountProfile::Influencer)
                                                });
                                        })
                                    />
                                    <AccountTypeCard
                                        title="Anunciante"
                                        description="Divulgue sua marca com os criadores certos"
                                        selected=Signal::derive(move || {
                                            draft.get().profile == Some(AccountProfile::Advertiser)
                                        })
                                        on_select=Callback::new(move |()| {
                                            draft
                                                .update(|draft| {
                                                    draft.profile = Some(AccountProfile::Advertiser)
                                                });
                                        })
                                    />
                                </div>
                                {move || {
                                    errors
                                        .get()
                                        .account_type
                                        .map(|message| {
                                            view! { <p class="signup-step__error">{message}</p> }
                                        })
                                }}
                            </div>
                        }
                            .into_any()
                    }
                    SignupStep::Username => {
                        view! {
                            <div class="signup-step">
                                <h2 class="signup-step__title">"Escolha seu nome de usuário"</h2>
                                <TextField
                                    label="Nome de usuário"
                                    placeholder="Como você quer ser encontrado"
                                    value=Signal::derive(move || draft.get().username)
                                    on_input=Callback::new(move |value: String| {
                                        draft.update(|draft| draft.username = value);
                                    })
                                    error=Signal::derive(move || errors.get().username)
                                />
                            </div>
                        }
                            .into_any()
                    }
                    SignupStep::Contact => {
                        view! {
                            <div class="signup-step">
                                <h2 class="signup-step__title">"Seus dados"</h2>
                                <TextField
                                    label="Primeiro nome"
                                    placeholder="Primeiro nome"
                                    value=Signal::derive(move || draft.get().first_name)
                                    on_input=Callback::new(move |value: String| {
                                        draft.update(|draft| draft.first_name = value);
                                    })
                                    error=Signal::derive(move || errors.get().first_name)
                                />
                                <TextField
                                    label="Sobrenome"
                                    placeholder="Sobrenome"
                                    value=Signal::derive(move || draft.get().last_name)
                                    on_input=Callback::new(move |value: String| {
                                        draft.update(|draft| draft.last_name = value);
                                    })
                                    error=Signal::derive(move || errors.get().last_name)
                                />
                                <TextField
                                    label="E-mail"
                                    placeholder="Endereço de e-mail"
                                    input_type="email"
                                    value=Signal::derive(move || draft.get().email)
                                    on_input=Callback::new(move |value: String| {
                                        draft.update(|draft| draft.email = value);
                                    })
                                    error=Signal::derive(move || errors.get().email)
                                />
                            </div>
                        }
                            .into_any()
                    }
                    SignupStep::Password => {
                        view! {
                            <div class="signup-step">
                                <h2 class="signup-step__title">"Crie sua senha"</h2>
                                <TextField
                                    label="Senha"
                                    placeholder="Mínimo de 8 caracteres"
                                    input_type=Signal::derive(move || {
                                        if show_password.get() { "text" } else { "password" }
                                    })
                                    value=Signal::derive(move || draft.get().password)
                                    on_input=Callback::new(move |value: String| {
                                        draft.update(|draft| draft.password = value);
                                    })
                                    error=Signal::derive(move || errors.get().password)
                                />
                                <TextField
                                    label="Confirme a senha"
                                    placeholder="Repita a senha"
                                    input_type=Signal::derive(move || {
                                        if show_password.get() { "text" } else { "password" }
                                    })
                                    value=confirm_password
                                    on_input=Callback::new(move |value: String| {
                                        confirm_password.set(value);
                                    })
                                    error=Signal::derive(move || errors.get().confirm_password)
                                />
                                <label class="signup-step__show-password">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || show_password.get()
                                        on:change=move |_| {
                                            show_password.update(|show| *show = !*show)
                                        }
                                    />
                                    "Mostrar senhas"
                                </label>
                            </div>
                        }
                            .into_any()
                    }
                }}

                <footer class="signup-footer">
                    <Show when=move || step.get().previous().is_some()>
                        <button class="btn" on:click=go_back>
                            "Voltar"
                        </button>
                    </Show>
                    <button
                        class="btn btn--primary"
                        disabled=move || is_loading.get() || is_checking.get()
                        on:click=move |_| advance()
                    >
                        {footer_label}
                    </button>
                </footer>

                <p class="auth-card__signup">
                    "Já tem uma conta? " <a href="/login">"Entrar"</a>
                </p>
            </div>
        </div>
    }
}

/// Selectable card for one of the two account profiles.
#[component]
fn AccountTypeCard(
    title: &'static str,
    description: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="account-type-card"
            class=("account-type-card--selected", move || selected.get())
            on:click=move |_| on_select.run(())
        >
            <span class="account-type-card__title">{title}</span>
            <span class="account-type-card__description">{description}</span>
        </button>
    }
}

/// Four-step progress indicator.
#[component]
fn StepIndicator(step: RwSignal<SignupStep>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {SignupStep::ALL
                .iter()
                .map(|&marker| {
                    view! {
                        <li
                            class="step-indicator__step"
                            class=("step-indicator__step--done", move || step.get() >= marker)
                        >
                            {marker.number()}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
