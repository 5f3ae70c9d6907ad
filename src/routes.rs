//! Navigation gating between the public and authenticated areas.
//!
//! The decision is a small state machine evaluated on every navigation:
//! paths on the public allow-list render unconditionally, anything else
//! requires the auth state to report a session, and the remainder redirects
//! to the login page carrying the originally requested path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthStore;

/// Paths reachable without a session, prefix-matched.
pub const PUBLIC_PATHS: [&str; 4] = ["/login", "/cadastro", "/esqueci-a-senha", "/alterar-senha"];

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Outcome of evaluating one navigation request. No terminal state; the
/// guard re-evaluates on every navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Allow-listed path; render regardless of auth state.
    PublicPage,
    /// Authenticated; render the target.
    AuthenticatedAccess,
    /// No session; redirect to login, remembering where the user meant
    /// to go so the login page can return there afterwards.
    RedirectToLogin { from: String },
}

pub fn decide(path: &str, is_authenticated: bool) -> RouteDecision {
    if PUBLIC_PATHS.iter().any(|public| path.starts_with(public)) {
        return RouteDecision::PublicPage;
    }
    if is_authenticated {
        RouteDecision::AuthenticatedAccess
    } else {
        RouteDecision::RedirectToLogin {
            from: path.to_owned(),
        }
    }
}

/// Login URL carrying the originally requested path. Best-effort: the login
/// page may use it to return the user after a successful login.
pub fn login_redirect_url(from: &str) -> String {
    if from.is_empty() || from == "/" {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={from}")
    }
}

/// Wraps the authenticated area: children render only while the guard
/// grants access; otherwise the browser is sent to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&location.pathname.get(), auth.is_authenticated()));

    Effect::new(move || {
        if let RouteDecision::RedirectToLogin { from } = decision.get() {
            navigate(
                &login_redirect_url(&from),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || !matches!(decision.get(), RouteDecision::RedirectToLogin { .. })>
            {children()}
        </Show>
    }
}
