//! Authentication flows: login, logout, password reset, token checks.
//!
//! The core operations are generic over [`Transport`] so they can be
//! exercised natively with mock transports. The plain wrappers bind them to
//! the browser transport and the shared session store; outside the browser
//! they degrade to a transport error, the same pattern the rest of `net`
//! uses for browser-only facilities.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use thiserror::Error;
use url::Url;

use crate::net::decode;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{
    LoginCredentials, LoginResponse, PasswordResetRequest, ResetCheck, ResetOutcome,
};
use crate::session::{Session, SessionStore};

const LOGIN_FALLBACK: &str = "Falha no login. Verifique suas credenciais.";
const RESET_INITIATE_FALLBACK: &str = "Erro ao solicitar redefinição de senha";
const RESET_TOKEN_FALLBACK: &str = "Token inválido ou expirado";
const RESET_COMPLETE_FALLBACK: &str = "Erro ao redefinir senha";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Post-save verification found an incomplete session in storage. The
    /// login attempt is treated as failed and the store is cleared.
    #[error("Failed to save authentication data")]
    Persistence,
}

/// Authenticate against `POST /auth` and persist the resulting session.
///
/// Fails closed: after saving, the store is re-read and the login is
/// rejected with [`AuthError::Persistence`] unless both the token and the
/// profile actually survived the write. Every failure path leaves the store
/// empty so a half-authenticated state is never observable.
pub async fn login_with<T: Transport>(
    transport: &T,
    session: &SessionStore,
    credentials: &LoginCredentials,
) -> Result<Session, AuthError> {
    let body = serde_json::to_value(credentials)
        .map_err(|err| ApiError::transport(format!("unencodable credentials: {err}")))?;

    let value = match transport.post("/auth", &body).await {
        Ok(value) => value,
        Err(err) => {
            session.clear();
            return Err(err.with_fallback(LOGIN_FALLBACK).into());
        }
    };

    let response: LoginResponse = match decode(value) {
        Ok(response) => response,
        Err(err) => {
            session.clear();
            return Err(err.into());
        }
    };

    let fresh = Session {
        token: response.token,
        user: response.user,
    };
    if session.save(&fresh).is_err() {
        session.clear();
        return Err(AuthError::Persistence);
    }

    // Trust what the store reads back, not what was written.
    match session.read() {
        Some(stored) if stored.token == fresh.token => Ok(stored),
        _ => {
            session.clear();
            Err(AuthError::Persistence)
        }
    }
}

/// Drop the persisted session. Never fails.
pub fn logout(session: &SessionStore) {
    session.clear();
}

pub fn is_authenticated(session: &SessionStore) -> bool {
    session.is_authenticated()
}

/// Ask the backend to e-mail a password reset link.
pub async fn initiate_password_reset_with<T: Transport>(
    transport: &T,
    email: &str,
) -> Result<ResetOutcome, ApiError> {
    let value = transport
        .post("/auth/reset-password", &serde_json::json!({ "email": email }))
        .await
        .map_err(|err| err.with_fallback(RESET_INITIATE_FALLBACK))?;
    decode(value)
}

/// Check whether a reset token from an e-mailed link is still valid.
pub async fn validate_reset_token_with<T: Transport>(
    transport: &T,
    token: &str,
) -> Result<ResetCheck, ApiError> {
    let value = transport
        .post(
            "/auth/check-code-reset-password",
            &serde_json::json!({ "token": token }),
        )
        .await
        .map_err(|err| err.with_fallback(RESET_TOKEN_FALLBACK))?;
    decode(value)
}

/// Submit the new password. Does not log the user in; composing with
/// `login` afterwards is the caller's choice.
pub async fn complete_password_reset_with<T: Transport>(
    transport: &T,
    request: &PasswordResetRequest,
) -> Result<ResetCheck, ApiError> {
    let body = serde_json::to_value(request)
        .map_err(|err| ApiError::transport(format!("unencodable reset request: {err}")))?;
    let value = transport
        .post("/auth/change-password", &body)
        .await
        .map_err(|err| err.with_fallback(RESET_COMPLETE_FALLBACK))?;
    decode(value)
}

/// Extract the `token` query parameter from a URL. Absent (not a failure)
/// when the parameter is missing, empty, or the URL does not parse.
pub fn token_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Like [`token_from_href`], defaulting to the current browser location
/// when no URL is given.
pub fn extract_token_from_location(href: Option<&str>) -> Option<String> {
    if let Some(href) = href {
        return token_from_href(href);
    }
    #[cfg(feature = "hydrate")]
    {
        let href = web_sys::window()?.location().href().ok()?;
        token_from_href(&href)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Login against the shared transport and session store.
pub async fn login(credentials: &LoginCredentials) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let transport = crate::net::http::GlooTransport::shared();
        login_with(&transport, &SessionStore::shared(), credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::transport("no transport outside the browser").into())
    }
}

pub async fn initiate_password_reset(email: &str) -> Result<ResetOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        initiate_password_reset_with(&crate::net::http::GlooTransport::shared(), email).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::transport("no transport outside the browser"))
    }
}

pub async fn validate_reset_token(token: &str) -> Result<ResetCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        validate_reset_token_with(&crate::net::http::GlooTransport::shared(), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::transport("no transport outside the browser"))
    }
}

pub async fn complete_password_reset(request: &PasswordResetRequest) -> Result<ResetCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        complete_password_reset_with(&crate::net::http::GlooTransport::shared(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::transport("no transport outside the browser"))
    }
}
