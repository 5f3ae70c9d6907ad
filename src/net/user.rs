//! Account creation and availability probes.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::decode;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{SignupData, SignupResponse, UserCheck};

const SIGNUP_FALLBACK: &str = "Erro ao realizar cadastro";

/// Probe whether a username is taken. Failures propagate untranslated; the
/// caller must treat an error as "could not verify", never as "available".
pub async fn check_username_with<T: Transport>(
    transport: &T,
    username: &str,
) -> Result<UserCheck, ApiError> {
    let value = transport
        .get("/user/check-username", &[("username", username)])
        .await
        .inspect_err(|err| leptos::logging::warn!("username check failed: {err}"))?;
    decode(value)
}

/// Probe whether an e-mail address is taken. Same contract as
/// [`check_username_with`].
pub async fn check_email_with<T: Transport>(
    transport: &T,
    email: &str,
) -> Result<UserCheck, ApiError> {
    let value = transport
        .get("/user/check-email", &[("email", email)])
        .await
        .inspect_err(|err| leptos::logging::warn!("email check failed: {err}"))?;
    decode(value)
}

/// Create an account. The returned summary's `ACTIVE`/`INACTIVE` status is
/// decided by the backend; this service does not interpret it.
pub async fn signup_with<T: Transport>(
    transport: &T,
    data: &SignupData,
) -> Result<SignupResponse, ApiError> {
    let body = serde_json::to_value(data)
        .map_err(|err| ApiError::transport(format!("unencodable signup data: {err}")))?;
    let value = transport
        .post("/user", &body)
        .await
        .map_err(|err| err.with_fallback(SIGNUP_FALLBACK))?;
    decode(value)
}

pub async fn check_username(username: &str) -> Result<UserCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_username_with(&crate::net::http::GlooTransport::shared(), username).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::transport("no transport outside the browser"))
    }
}

pub async fn check_email(email: &str) -> Result<UserCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_email_with(&crate::net::http::GlooTransport::shared(), email).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::transport("no transport outside the browser"))
    }
}

pub async fn signup(data: &SignupData) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        signup_with(&crate::net::http::GlooTransport::shared(), data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::transport("no transport outside the browser"))
    }
}
