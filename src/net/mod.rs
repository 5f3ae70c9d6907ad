//! Backend API access: transport, wire types, and the auth/user services.

pub mod auth;
pub mod error;
pub mod http;
pub mod types;
pub mod user;

use serde::de::DeserializeOwned;
use serde_json::Value;

use error::ApiError;

/// Decode a service response body; an unexpected shape counts as a
/// transport-kind failure.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|err| ApiError::transport(format!("unexpected response shape: {err}")))
}
