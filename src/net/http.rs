//! HTTP transport for the backend API.
//!
//! Browser builds (`hydrate`) go through `gloo-net`. Every request carries
//! JSON `Accept`/`Content-Type` headers and, whenever the session store
//! holds a token, an `Authorization: Bearer` header. Native builds have no
//! real transport; services are exercised with mock [`Transport`] impls in
//! tests, and the user-facing wrappers degrade to a transport error.

use serde_json::Value;

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::session::SessionStore;

/// Default backend origin, matching the development API. Override at build
/// time with `SOU_INFLUENCER_API`.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

pub fn api_base() -> String {
    option_env!("SOU_INFLUENCER_API")
        .unwrap_or(DEFAULT_API_BASE)
        .to_owned()
}

/// Outbound calls to the backend origin. Implementations return the raw
/// JSON body; decoding into wire types happens in the service layer.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Structured error body the backend attaches to failed requests.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "hydrate")]
pub struct GlooTransport {
    base: String,
    session: SessionStore,
}

#[cfg(feature = "hydrate")]
impl GlooTransport {
    pub fn new(base: String, session: SessionStore) -> Self {
        Self { base, session }
    }

    /// Transport bound to the configured origin and the browser session.
    pub fn shared() -> Self {
        Self::new(api_base(), SessionStore::shared())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn bearer(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {token}"))
    }

    async fn dispatch(
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        let request = request.map_err(|err| ApiError::transport(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        let status = response.status();
        if response.ok() {
            return response
                .json::<Value>()
                .await
                .map_err(|err| ApiError::transport(format!("unreadable response body: {err}")));
        }

        // Prefer a structured error body; anything else degrades to a
        // transport-kind failure.
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(ApiError::Server {
                status,
                message: body.message.unwrap_or_default(),
            }),
            Err(_) => Err(ApiError::transport(format!(
                "status {status} without a structured body"
            ))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        let mut builder = gloo_net::http::Request::get(&url)
            .query(query.iter().copied())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        Self::dispatch(builder.build()).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        let mut builder = gloo_net::http::Request::post(&url).header("Accept", "application/json");
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        Self::dispatch(builder.json(body)).await
    }
}
