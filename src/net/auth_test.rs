use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::net::error::CONNECTION_ERROR;
use crate::session::{MemoryBackend, StorageBackend, TOKEN_KEY};

#[derive(Default)]
struct MockTransport {
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockTransport {
    fn respond(response: Result<Value, ApiError>) -> Self {
        let mock = Self::default();
        mock.responses.borrow_mut().push_back(response);
        mock
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let query: serde_json::Map<String, Value> = query
            .iter()
            .map(|&(key, value)| (key.to_owned(), json!(value)))
            .collect();
        self.calls.borrow_mut().push((path.to_owned(), query.into()));
        self.responses.borrow_mut().pop_front().expect("unexpected request")
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push((path.to_owned(), body.clone()));
        self.responses.borrow_mut().pop_front().expect("unexpected request")
    }
}

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "a@b.com".to_owned(),
        password: "secret123".to_owned(),
    }
}

fn login_body() -> Value {
    json!({
        "user": {
            "id": "1",
            "name": "Ana Souza",
            "email": "a@b.com"
        },
        "token": "tok-1"
    })
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_persists_session_and_authenticates() {
    let transport = MockTransport::respond(Ok(login_body()));
    let session = SessionStore::in_memory();

    let stored = login_with(&transport, &session, &credentials())
        .await
        .expect("login");

    assert_eq!(stored.token, "tok-1");
    assert_eq!(stored.user.email, "a@b.com");
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert!(is_authenticated(&session));
}

#[tokio::test]
async fn login_posts_credentials_to_auth_endpoint() {
    let transport = MockTransport::respond(Ok(login_body()));
    let session = SessionStore::in_memory();

    login_with(&transport, &session, &credentials())
        .await
        .expect("login");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/auth");
    assert_eq!(calls[0].1["email"], "a@b.com");
    assert_eq!(calls[0].1["password"], "secret123");
}

#[tokio::test]
async fn login_then_logout_leaves_store_empty() {
    let transport = MockTransport::respond(Ok(login_body()));
    let session = SessionStore::in_memory();

    login_with(&transport, &session, &credentials())
        .await
        .expect("login");
    logout(&session);

    assert!(session.read().is_none());
    assert!(session.token().is_none());
    assert!(!is_authenticated(&session));
}

#[tokio::test]
async fn login_surfaces_server_message_and_clears_store() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 401,
        message: "invalid credentials".to_owned(),
    }));
    let session = SessionStore::in_memory();

    let err = login_with(&transport, &session, &credentials())
        .await
        .expect_err("login must fail");

    assert_eq!(err.to_string(), "invalid credentials");
    assert!(session.read().is_none());
    assert!(!is_authenticated(&session));
}

#[tokio::test]
async fn login_maps_empty_server_message_to_fallback() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 400,
        message: String::new(),
    }));
    let session = SessionStore::in_memory();

    let err = login_with(&transport, &session, &credentials())
        .await
        .expect_err("login must fail");

    assert_eq!(err.to_string(), "Falha no login. Verifique suas credenciais.");
}

#[tokio::test]
async fn login_maps_transport_failure_to_generic_message() {
    let transport = MockTransport::respond(Err(ApiError::transport("refused")));
    let session = SessionStore::in_memory();

    let err = login_with(&transport, &session, &credentials())
        .await
        .expect_err("login must fail");

    assert_eq!(err.to_string(), CONNECTION_ERROR);
    assert!(session.read().is_none());
}

#[tokio::test]
async fn login_rejects_unexpected_response_shape() {
    let transport = MockTransport::respond(Ok(json!({ "unexpected": true })));
    let session = SessionStore::in_memory();

    let err = login_with(&transport, &session, &credentials())
        .await
        .expect_err("login must fail");

    assert!(matches!(err, AuthError::Api(ApiError::Transport { .. })));
    assert!(session.read().is_none());
}

// =============================================================
// persistence verification
// =============================================================

struct DropTokenBackend {
    inner: MemoryBackend,
}

impl StorageBackend for DropTokenBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        if key != TOKEN_KEY {
            self.inner.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

#[tokio::test]
async fn login_fails_closed_when_storage_drops_the_token() {
    let transport = MockTransport::respond(Ok(login_body()));
    let session = SessionStore::new(DropTokenBackend {
        inner: MemoryBackend::default(),
    });

    let err = login_with(&transport, &session, &credentials())
        .await
        .expect_err("login must fail");

    assert_eq!(err, AuthError::Persistence);
    assert!(session.read().is_none());
    assert!(!is_authenticated(&session));
}

// =============================================================
// password reset
// =============================================================

#[tokio::test]
async fn initiate_reset_returns_backend_outcome() {
    let transport = MockTransport::respond(Ok(json!({
        "success": true,
        "message": "e-mail enviado"
    })));

    let outcome = initiate_password_reset_with(&transport, "a@b.com")
        .await
        .expect("initiate");

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("e-mail enviado"));
    assert_eq!(transport.calls()[0].0, "/auth/reset-password");
    assert_eq!(transport.calls()[0].1["email"], "a@b.com");
}

#[tokio::test]
async fn initiate_reset_prefers_the_server_message() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 404,
        message: "conta não encontrada".to_owned(),
    }));

    let err = initiate_password_reset_with(&transport, "a@b.com")
        .await
        .expect_err("must fail");

    assert_eq!(err.to_string(), "conta não encontrada");
}

#[tokio::test]
async fn initiate_reset_falls_back_when_server_message_is_empty() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 500,
        message: String::new(),
    }));

    let err = initiate_password_reset_with(&transport, "a@b.com")
        .await
        .expect_err("must fail");

    assert_eq!(err.to_string(), "Erro ao solicitar redefinição de senha");
}

#[tokio::test]
async fn validate_reset_token_returns_email_for_valid_tokens() {
    let transport = MockTransport::respond(Ok(json!({
        "success": true,
        "email": "a@b.com"
    })));

    let check = validate_reset_token_with(&transport, "reset-1")
        .await
        .expect("validate");

    assert!(check.success);
    assert_eq!(check.email.as_deref(), Some("a@b.com"));
    assert_eq!(transport.calls()[0].0, "/auth/check-code-reset-password");
    assert_eq!(transport.calls()[0].1["token"], "reset-1");
}

#[tokio::test]
async fn validate_reset_token_uses_its_own_fallback() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 410,
        message: String::new(),
    }));

    let err = validate_reset_token_with(&transport, "reset-1")
        .await
        .expect_err("must fail");

    assert_eq!(err.to_string(), "Token inválido ou expirado");
}

#[tokio::test]
async fn complete_reset_posts_the_camel_case_payload() {
    let transport = MockTransport::respond(Ok(json!({
        "success": true,
        "email": "a@b.com"
    })));

    let request = PasswordResetRequest {
        token: "reset-1".to_owned(),
        password: "newsecret1".to_owned(),
        password_confirmation: "newsecret1".to_owned(),
    };
    let check = complete_password_reset_with(&transport, &request)
        .await
        .expect("complete");

    assert!(check.success);
    let calls = transport.calls();
    assert_eq!(calls[0].0, "/auth/change-password");
    assert_eq!(calls[0].1["passwordConfirmation"], "newsecret1");
}

#[tokio::test]
async fn complete_reset_falls_back_when_server_message_is_empty() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 500,
        message: String::new(),
    }));

    let request = PasswordResetRequest {
        token: "reset-1".to_owned(),
        password: "newsecret1".to_owned(),
        password_confirmation: "newsecret1".to_owned(),
    };
    let err = complete_password_reset_with(&transport, &request)
        .await
        .expect_err("must fail");

    assert_eq!(err.to_string(), "Erro ao redefinir senha");
}

// =============================================================
// token extraction
// =============================================================

#[test]
fn token_from_href_finds_the_token_parameter() {
    let href = "http://localhost:5173/alterar-senha?token=abc123";
    assert_eq!(token_from_href(href).as_deref(), Some("abc123"));
}

#[test]
fn token_from_href_ignores_other_parameters() {
    let href = "http://localhost:5173/alterar-senha?utm=x&token=abc123&lang=pt";
    assert_eq!(token_from_href(href).as_deref(), Some("abc123"));
}

#[test]
fn token_from_href_is_absent_without_the_parameter() {
    assert!(token_from_href("http://localhost:5173/alterar-senha").is_none());
}

#[test]
fn token_from_href_is_absent_for_empty_values() {
    assert!(token_from_href("http://localhost:5173/alterar-senha?token=").is_none());
}

#[test]
fn token_from_href_is_absent_for_unparseable_urls() {
    assert!(token_from_href("not a url").is_none());
}

#[test]
fn extract_token_prefers_the_given_location() {
    let href = "http://localhost:5173/alterar-senha?token=abc123";
    assert_eq!(
        extract_token_from_location(Some(href)).as_deref(),
        Some("abc123")
    );
}
