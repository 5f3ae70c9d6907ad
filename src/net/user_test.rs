use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::net::types::{AccountProfile, AccountStatus};

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

fn draft() -> SignupData {
    SignupData {
        profile: AccountProfile::Influencer,
        username: "bob".to_owned(),
        first_name: "Bob".to_owned(),
        last_name: "Silva".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret123".to_owned(),
    }
}

// =============================================================
// availability probes
// =============================================================

#[tokio::test]
async fn check_username_sends_the_query_parameter() {
    let transport = MockTransport::respond(Ok(json!({ "exists": true })));

    let check = check_username_with(&transport, "bob").await.expect("check");

    assert!(check.exists);
    let calls = transport.calls();
    assert_eq!(calls[0].0, "/user/check-username");
    assert_eq!(calls[0].1["username"], "bob");
}

#[tokio::test]
async fn check_email_sends_the_query_parameter() {
    let transport = MockTransport::respond(Ok(json!({ "exists": false })));

    let check = check_email_with(&transport, "bob@example.com")
        .await
        .expect("check");

    assert!(!check.exists);
    let calls = transport.calls();
    assert_eq!(calls[0].0, "/user/check-email");
    assert_eq!(calls[0].1["email"], "bob@example.com");
}

#[tokio::test]
async fn availability_failures_propagate_untranslated() {
    let transport = MockTransport::respond(Err(ApiError::transport("refused")));

    let err = check_username_with(&transport, "bob")
        .await
        .expect_err("must fail");

    assert!(matches!(err, ApiError::Transport { .. }));
}

// =============================================================
// signup
// =============================================================

#[tokio::test]
async fn signup_decodes_the_account_summary() {
    let transport = MockTransport::respond(Ok(json!({
        "id": "42",
        "owner": true,
        "status": "INACTIVE",
        "firstName": "Bob",
        "lastName": "Silva",
        "email": "bob@example.com",
        "profile": "INFLUENCER",
        "username": "bob"
    })));

    let account = signup_with(&transport, &draft()).await.expect("signup");

    assert_eq!(account.id, "42");
    assert_eq!(account.status, AccountStatus::Inactive);
    assert_eq!(account.profile, AccountProfile::Influencer);
}

#[tokio::test]
async fn signup_posts_the_camel_case_draft() {
    let transport = MockTransport::respond(Ok(json!({
        "id": "42",
        "owner": true,
        "status": "ACTIVE",
        "firstName": "Bob",
        "lastName": "Silva",
        "email": "bob@example.com",
        "profile": "INFLUENCER",
        "username": "bob"
    })));

    signup_with(&transport, &draft()).await.expect("signup");

    let calls = transport.calls();
    assert_eq!(calls[0].0, "/user");
    assert_eq!(calls[0].1["profile"], "INFLUENCER");
    assert_eq!(calls[0].1["firstName"], "Bob");
    assert_eq!(calls[0].1["lastName"], "Silva");
}

#[tokio::test]
async fn signup_surfaces_the_server_message() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 409,
        message: "e-mail já cadastrado".to_owned(),
    }));

    let err = signup_with(&transport, &draft()).await.expect_err("must fail");

    assert_eq!(err.to_string(), "e-mail já cadastrado");
}

#[tokio::test]
async fn signup_falls_back_when_server_message_is_empty() {
    let transport = MockTransport::respond(Err(ApiError::Server {
        status: 500,
        message: String::new(),
    }));

    let err = signup_with(&transport, &draft()).await.expect_err("must fail");

    assert_eq!(err.to_string(), "Erro ao realizar cadastro");
}
