//! Integration tests for account and transaction mutations

use bt_client::{ApiClient, ClientError, logout};
use bt_config::ApiConfig;
use bt_core::{
    KeyValueStore, MemoryStore, NavigationIntent, RESET_EMAIL_KEY, SESSION_KEY, Session,
    TransactionDraft, TransactionType, resolve_identity,
};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_partial_json, method, path},
};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

// =============================================================================
// Login / register
// =============================================================================

#[tokio::test]
async fn test_login_persists_normalized_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Loginuser"))
        .and(body_json(json!({ "email": "jane@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "id": 42,
            "name": "Jane"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let session = client
        .login(&store, " jane@example.com ", "secret1")
        .await
        .unwrap();

    assert_eq!(session.user_id, "42");
    assert_eq!(session.display_name, "Jane");
    assert_eq!(resolve_identity(&store).unwrap(), session);
}

#[tokio::test]
async fn test_login_accepts_nested_user_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Loginuser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "user_id": "u-9", "username": "sam", "email": "sam@example.com" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let session = client.login(&store, "sam@example.com", "secret1").await.unwrap();

    assert_eq!(session.user_id, "u-9");
    assert_eq!(session.display_name, "sam");
}

#[tokio::test]
async fn test_login_rejected_surfaces_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Loginuser"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid email or password"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let err = client
        .login(&store, "jane@example.com", "wrongpass")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Fetch { .. }));
    assert_eq!(err.user_message(), "Invalid email or password");
    assert!(!store.contains(SESSION_KEY));
}

#[tokio::test]
async fn test_login_response_without_id_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Loginuser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let err = client
        .login(&store, "jane@example.com", "secret1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Fetch { .. }));
    assert!(!store.contains(SESSION_KEY));
}

#[tokio::test]
async fn test_invalid_login_form_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let err = client.login(&store, "not-an-email", "secret1").await.unwrap_err();

    assert!(matches!(err, ClientError::Validation { .. }));
    assert_eq!(err.user_message(), "Please enter a valid email address");
}

#[tokio::test]
async fn test_register_posts_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Registeruser"))
        .and(body_json(json!({
            "username": "jane",
            "email": "jane@example.com",
            "password": "secret1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client
        .register("jane", "jane@example.com", "secret1", "secret1")
        .await
        .unwrap();
}

// =============================================================================
// Password reset
// =============================================================================

#[tokio::test]
async fn test_password_reset_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/RequestReset"))
        .and(body_json(json!({ "email": "jane@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "sent" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ResetCode"))
        .and(body_json(json!({ "email": "jane@example.com", "code": "123456" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ResetPassword"))
        .and(body_json(json!({ "email": "jane@example.com", "newPassword": "newpass1" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    client
        .request_password_reset(&store, "jane@example.com")
        .await
        .unwrap();
    assert_eq!(
        store.get(RESET_EMAIL_KEY).unwrap().as_deref(),
        Some("jane@example.com")
    );

    client.verify_reset_code(&store, "123456").await.unwrap();
    let intent = client
        .reset_password(&store, "newpass1", "newpass1")
        .await
        .unwrap();

    assert_eq!(intent, NavigationIntent::RedirectToLogin);
    assert!(!store.contains(RESET_EMAIL_KEY));
}

#[tokio::test]
async fn test_verify_code_without_reset_email_redirects_to_reset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::new();

    let err = client.verify_reset_code(&store, "123456").await.unwrap_err();

    assert_eq!(
        err.navigation_intent(),
        Some(NavigationIntent::RedirectToPasswordReset)
    );
}

#[tokio::test]
async fn test_invalid_reset_code_keeps_reset_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ResetCode"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid or expired code"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::with_entry(RESET_EMAIL_KEY, "jane@example.com");

    let err = client.verify_reset_code(&store, "0000").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid or expired code");
    assert!(store.contains(RESET_EMAIL_KEY));
}

#[tokio::test]
async fn test_resend_reset_code_uses_remembered_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/RequestReset"))
        .and(body_json(json!({ "email": "jane@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let store = MemoryStore::with_entry(RESET_EMAIL_KEY, "jane@example.com");

    client.resend_reset_code(&store).await.unwrap();
}

// =============================================================================
// Transactions / logout
// =============================================================================

#[tokio::test]
async fn test_create_expense_posts_to_expense_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/expense"))
        .and(body_partial_json(json!({
            "user_id": "42",
            "amount": 12.5,
            "description": "Lunch",
            "category": "Food"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 77 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let session = Session {
        user_id: String::from("42"),
        email: None,
        display_name: String::new(),
    };
    let draft = TransactionDraft::new(TransactionType::Expense, "12.50", "Lunch", "Food").unwrap();

    let intent = client.create_transaction(&session, &draft).await.unwrap();

    assert_eq!(intent, NavigationIntent::GoBack);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let store = MemoryStore::with_entry(SESSION_KEY, r#"{"user_id":"1"}"#);

    let intent = logout(&store).unwrap();

    assert_eq!(intent, NavigationIntent::RedirectToLogin);
    assert!(!store.contains(SESSION_KEY));
}
