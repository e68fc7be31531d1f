use super::*;
use crate::context::test_helpers::{MockTransport, test_console};
use crate::net::types::Method;
use crate::util::storage::Storage;
use serde_json::json;

#[tokio::test]
async fn login_posts_credentials() {
    let console = test_console(None, MockTransport::default());
    let payload = json!({ "username": "admin", "password": "admin123" });
    login(&console.client, payload.clone()).await.unwrap();

    let req = console.transport.last_request().unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(payload));
    assert!(req.header("authorization").is_none());
}

#[tokio::test]
async fn logout_and_profile_paths() {
    let console = test_console(Some("abc"), MockTransport::default());
    logout(&console.client).await.unwrap();
    profile(&console.client).await.unwrap();

    let reqs = console.transport.requests();
    assert_eq!((reqs[0].method, reqs[0].path.as_str()), (Method::Post, "/auth/logout"));
    assert_eq!((reqs[1].method, reqs[1].path.as_str()), (Method::Get, "/auth/profile"));
}

#[tokio::test]
async fn sign_in_stores_token() {
    let transport = MockTransport::replying(200, json!({ "code": 0, "message": "success", "data": { "token": "jwt-1" } }));
    let console = test_console(None, transport);
    let resp = sign_in(&console.client, &console.ctx.session, json!({ "username": "a", "password": "b" }))
        .await
        .unwrap();

    assert_eq!(resp.data(), &json!({ "token": "jwt-1" }));
    assert_eq!(console.ctx.session.token().as_deref(), Some("jwt-1"));
    assert_eq!(console.storage.get("token").unwrap().as_deref(), Some("jwt-1"));
}

#[tokio::test]
async fn sign_in_without_token_is_missing_field() {
    let console = test_console(None, MockTransport::replying(200, json!({ "code": 0, "data": {} })));
    let err = sign_in(&console.client, &console.ctx.session, json!({})).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingField("token")));
    assert!(!console.ctx.session.is_authenticated());
}

#[tokio::test]
async fn sign_in_rejected_credentials_propagate() {
    let console = test_console(None, MockTransport::replying(401, json!({ "code": 401, "message": "invalid credentials" })));
    let err = sign_in(&console.client, &console.ctx.session, json!({})).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "invalid credentials");
}

#[tokio::test]
async fn load_profile_sets_user() {
    let transport = MockTransport::replying(200, json!({ "code": 0, "data": { "name": "admin" } }));
    let console = test_console(Some("abc"), transport);
    load_profile(&console.client, &console.ctx.session).await.unwrap();

    assert_eq!(console.ctx.session.user(), Some(json!({ "name": "admin" })));
}

#[tokio::test]
async fn load_profile_without_data_clears_user() {
    let console = test_console(Some("abc"), MockTransport::default());
    console.ctx.session.set_user(Some(json!({ "name": "old" })));
    load_profile(&console.client, &console.ctx.session).await.unwrap();

    assert_eq!(console.ctx.session.user(), None);
}

#[tokio::test]
async fn sign_out_clears_session_on_success() {
    let console = test_console(Some("abc"), MockTransport::default());
    sign_out(&console.client, &console.ctx.session).await.unwrap();

    assert!(!console.ctx.session.is_authenticated());
    assert_eq!(console.storage.get("token").unwrap(), None);
}

#[tokio::test]
async fn sign_out_clears_session_even_when_call_fails() {
    let transport = MockTransport::new(vec![Err(ApiError::Transport("offline".into()))]);
    let console = test_console(Some("abc"), transport);
    let err = sign_out(&console.client, &console.ctx.session).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!console.ctx.session.is_authenticated());
}
