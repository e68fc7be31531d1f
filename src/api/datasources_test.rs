use super::*;
use crate::context::test_helpers::{MockTransport, test_console};
use crate::net::types::Method;
use crate::routes::HOME_PATH;
use serde_json::json;

fn listing(items: Value) -> MockTransport {
    MockTransport::replying(200, json!({ "code": 0, "message": "success", "data": { "items": items } }))
}

// =============================================================
// Endpoint mapping
// =============================================================

#[tokio::test]
async fn list_sends_bearer_to_datasources() {
    let console = test_console(Some("abc"), MockTransport::default());
    list_data_sources(&console.client, None).await.unwrap();

    let req = console.transport.last_request().unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/datasources");
    assert_eq!(req.header("authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn list_passes_params() {
    let console = test_console(Some("abc"), MockTransport::default());
    list_data_sources(&console.client, Some(&json!({ "type": "loki" }))).await.unwrap();

    let req = console.transport.last_request().unwrap();
    assert_eq!(req.query, vec![("type".to_owned(), "loki".to_owned())]);
}

#[tokio::test]
async fn create_returns_raw_body_and_leaves_state_alone() {
    let body = json!({ "code": 0, "message": "success", "data": { "id": 9, "name": "x" } });
    let console = test_console(Some("abc"), MockTransport::replying(200, body.clone()));
    console.ctx.router.navigate("/datasources/new");

    let resp = create_data_source(&console.client, json!({ "name": "x" })).await.unwrap();

    assert_eq!(resp.body, body);
    let req = console.transport.last_request().unwrap();
    assert_eq!((req.method, req.path.as_str()), (Method::Post, "/datasources"));
    assert_eq!(req.body, Some(json!({ "name": "x" })));
    assert_eq!(console.ctx.session.token().as_deref(), Some("abc"));
    assert_eq!(console.ctx.router.current(), "/datasources/new");
    assert_ne!(console.ctx.router.current(), HOME_PATH);
}

#[tokio::test]
async fn update_delete_and_test_paths() {
    let console = test_console(Some("abc"), MockTransport::default());
    update_data_source(&console.client, "3", json!({ "name": "y" })).await.unwrap();
    delete_data_source(&console.client, "3").await.unwrap();
    test_connection(&console.client, "3").await.unwrap();
    test_connection_payload(&console.client, json!({ "type": "loki", "endpoint": "http://loki:3100" }))
        .await
        .unwrap();

    let got: Vec<_> = console
        .transport
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        got,
        vec![
            (Method::Put, "/datasources/3".to_owned()),
            (Method::Delete, "/datasources/3".to_owned()),
            (Method::Post, "/datasources/3/test".to_owned()),
            (Method::Post, "/datasources/test".to_owned()),
        ]
    );
}

// =============================================================
// get_data_source_by_id
// =============================================================

#[tokio::test]
async fn by_id_matches_numeric_id_as_text() {
    let console = test_console(Some("abc"), listing(json!([{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }])));
    let found = get_data_source_by_id(&console.client, "2").await.unwrap();

    assert_eq!(found, Some(json!({ "id": 2, "name": "b" })));
    let req = console.transport.last_request().unwrap();
    assert_eq!(req.path, "/datasources");
    assert!(req.query.is_empty());
}

#[tokio::test]
async fn by_id_matches_string_id() {
    let console = test_console(Some("abc"), listing(json!([{ "id": "vl_1", "name": "victoria" }])));
    let found = get_data_source_by_id(&console.client, "vl_1").await.unwrap();
    assert_eq!(found.and_then(|v| v["name"].as_str().map(ToOwned::to_owned)), Some("victoria".into()));
}

#[tokio::test]
async fn by_id_returns_first_match() {
    let console = test_console(Some("abc"), listing(json!([{ "id": 5, "n": 1 }, { "id": "5", "n": 2 }])));
    let found = get_data_source_by_id(&console.client, "5").await.unwrap();
    assert_eq!(found, Some(json!({ "id": 5, "n": 1 })));
}

#[tokio::test]
async fn by_id_absent_is_none() {
    let console = test_console(Some("abc"), listing(json!([{ "id": 1 }])));
    assert_eq!(get_data_source_by_id(&console.client, "7").await.unwrap(), None);
}

#[tokio::test]
async fn by_id_empty_listing_is_none() {
    let console = test_console(Some("abc"), listing(json!([])));
    assert_eq!(get_data_source_by_id(&console.client, "1").await.unwrap(), None);
}

#[tokio::test]
async fn by_id_missing_items_is_none() {
    let console = test_console(Some("abc"), MockTransport::replying(200, json!({ "code": 0 })));
    assert_eq!(get_data_source_by_id(&console.client, "1").await.unwrap(), None);
}

#[tokio::test]
async fn by_id_listing_error_propagates() {
    let console = test_console(Some("abc"), MockTransport::replying(500, json!({ "message": "db down" })));
    let err = get_data_source_by_id(&console.client, "1").await.unwrap_err();
    assert_eq!(err.message(), "db down");
}

#[test]
fn find_by_id_ignores_items_without_id() {
    let data = json!({ "items": [{ "name": "no id" }, { "id": null }, { "id": [1] }] });
    assert!(find_by_id(&data, "null").is_none());
    assert!(find_by_id(&data, "1").is_none());
}

#[test]
fn find_by_id_matches_bool_id_as_text() {
    let data = json!({ "items": [{ "id": false, "name": "off" }, { "id": true, "name": "on" }] });
    assert_eq!(find_by_id(&data, "true"), Some(&json!({ "id": true, "name": "on" })));
    assert_eq!(find_by_id(&data, "false").map(|item| &item["name"]), Some(&json!("off")));
}
