use super::*;
use crate::context::test_helpers::{MockTransport, test_console};
use crate::net::types::Method;
use crate::routes::LOGIN_PATH;
use crate::util::storage::Storage;

#[tokio::test]
async fn query_flattens_params() {
    let console = test_console(Some("abc"), MockTransport::default());
    let params = json!({ "datasource_id": 1, "query": "{app=\"api\"}", "limit": 100 });
    query_logs(&console.client, Some(&params)).await.unwrap();

    let req = console.transport.last_request().unwrap();
    assert_eq!((req.method, req.path.as_str()), (Method::Get, "/logs/query"));
    let mut query = req.query;
    query.sort();
    assert_eq!(
        query,
        vec![
            ("datasource_id".to_owned(), "1".to_owned()),
            ("limit".to_owned(), "100".to_owned()),
            ("query".to_owned(), "{app=\"api\"}".to_owned()),
        ]
    );
}

#[tokio::test]
async fn forbidden_query_ends_session() {
    let console = test_console(Some("abc"), MockTransport::replying(403, json!({ "code": 403, "message": "forbidden" })));
    console.ctx.router.navigate("/logs");

    let err = query_logs(&console.client, None).await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.message(), "forbidden");
    assert_eq!(console.ctx.session.token(), None);
    assert_eq!(console.storage.get("token").unwrap(), None);
    assert_eq!(console.ctx.router.current(), LOGIN_PATH);
    assert_eq!(console.notifier.messages().len(), 1);
}

#[tokio::test]
async fn read_endpoints() {
    let console = test_console(Some("abc"), MockTransport::default());
    suggestions(&console.client, None).await.unwrap();
    label_values(&console.client, Some(&json!({ "label": "app" }))).await.unwrap();
    inspect(&console.client, None).await.unwrap();
    history(&console.client, Some(&json!({ "favorite": true }))).await.unwrap();

    let reqs = console.transport.requests();
    let paths: Vec<_> = reqs.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/logs/suggestions", "/logs/label-values", "/logs/inspect", "/logs/history"]);
    assert!(reqs.iter().all(|r| r.method == Method::Get));
    assert_eq!(reqs[1].query, vec![("label".to_owned(), "app".to_owned())]);
    assert_eq!(reqs[3].query, vec![("favorite".to_owned(), "true".to_owned())]);
}

#[tokio::test]
async fn history_mutations() {
    let console = test_console(Some("abc"), MockTransport::default());
    toggle_favorite(&console.client, "12").await.unwrap();
    update_note(&console.client, "12", "slow query").await.unwrap();
    delete_history(&console.client, "12").await.unwrap();

    let reqs = console.transport.requests();
    assert_eq!((reqs[0].method, reqs[0].path.as_str()), (Method::Post, "/logs/history/12/favorite"));
    assert_eq!((reqs[1].method, reqs[1].path.as_str()), (Method::Put, "/logs/history/12/note"));
    assert_eq!(reqs[1].body, Some(json!({ "note": "slow query" })));
    assert_eq!((reqs[2].method, reqs[2].path.as_str()), (Method::Delete, "/logs/history/12"));
}
