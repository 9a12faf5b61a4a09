use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use lichen_api::WorldClient;
use lichen_core::LichenError;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{}/graphql/getWorld", addr)
}

#[tokio::test]
async fn parses_full_record_and_sends_expected_request() {
    let seen: Arc<Mutex<Option<(HeaderMap, Value)>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();
    let router = Router::new().route(
        "/graphql/getWorld",
        post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
            *captured.lock().unwrap() = Some((headers, body));
            Json(json!({
                "data": {
                    "getWorld": {
                        "id": "abc123",
                        "name": "모험의 시작",
                        "tags": ["rpg", "adventure"],
                        "visitCount": 4210,
                        "todayVisitCount": 58,
                        "updatedAt": "2023-11-05T10:00:00Z",
                        "staffPicked": true,
                        "ranked": false,
                        "cheer": { "total": 77, "best": 12 },
                        "user": { "id": "u1", "nickname": "제작자" },
                        "primaryMapImage": { "thumbnail": "https://cdn.example/thumb.png" }
                    }
                }
            }))
        }),
    );
    let endpoint = serve(router).await;

    let client = WorldClient::with_endpoint(endpoint);
    let record = client
        .fetch_world("abc123", "tok-1")
        .await
        .expect("fetch ok")
        .expect("record present");

    assert_eq!(record.id, "abc123");
    assert_eq!(record.name.as_deref(), Some("모험의 시작"));
    assert_eq!(record.tags, vec!["rpg", "adventure"]);
    assert_eq!(record.visit_count, Some(4210));
    assert_eq!(record.staff_picked, Some(true));
    assert_eq!(record.ranked, Some(false));
    assert_eq!(record.cheer.expect("cheer").total, Some(77));
    assert_eq!(record.user.expect("user").nickname.as_deref(), Some("제작자"));
    assert_eq!(
        record.primary_map_image.expect("image").thumbnail.as_deref(),
        Some("https://cdn.example/thumb.png")
    );
    assert_eq!(
        record.updated_at.expect("updatedAt").to_rfc3339(),
        "2023-11-05T10:00:00+00:00"
    );

    let (headers, body) = seen.lock().unwrap().take().expect("request captured");
    assert_eq!(headers.get("csrf-token").unwrap(), "tok-1");
    assert_eq!(headers.get("x-client-type").unwrap(), "Client");
    assert_eq!(headers.get("apollo-require-preflight").unwrap(), "true");
    assert_eq!(body["operationName"], "getWorld");
    assert_eq!(body["variables"]["id"], "abc123");
    let query = body["query"].as_str().expect("query string");
    assert!(query.contains("getWorld(id: $id)"));
    assert!(query.contains("fragment WorldFields on World"));
}

#[tokio::test]
async fn missing_world_is_ok_none() {
    let router = Router::new().route(
        "/graphql/getWorld",
        post(|| async { Json(json!({ "data": { "getWorld": null } })) }),
    );
    let endpoint = serve(router).await;

    let result = WorldClient::with_endpoint(endpoint)
        .fetch_world("gone", "tok-1")
        .await
        .expect("fetch ok");
    assert!(result.is_none());
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let router = Router::new().route("/graphql/getWorld", post(|| async { StatusCode::FORBIDDEN }));
    let endpoint = serve(router).await;

    let err = WorldClient::with_endpoint(endpoint)
        .fetch_world("abc123", "stale-token")
        .await
        .unwrap_err();
    match err {
        LichenError::Api(msg) => assert!(msg.contains("403"), "unexpected message: {msg}"),
        other => panic!("expected api error, got {other}"),
    }
}

#[tokio::test]
async fn graphql_errors_are_an_api_error() {
    let router = Router::new().route(
        "/graphql/getWorld",
        post(|| async {
            Json(json!({
                "data": null,
                "errors": [{ "message": "world is not accessible" }]
            }))
        }),
    );
    let endpoint = serve(router).await;

    let err = WorldClient::with_endpoint(endpoint)
        .fetch_world("abc123", "tok-1")
        .await
        .unwrap_err();
    match err {
        LichenError::Api(msg) => assert!(msg.contains("world is not accessible")),
        other => panic!("expected api error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_fetch_failure() {
    let router = Router::new().route("/graphql/getWorld", post(|| async { "surprise, not json" }));
    let endpoint = serve(router).await;

    let err = WorldClient::with_endpoint(endpoint)
        .fetch_world("abc123", "tok-1")
        .await
        .unwrap_err();
    assert!(matches!(err, LichenError::Network(_)));
}

#[tokio::test]
async fn response_without_data_is_an_api_error() {
    let router = Router::new().route("/graphql/getWorld", post(|| async { Json(json!({})) }));
    let endpoint = serve(router).await;

    let err = WorldClient::with_endpoint(endpoint)
        .fetch_world("abc123", "tok-1")
        .await
        .unwrap_err();
    assert!(matches!(err, LichenError::Api(_)));
}
