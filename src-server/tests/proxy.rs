use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use min_now_server::{build_router, AppState, ServerConfig};

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn header(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

async fn stub_list(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
    Json(json!([{
        "id": "1",
        "name": "Jacket",
        "itemType": "Clothing",
        "status": params.get("status"),
        "cookie": header(&headers, "cookie"),
    }]))
}

async fn stub_update(Path(id): Path<String>, headers: HeaderMap, body: String) -> impl IntoResponse {
    (
        [("set-cookie", "csrftoken=rotated; Path=/")],
        Json(json!({
            "id": id,
            "csrf": header(&headers, "x-csrftoken"),
            "content_type": header(&headers, "content-type"),
            "body": body,
        })),
    )
}

fn stub_backend() -> Router {
    Router::new()
        .route("/api/items", get(stub_list))
        .route("/api/items/:id", axum::routing::put(stub_update))
        .route("/api/checkups", get(|| async { StatusCode::FORBIDDEN }))
}

fn failing_backend() -> Router {
    Router::new().route(
        "/api/items",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    )
}

fn static_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("min-now-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>min-now</html>").unwrap();
    dir
}

async fn spawn_server(backend: &str) -> String {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_base_url: backend.to_string(),
        static_dir: static_dir(),
        request_timeout_seconds: 5,
    };
    let state = AppState::new(config).unwrap();
    let addr = spawn(build_router(state)).await;
    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Address nothing is listening on
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn add_is_computed_locally() {
    let server = spawn_server(&closed_port().await).await;

    let body: Value = client()
        .get(format!("{}/api/add?a=2&b=3", server))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "result": 5.0 }));

    let body: Value = client()
        .get(format!("{}/api/add?a=2&b=oops", server))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["result"], json!(2.0));
}

#[tokio::test]
async fn items_are_forwarded_with_status_and_cookie() {
    let backend = spawn(stub_backend()).await;
    let server = spawn_server(&format!("http://{}", backend)).await;

    let response = client()
        .get(format!("{}/api/items?status=Give", server))
        .header("cookie", "sessionid=abc")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let items: Value = response.json().await.unwrap();
    assert_eq!(items[0]["name"], "Jacket");
    assert_eq!(items[0]["status"], "Give");
    assert_eq!(items[0]["cookie"], "sessionid=abc");
}

#[tokio::test]
async fn backend_failure_maps_to_500() {
    let backend = spawn(failing_backend()).await;
    let server = spawn_server(&format!("http://{}", backend)).await;

    let response = client()
        .get(format!("{}/api/items?status=Keep", server))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to fetch items" }));
}

#[tokio::test]
async fn unreachable_backend_maps_to_500_for_items() {
    let server = spawn_server(&closed_port().await).await;

    let response = client()
        .get(format!("{}/api/items?status=Keep", server))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn mutations_pass_through_with_csrf_header() {
    let backend = spawn(stub_backend()).await;
    let server = spawn_server(&format!("http://{}", backend)).await;

    let response = client()
        .put(format!("{}/api/items/42", server))
        .header("x-csrftoken", "token-1")
        .header("content-type", "application/json")
        .body(r#"{"status":"Give"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("set-cookie").unwrap(),
        "csrftoken=rotated; Path=/"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], "42");
    assert_eq!(body["csrf"], "token-1");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["body"], r#"{"status":"Give"}"#);
}

#[tokio::test]
async fn backend_status_is_relayed() {
    let backend = spawn(stub_backend()).await;
    let server = spawn_server(&format!("http://{}", backend)).await;

    let response = client()
        .get(format!("{}/api/checkups?type=keep", server))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);
}

#[tokio::test]
async fn unreachable_backend_maps_to_502_for_passthrough() {
    let server = spawn_server(&closed_port().await).await;

    let response = client()
        .delete(format!("{}/api/items/1", server))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}

#[tokio::test]
async fn unknown_paths_serve_the_bundle_index() {
    let server = spawn_server(&closed_port().await).await;

    let response = client().get(format!("{}/keep", server)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "<html>min-now</html>");
}
