use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
struct SumBody {
    result: f64,
}

/// Query operand as a number; missing or non-numeric values count as zero
pub fn operand(params: &HashMap<String, String>, key: &str) -> f64 {
    params
        .get(key)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

async fn add(Query(params): Query<HashMap<String, String>>) -> Json<SumBody> {
    Json(SumBody {
        result: operand(&params, "a") + operand(&params, "b"),
    })
}

async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let status = params.get("status").map(String::as_str);
    let items = state.backend.fetch_items(status, &headers).await?;
    info!(status = status.unwrap_or("*"), "items fetched");
    Ok(Json(items))
}

async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    state
        .backend
        .forward(method, path_and_query, &headers, body)
        .await
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");

    Router::new()
        .route("/api/add", get(add))
        .route("/api/items", get(list_items).fallback(forward))
        .route("/api/*rest", any(forward))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .with_state(state)
}

pub fn build_router_with_layers(state: AppState) -> Router {
    let timeout = state.config.request_timeout();
    build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn operand_defaults_to_zero() {
        let p = params(&[("a", "2.5"), ("b", "abc")]);
        assert_eq!(operand(&p, "a"), 2.5);
        assert_eq!(operand(&p, "b"), 0.0);
        assert_eq!(operand(&p, "c"), 0.0);
        assert_eq!(operand(&params(&[("a", "NaN")]), "a"), 0.0);
    }
}
