//! Client for the external backend.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method};
use axum::response::Response;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::AppError;

/// Request headers relayed to the backend
const FORWARDED_REQUEST_HEADERS: [&str; 4] = ["content-type", "accept", "cookie", "x-csrftoken"];

#[derive(Clone)]
pub struct Backend {
    base_url: String,
    http: Client,
}

impl Backend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query.trim_start_matches('/'))
    }

    /// `GET /api/items`, optionally filtered by status
    pub async fn fetch_items(
        &self,
        status: Option<&str>,
        headers: &HeaderMap,
    ) -> Result<serde_json::Value, AppError> {
        let mut request = self
            .http
            .get(self.url("/api/items"))
            .header(CONTENT_TYPE, "application/json");
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }
        if let Some(cookie) = headers.get(COOKIE) {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "items request failed");
            AppError::ItemsUnavailable
        })?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "backend rejected items request");
            return Err(AppError::ItemsUnavailable);
        }
        response.json().await.map_err(|e| {
            warn!(error = %e, "items response was not JSON");
            AppError::ItemsUnavailable
        })
    }

    /// Relay a request verbatim and hand back the backend's answer
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let mut request = self.http.request(method.clone(), self.url(path_and_query));
        for name in FORWARDED_REQUEST_HEADERS {
            for value in headers.get_all(name) {
                request = request.header(HeaderName::from_static(name), value);
            }
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let upstream = request.send().await.map_err(|e| {
            warn!(error = %e, %method, path = path_and_query, "forward failed");
            AppError::Upstream(e.to_string())
        })?;
        debug!(status = upstream.status().as_u16(), %method, path = path_and_query, "forwarded");

        let mut response = Response::builder().status(upstream.status());
        for name in [CONTENT_TYPE, SET_COOKIE] {
            for value in upstream.headers().get_all(&name) {
                response = response.header(&name, value);
            }
        }
        let bytes = upstream
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        response
            .body(Body::from(bytes))
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let backend = Backend::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(backend.url("/api/items?status=Keep"), "http://localhost:8000/api/items?status=Keep");
        assert_eq!(backend.url("api/csrf-token"), "http://localhost:8000/api/csrf-token");
    }
}
