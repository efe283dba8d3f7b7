//! Backend API Wrappers
//!
//! HTTP helper with CSRF handling, plus typed fetchers organized by domain.
//! Fetchers never propagate `HttpError`: they log it and hand back a short
//! user-level message instead.

mod calculator;
mod checkup;
mod csrf;
mod error;
mod item;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config;

// Re-export all public items
pub use calculator::*;
pub use checkup::*;
pub use csrf::{fetch_csrf_token, prime_csrf_token};
pub use error::HttpError;
pub use item::*;
pub(crate) use item::retain_status;

/// Header Django reads the anti-forgery token from
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Characters left unescaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

thread_local! {
    static CLIENT: reqwest::Client = reqwest::Client::new();
}

fn client() -> reqwest::Client {
    CLIENT.with(Clone::clone)
}

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

// Native builds only run tests; there is no cookie jar to include.
#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

fn is_mutating(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Send a request with credentials, failing on any non-2xx status
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, HttpError> {
    let response = with_credentials(request)
        .send()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status(status.as_u16()));
    }
    Ok(response)
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::Decode(e.to_string()))
}

/// Issue a backend request with the shared headers and the CSRF token.
///
/// Mutating methods wait for the token to be resolved first; reads attach
/// whatever token is already known.
pub async fn fetch_with_csrf(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<Response, HttpError> {
    let token = csrf::token_for(&method).await?;

    let mut request = client()
        .request(method, config::api_url(path))
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .header(CSRF_HEADER, token.unwrap_or_default());
    if let Some(body) = body {
        request = request.json(&body);
    }
    send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(
            encode_segment("0d3c6a8e-8a51-4a43-9d7d-2f2a3f0c9f11"),
            "0d3c6a8e-8a51-4a43-9d7d-2f2a3f0c9f11"
        );
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_mutating_methods() {
        assert!(!is_mutating(&Method::GET));
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::DELETE));
    }
}
