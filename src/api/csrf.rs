//! CSRF Token Source
//!
//! The token comes from the `csrftoken` cookie when the backend shares our
//! origin, otherwise from `GET /api/csrf-token`. Resolved tokens are cached
//! for the lifetime of the page.

use std::cell::RefCell;
use std::future::Future;

use leptos::logging::{error, log};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use super::{client, is_mutating, read_json, send, HttpError};
use crate::config;

const COOKIE_NAME: &str = "csrftoken";

thread_local! {
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Extract the CSRF token from a `document.cookie` string
pub(crate) fn token_from_cookie(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(COOKIE_NAME)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn document_cookie() -> Option<String> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

fn cached() -> Option<String> {
    TOKEN.with(|token| token.borrow().clone())
}

fn remember(token: &str) {
    TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_string()));
}

fn known_token_from(cookie: Option<&str>, cached: Option<String>) -> Option<String> {
    cookie.and_then(token_from_cookie).or(cached)
}

/// Token available without a network round trip (cookie wins over cache)
fn known_token() -> Option<String> {
    known_token_from(document_cookie().as_deref(), cached())
}

/// Ask the backend to issue a token
pub async fn fetch_csrf_token() -> Result<String, HttpError> {
    let request = client()
        .get(config::api_url("/api/csrf-token"))
        .header(ACCEPT, "application/json");
    let body: TokenResponse = read_json(send(request).await?).await?;
    Ok(body.token)
}

/// Pick the token a request goes out with.
///
/// Reads use `known` as is and never wait on `fetch`. Mutating methods
/// need a token: `fetch` is awaited when none is known, and its error is
/// returned so the caller never sends the request.
pub(crate) async fn resolve_token<F, Fut>(
    method: &Method,
    known: Option<String>,
    fetch: F,
) -> Result<Option<String>, HttpError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, HttpError>>,
{
    if !is_mutating(method) {
        return Ok(known);
    }
    match known {
        Some(token) => Ok(Some(token)),
        None => fetch().await.map(Some),
    }
}

async fn fetch_and_remember() -> Result<String, HttpError> {
    let token = fetch_csrf_token().await?;
    log!("[CSRF] Token issued by backend");
    remember(&token);
    Ok(token)
}

/// Token for a request about to be sent with `method`
pub(crate) async fn token_for(method: &Method) -> Result<Option<String>, HttpError> {
    resolve_token(method, known_token(), fetch_and_remember).await
}

/// Resolve a token, fetching one if neither the cookie nor the cache has it
async fn ensure_token() -> Result<String, HttpError> {
    if let Some(token) = known_token() {
        remember(&token);
        return Ok(token);
    }
    fetch_and_remember().await
}

/// Fire-and-forget warm-up run when a view mounts
pub async fn prime_csrf_token() {
    if let Err(e) = ensure_token().await {
        error!("[CSRF] Failed to fetch token: {}", e);
    }
}
