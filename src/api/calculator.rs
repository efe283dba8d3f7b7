//! Local Addition Route
//!
//! `GET /api/add` is answered by `min-now-server` itself, never by the backend.

use leptos::logging::error;
use serde::Deserialize;

use super::{client, read_json, send};
use crate::config;

#[derive(Deserialize)]
struct SumResponse {
    result: f64,
}

pub async fn add_numbers(a: f64, b: f64) -> Result<f64, String> {
    let request = client()
        .get(config::local_url("/api/add"))
        .query(&[("a", a), ("b", b)]);
    let result = async { read_json::<SumResponse>(send(request).await?).await }.await;

    match result {
        Ok(body) => Ok(body.result),
        Err(e) => {
            error!("Error adding numbers: {}", e);
            Err("Failed to add numbers".to_string())
        }
    }
}
