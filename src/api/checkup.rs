//! Checkup Fetchers
//!
//! Checkup configuration against `/api/checkups`.

use leptos::logging::error;
use reqwest::Method;
use serde::Serialize;

use super::{fetch_with_csrf, read_json, HttpError};
use crate::models::{Checkup, CheckupType};

pub const MIN_INTERVAL_MONTHS: u32 = 1;
pub const MAX_INTERVAL_MONTHS: u32 = 12;

/// Clamp a requested interval into the supported range
pub fn clamp_interval(months: i64) -> u32 {
    months.clamp(MIN_INTERVAL_MONTHS as i64, MAX_INTERVAL_MONTHS as i64) as u32
}

/// Body of `POST /api/checkups`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewCheckup {
    pub checkup_type: CheckupType,
    pub interval_months: u32,
}

impl NewCheckup {
    pub fn new(checkup_type: CheckupType, interval_months: u32) -> Self {
        Self {
            checkup_type,
            interval_months: clamp_interval(interval_months as i64),
        }
    }
}

#[derive(Serialize)]
struct IntervalBody {
    interval_months: u32,
}

async fn checkup_request(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<Checkup, HttpError> {
    let response = fetch_with_csrf(method, path, body).await?;
    read_json::<Checkup>(response).await
}

pub async fn fetch_checkup(checkup_type: CheckupType) -> Result<Vec<Checkup>, String> {
    let path = format!("/api/checkups?type={}", checkup_type.as_str());
    let result = async {
        let response = fetch_with_csrf(Method::GET, &path, None).await?;
        read_json::<Vec<Checkup>>(response).await
    }
    .await;

    result.map_err(|e| {
        error!("Error fetching checkup: {}", e);
        "Failed to fetch checkup".to_string()
    })
}

pub async fn create_checkup(data: &NewCheckup) -> Result<Checkup, String> {
    let data = NewCheckup::new(data.checkup_type, data.interval_months);
    let body = serde_json::to_value(data).map_err(|e| e.to_string())?;
    checkup_request(Method::POST, "/api/checkups", Some(body))
        .await
        .map_err(|e| {
            error!("Error creating checkup: {}", e);
            "Failed to create checkup".to_string()
        })
}

pub async fn complete_checkup(id: i64) -> Result<Checkup, String> {
    let path = format!("/api/checkups/{}/complete", id);
    checkup_request(Method::POST, &path, None).await.map_err(|e| {
        error!("Error completing checkup: {}", e);
        "Failed to complete checkup".to_string()
    })
}

pub async fn update_checkup_interval(id: i64, months: u32) -> Result<Checkup, String> {
    let path = format!("/api/checkups/{}/interval", id);
    let body = IntervalBody {
        interval_months: clamp_interval(months as i64),
    };
    let body = serde_json::to_value(body).map_err(|e| e.to_string())?;
    checkup_request(Method::PUT, &path, Some(body)).await.map_err(|e| {
        error!("Error updating checkup interval: {}", e);
        "Failed to update checkup interval".to_string()
    })
}
