//! Item Fetchers
//!
//! Item CRUD against `/api/items`.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use leptos::logging::{error, warn};
use reqwest::Method;
use serde::Serialize;

use super::{encode_segment, fetch_with_csrf, read_json, HttpError};
use crate::models::{Item, ItemStatus, ItemType};

// ========================
// Payloads
// ========================

/// Partial update of an item; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub ownership_date: Option<NaiveDate>,
    pub last_used_date: Option<NaiveDate>,
    pub status: Option<ItemStatus>,
}

impl ItemUpdate {
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    fn body(&self) -> UpdateItemBody<'_> {
        UpdateItemBody {
            name: self.name.as_deref(),
            item_received_date: self.ownership_date.map(iso_date),
            last_used: self.last_used_date.map(iso_date),
            status: self.status,
        }
    }
}

#[derive(Serialize)]
struct UpdateItemBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_received_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ItemStatus>,
}

/// Body of `POST /api/items`; new items always start as `Keep`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub picture_url: String,
    pub item_type: ItemType,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_received_date: Option<String>,
}

impl NewItem {
    pub fn new(name: &str, emoji: &str, item_type: ItemType, received: Option<NaiveDate>) -> Self {
        Self {
            name: name.trim().to_string(),
            picture_url: emoji.to_string(),
            item_type,
            status: ItemStatus::Keep,
            item_received_date: received.map(iso_date),
        }
    }
}

/// Midnight UTC in the `toISOString` layout, e.g. `2024-03-01T00:00:00.000Z`
pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse the value of an `<input type="date">`; empty means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Drop anything the backend returned outside the requested category
pub(crate) fn retain_status(items: Vec<Item>, status: ItemStatus) -> Vec<Item> {
    let total = items.len();
    let kept: Vec<Item> = items.into_iter().filter(|item| item.status == status).collect();
    if kept.len() != total {
        warn!(
            "[API] Dropped {} items not matching status {}",
            total - kept.len(),
            status.as_str()
        );
    }
    kept
}

fn item_path(id: &str) -> String {
    format!("/api/items/{}", encode_segment(id))
}

// ========================
// Fetchers
// ========================

pub async fn fetch_items_by_status(status: ItemStatus) -> Result<Vec<Item>, String> {
    let path = format!("/api/items?status={}", status.as_str());
    let result = async {
        let response = fetch_with_csrf(Method::GET, &path, None).await?;
        read_json::<Vec<Item>>(response).await
    }
    .await;

    match result {
        Ok(items) => Ok(retain_status(items, status)),
        Err(e) => {
            error!("Error fetching items: {}", e);
            Err("Failed to fetch items".to_string())
        }
    }
}

pub async fn update_item(id: &str, updates: &ItemUpdate) -> Result<Item, String> {
    let result = async {
        let body = serde_json::to_value(updates.body())
            .map_err(|e| HttpError::Encode(e.to_string()))?;
        let response = fetch_with_csrf(Method::PUT, &item_path(id), Some(body)).await?;
        read_json::<Item>(response).await
    }
    .await;

    result.map_err(|e| {
        error!("Error updating item: {}", e);
        "Failed to update item".to_string()
    })
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    match fetch_with_csrf(Method::DELETE, &item_path(id), None).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Error deleting item: {}", e);
            Err("Failed to delete item".to_string())
        }
    }
}

pub async fn create_item(item: &NewItem) -> Result<Item, String> {
    let result = async {
        let body = serde_json::to_value(item)
            .map_err(|e| HttpError::Encode(e.to_string()))?;
        let response = fetch_with_csrf(Method::POST, "/api/items", Some(body)).await?;
        read_json::<Item>(response).await
    }
    .await;

    result.map_err(|e| {
        error!("Error adding item: {}", e);
        "Failed to add item".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str, status: ItemStatus) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            picture_url: "📦".to_string(),
            item_type: ItemType::Other,
            status,
            ownership_duration: None,
            last_used_duration: None,
            item_received_date: None,
            last_used: None,
        }
    }

    #[test]
    fn test_update_body_only_sends_given_fields() {
        let body = serde_json::to_value(ItemUpdate::status(ItemStatus::Give).body()).unwrap();
        assert_eq!(body, json!({ "status": "Give" }));
    }

    #[test]
    fn test_update_body_renames_dates() {
        let updates = ItemUpdate {
            name: Some("Jacket".to_string()),
            ownership_date: NaiveDate::from_ymd_opt(2023, 4, 1),
            last_used_date: NaiveDate::from_ymd_opt(2024, 2, 10),
            status: None,
        };
        let body = serde_json::to_value(updates.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Jacket",
                "item_received_date": "2023-04-01T00:00:00.000Z",
                "last_used": "2024-02-10T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_new_item_always_keep() {
        let new_item = NewItem::new("  Scarf ", "🧣", ItemType::Clothing, None);
        let body = serde_json::to_value(&new_item).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Scarf",
                "picture_url": "🧣",
                "item_type": "Clothing",
                "status": "Keep",
            })
        );
    }

    #[test]
    fn test_new_item_with_received_date() {
        let new_item = NewItem::new("Car", "🚗", ItemType::Vehicle, parse_date_input("2020-06-15"));
        assert_eq!(new_item.item_received_date.as_deref(), Some("2020-06-15T00:00:00.000Z"));
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-01-31"), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("31/01/2024"), None);
    }

    #[test]
    fn test_retain_status_only_matching() {
        for status in ItemStatus::ALL {
            let items = vec![
                item("1", ItemStatus::Keep),
                item("2", ItemStatus::Give),
                item("3", ItemStatus::Donate),
                item("4", status),
            ];
            let kept = retain_status(items, status);
            assert_eq!(kept.len(), 2);
            assert!(kept.iter().all(|i| i.status == status));
        }
    }

    #[test]
    fn test_item_path_is_encoded() {
        assert_eq!(item_path("abc-123"), "/api/items/abc-123");
        assert_eq!(item_path("a/b"), "/api/items/a%2Fb");
    }
}
