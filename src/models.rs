//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Label shown when the backend did not supply a duration
pub const NOT_SPECIFIED: &str = "Not specified";

/// Disposition status of a tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemStatus {
    #[default]
    Keep,
    Give,
    Donate,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Keep, ItemStatus::Give, ItemStatus::Donate];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Keep => "Keep",
            ItemStatus::Give => "Give",
            ItemStatus::Donate => "Donate",
        }
    }
}

/// Item category, rendered as filter chips and in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemType {
    #[default]
    Clothing,
    Technology,
    #[serde(rename = "Household Item")]
    HouseholdItem,
    Vehicle,
    #[serde(other)]
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Clothing,
        ItemType::Technology,
        ItemType::HouseholdItem,
        ItemType::Vehicle,
        ItemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Clothing => "Clothing",
            ItemType::Technology => "Technology",
            ItemType::HouseholdItem => "Household Item",
            ItemType::Vehicle => "Vehicle",
            ItemType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Clothing" => ItemType::Clothing,
            "Technology" => ItemType::Technology,
            "Household Item" => ItemType::HouseholdItem,
            "Vehicle" => ItemType::Vehicle,
            _ => ItemType::Other,
        }
    }
}

/// Elapsed time computed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub description: String,
}

/// Duration as sent by the backend: structured, or an already rendered string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Duration {
    Span(TimeSpan),
    Text(String),
}

impl Duration {
    pub fn label(&self) -> &str {
        match self {
            Duration::Span(span) => &span.description,
            Duration::Text(text) => text,
        }
    }
}

fn duration_label(duration: Option<&Duration>) -> String {
    match duration.map(Duration::label) {
        Some(label) if !label.trim().is_empty() => label.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(alias = "pictureUrl", default)]
    pub picture_url: String,
    #[serde(alias = "itemType", default)]
    pub item_type: ItemType,
    pub status: ItemStatus,
    #[serde(alias = "ownershipDuration", default)]
    pub ownership_duration: Option<Duration>,
    #[serde(alias = "lastUsedDuration", default)]
    pub last_used_duration: Option<Duration>,
    #[serde(default)]
    pub item_received_date: Option<String>,
    #[serde(default)]
    pub last_used: Option<String>,
}

impl Item {
    /// Human-readable ownership duration
    pub fn ownership_label(&self) -> String {
        duration_label(self.ownership_duration.as_ref())
    }

    pub fn last_used_label(&self) -> String {
        duration_label(self.last_used_duration.as_ref())
    }

    /// `YYYY-MM-DD` part of the received date, for `<input type="date">`
    pub fn received_date_input(&self) -> String {
        date_input_value(self.item_received_date.as_deref())
    }

    pub fn last_used_input(&self) -> String {
        date_input_value(self.last_used.as_deref())
    }
}

fn date_input_value(raw: Option<&str>) -> String {
    raw.and_then(|s| s.get(..10)).unwrap_or_default().to_string()
}

/// Checkup category (lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckupType {
    Keep,
    Give,
}

impl CheckupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckupType::Keep => "keep",
            CheckupType::Give => "give",
        }
    }

    /// Title-case label used in headings
    pub fn label(&self) -> &'static str {
        match self {
            CheckupType::Keep => "Keep",
            CheckupType::Give => "Give",
        }
    }

    /// Items reviewed by a checkup of this type
    pub fn item_status(&self) -> ItemStatus {
        match self {
            CheckupType::Keep => ItemStatus::Keep,
            CheckupType::Give => ItemStatus::Give,
        }
    }
}

/// Checkup configuration (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkup {
    pub id: i64,
    pub last_checkup_date: String,
    pub checkup_interval_months: u32,
    pub is_checkup_due: bool,
    #[serde(default)]
    pub checkup_type: Option<CheckupType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_backend_schema() {
        let json = r#"{
            "id": "0d3c6a8e-8a51-4a43-9d7d-2f2a3f0c9f11",
            "name": "Jacket",
            "picture_url": "🧥",
            "item_type": "Household Item",
            "status": "Keep",
            "item_received_date": "2023-04-01T00:00:00Z",
            "last_used": "2024-02-10T12:30:00Z",
            "ownership_duration": {"years": 1, "months": 2, "days": 3, "description": "1 year, 2 months"},
            "last_used_duration": {"years": 0, "months": 1, "days": 0, "description": "1 month"}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::HouseholdItem);
        assert_eq!(item.status, ItemStatus::Keep);
        assert_eq!(item.ownership_label(), "1 year, 2 months");
        assert_eq!(item.last_used_label(), "1 month");
        assert_eq!(item.received_date_input(), "2023-04-01");
    }

    #[test]
    fn test_item_camel_case_aliases() {
        let json = r#"{"id":"1","name":"Jacket","pictureUrl":"🧥","itemType":"Clothing","status":"Give","ownershipDuration":"2 years","lastUsedDuration":""}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Clothing);
        assert_eq!(item.status, ItemStatus::Give);
        assert_eq!(item.ownership_label(), "2 years");
        assert_eq!(item.last_used_label(), NOT_SPECIFIED);
    }

    #[test]
    fn test_missing_duration_falls_back() {
        let json = r#"{"id":"2","name":"Phone","picture_url":"📱","item_type":"Technology","status":"Donate"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.ownership_label(), NOT_SPECIFIED);
        assert_eq!(item.received_date_input(), "");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":"3","name":"Bike","picture_url":"🚲","item_type":"Vehicle","status":"Sell"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_unknown_item_type_is_other() {
        let json = r#"{"id":"4","name":"Lamp","picture_url":"💡","item_type":"Furniture","status":"Keep"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Other);
    }

    #[test]
    fn test_item_type_names() {
        for t in ItemType::ALL {
            assert_eq!(ItemType::from_str(t.as_str()), t);
            assert_eq!(serde_json::to_value(t).unwrap(), t.as_str());
        }
    }

    #[test]
    fn test_checkup_type_wire_format() {
        assert_eq!(serde_json::to_value(CheckupType::Give).unwrap(), "give");
        assert_eq!(CheckupType::Keep.item_status(), ItemStatus::Keep);
        let checkup: Checkup = serde_json::from_str(
            r#"{"id":7,"last_checkup_date":"2024-01-01T00:00:00Z","checkup_interval_months":3,"is_checkup_due":true}"#,
        ).unwrap();
        assert!(checkup.is_checkup_due);
        assert_eq!(checkup.checkup_type, None);
    }
}
