//! Checkup Hooks
//!
//! Reactive access to the checkup configured for a category.

use chrono::{DateTime, NaiveDateTime};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Checkup, CheckupType};

fn checkup_timestamp(raw: &str) -> Option<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Most recent checkup: latest `last_checkup_date`, ties broken by the higher id
pub fn latest_checkup(checkups: &[Checkup]) -> Option<&Checkup> {
    checkups
        .iter()
        .max_by_key(|c| (checkup_timestamp(&c.last_checkup_date), c.id))
}

/// Latest checkup for `checkup_type`, refetched when the type or the app reload trigger changes
pub fn use_latest_checkup(
    checkup_type: impl Into<Signal<CheckupType>>,
) -> ReadSignal<Option<Checkup>> {
    let checkup_type = checkup_type.into();
    let ctx = use_app_context();
    let (latest, set_latest) = signal(None::<Checkup>);

    Effect::new(move |_| {
        let kind = checkup_type.get();
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::fetch_checkup(kind).await {
                Ok(checkups) => {
                    log!("[CHECKUP] {} checkups for {}", checkups.len(), kind.as_str());
                    set_latest.set(latest_checkup(&checkups).cloned());
                }
                Err(e) => error!("[CHECKUP] Error checking checkup status: {}", e),
            }
        });
    });

    latest
}

/// Whether the checkup for `checkup_type` is due; stays false on failure
pub fn use_checkup_status(checkup_type: impl Into<Signal<CheckupType>>) -> Signal<bool> {
    let latest = use_latest_checkup(checkup_type);
    Signal::derive(move || latest.with(|c| c.as_ref().is_some_and(|c| c.is_checkup_due)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_due(checkups: &[Checkup]) -> bool {
        latest_checkup(checkups).is_some_and(|c| c.is_checkup_due)
    }

    fn checkup(id: i64, date: &str, due: bool) -> Checkup {
        Checkup {
            id,
            last_checkup_date: date.to_string(),
            checkup_interval_months: 1,
            is_checkup_due: due,
            checkup_type: Some(CheckupType::Keep),
        }
    }

    #[test]
    fn test_empty_list_is_not_due() {
        assert!(!is_due(&[]));
        assert!(latest_checkup(&[]).is_none());
    }

    #[test]
    fn test_single_due_checkup() {
        assert!(is_due(&[checkup(1, "2024-01-01T00:00:00Z", true)]));
    }

    #[test]
    fn test_latest_by_date_not_position() {
        let checkups = vec![
            checkup(1, "2023-01-01T00:00:00Z", true),
            checkup(2, "2024-06-01T00:00:00+02:00", false),
            checkup(3, "2024-03-01T00:00:00", true),
        ];
        assert_eq!(latest_checkup(&checkups).map(|c| c.id), Some(2));
        assert!(!is_due(&checkups));
    }

    #[test]
    fn test_tie_breaks_on_id() {
        let checkups = vec![
            checkup(9, "2024-01-01T00:00:00Z", true),
            checkup(4, "2024-01-01T00:00:00Z", false),
        ];
        assert_eq!(latest_checkup(&checkups).map(|c| c.id), Some(9));
        assert!(is_due(&checkups));
    }

    #[test]
    fn test_unparsable_dates_fall_back_to_id() {
        let checkups = vec![checkup(1, "yesterday", false), checkup(5, "", true)];
        assert_eq!(latest_checkup(&checkups).map(|c| c.id), Some(5));
    }
}
