use super::badge::BadgeId;
use super::classification::Classification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// A completed break. Created once when the break ends, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct PauseRecord {
    pub badge_id: BadgeId,
    pub name: String,
    #[serde(with = "crate::utils::time::iso")]
    pub start: DateTime<Utc>,
    #[serde(with = "crate::utils::time::iso")]
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(rename = "overThreshold")]
    pub classification: Classification,
}

/// On-disk shape of a [`PauseRecord`]. Older documents key the badge as
/// `matricule` and carry a `statusColor` (`"red"` = over) instead of the flag.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(alias = "matricule")]
    badge_id: BadgeId,
    name: String,
    #[serde(with = "crate::utils::time::iso")]
    start: DateTime<Utc>,
    #[serde(with = "crate::utils::time::iso")]
    end: DateTime<Utc>,
    duration_minutes: i64,
    over_threshold: Option<bool>,
    status_color: Option<String>,
}

impl TryFrom<StoredRecord> for PauseRecord {
    type Error = String;

    fn try_from(raw: StoredRecord) -> Result<Self, Self::Error> {
        let over = match (raw.over_threshold, raw.status_color.as_deref()) {
            (Some(flag), _) => flag,
            (None, Some(color)) => color.eq_ignore_ascii_case("red"),
            (None, None) => {
                return Err(format!(
                    "break record for {} has neither overThreshold nor statusColor",
                    raw.badge_id
                ));
            }
        };
        Ok(Self {
            badge_id: raw.badge_id,
            name: raw.name,
            start: raw.start,
            end: raw.end,
            duration_minutes: raw.duration_minutes,
            classification: Classification::from(over),
        })
    }
}

/// The whole persisted pause database: open breaks plus the completed-break log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseDocument {
    /// badge → break start. Presence means the badge is on break.
    #[serde(default, with = "crate::utils::time::iso_map")]
    pub active: BTreeMap<BadgeId, DateTime<Utc>>,
    /// Newest first.
    #[serde(default)]
    pub history: VecDeque<PauseRecord>,
}

/// Where a badge currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakState {
    Idle,
    OnBreak { since: DateTime<Utc> },
}

impl PauseDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_state(&self, badge: &BadgeId) -> BreakState {
        match self.active.get(badge) {
            Some(since) => BreakState::OnBreak { since: *since },
            None => BreakState::Idle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_in_the_older_format() {
        let raw = r#"{
            "active": { "5678": "2025-03-10T10:00:00.000Z" },
            "history": [
                { "matricule": "1234", "name": "Alice",
                  "start": "2025-03-10T09:00:00.000Z", "end": "2025-03-10T09:25:00.000Z",
                  "durationMinutes": 25, "statusColor": "red" },
                { "matricule": "1234", "name": "Alice",
                  "start": "2025-03-10T08:00:00.000Z", "end": "2025-03-10T08:10:00.000Z",
                  "durationMinutes": 10, "statusColor": "green" }
            ]
        }"#;

        let doc: PauseDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.active.len(), 1);
        assert_eq!(doc.history.len(), 2);
        assert_eq!(doc.history[0].badge_id.as_str(), "1234");
        assert_eq!(doc.history[0].classification, Classification::OverThreshold);
        assert_eq!(doc.history[1].classification, Classification::UnderThreshold);

        // rewritten in the current shape
        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["history"][0]["badgeId"], "1234");
        assert_eq!(out["history"][0]["overThreshold"], true);
        assert!(out["history"][0].get("statusColor").is_none());
    }

    #[test]
    fn record_without_classification_is_rejected() {
        let raw = r#"{ "badgeId": "1234", "name": "Alice",
            "start": "2025-03-10T09:00:00.000Z", "end": "2025-03-10T09:05:00.000Z",
            "durationMinutes": 5 }"#;
        assert!(serde_json::from_str::<PauseRecord>(raw).is_err());
    }
}
