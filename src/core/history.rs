//! Read-only projections of the pause document.

use crate::db::PauseStore;
use crate::errors::AppResult;
use crate::models::{BadgeId, PauseRecord};
use chrono::{DateTime, Utc};

pub struct HistoryLogic;

impl HistoryLogic {
    /// Completed breaks, newest first. Empty when nothing was recorded yet.
    pub fn list(store: &PauseStore) -> AppResult<Vec<PauseRecord>> {
        let doc = store.read_only()?;
        Ok(doc.history.iter().cloned().collect())
    }

    /// Open breaks, oldest start first.
    pub fn active(store: &PauseStore) -> AppResult<Vec<(BadgeId, DateTime<Utc>)>> {
        let doc = store.read_only()?;
        let mut open: Vec<_> = doc
            .active
            .iter()
            .map(|(badge, since)| (badge.clone(), *since))
            .collect();
        open.sort_by_key(|(_, since)| *since);
        Ok(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::machine::{BreakPolicy, PauseMachine};
    use crate::models::{EmployeeRecord, PauseDocument};
    use chrono::{Duration, TimeZone};

    #[test]
    fn empty_store_has_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = PauseStore::new(dir.path().join("pauses.json"));
        assert!(HistoryLogic::list(&store).unwrap().is_empty());
        assert!(HistoryLogic::active(&store).unwrap().is_empty());
    }

    #[test]
    fn lists_committed_history_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = PauseStore::new(dir.path().join("pauses.json"));
        let policy = BreakPolicy::default();
        let t0 = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

        let mut doc = PauseDocument::new();
        for (i, id) in ["1111", "2222"].iter().enumerate() {
            let emp = EmployeeRecord::new(BadgeId::parse(id).unwrap(), format!("E{i}"));
            let start = t0 + Duration::hours(i as i64);
            doc = PauseMachine::transition(&doc, &emp, start, &policy).0;
            doc = PauseMachine::transition(&doc, &emp, start + Duration::minutes(5), &policy).0;
        }
        store.load_for_update().unwrap().commit(doc).unwrap();

        let history = HistoryLogic::list(&store).unwrap();
        let ids: Vec<&str> = history.iter().map(|r| r.badge_id.as_str()).collect();
        assert_eq!(ids, ["2222", "1111"]);
    }
}
