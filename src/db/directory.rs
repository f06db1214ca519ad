//! Read-only employee directory, loaded once from `employees.json`.

use crate::errors::{AppError, AppResult};
use crate::models::{BadgeId, EmployeeRecord};
use crate::utils::validation::is_valid_badge_id;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    by_badge: HashMap<BadgeId, EmployeeRecord>,
}

impl EmployeeDirectory {
    /// Read a JSON array of `{ "badgeId", "name" }` objects.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Directory(format!("cannot read {}: {e}", path.display()))
        })?;
        let records: Vec<EmployeeRecord> = serde_json::from_str(&content).map_err(|e| {
            AppError::Directory(format!("cannot parse {}: {e}", path.display()))
        })?;

        let directory = Self::from_records(records);
        info!(
            path = %path.display(),
            employees = directory.len(),
            "employee directory loaded"
        );
        Ok(directory)
    }

    /// Build from records. Entries with malformed badge ids are skipped and, for
    /// duplicate ids, the first entry wins.
    pub fn from_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let mut by_badge = HashMap::new();
        for record in records {
            if !is_valid_badge_id(record.badge_id.as_str()) {
                warn!(badge = %record.badge_id, name = %record.name, "skipping employee with malformed badge id");
                continue;
            }
            match by_badge.entry(record.badge_id.clone()) {
                Entry::Occupied(_) => {
                    warn!(badge = %record.badge_id, "duplicate badge id in employee directory, keeping the first");
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Self { by_badge }
    }

    /// Write an empty directory file if none exists. Returns true if created.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "[]\n")?;
        Ok(true)
    }

    pub fn lookup(&self, badge: &BadgeId) -> Option<&EmployeeRecord> {
        self.by_badge.get(badge)
    }

    pub fn len(&self) -> usize {
        self.by_badge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_badge.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(s: &str) -> BadgeId {
        BadgeId::parse(s).unwrap()
    }

    #[test]
    fn loads_both_key_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(
            &path,
            r#"[{"badgeId":"1234","name":"Alice"},{"matricule":"5678","name":"Bruno"}]"#,
        )
        .unwrap();

        let directory = EmployeeDirectory::load(&path).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.lookup(&badge("1234")).unwrap().name, "Alice");
        assert_eq!(directory.lookup(&badge("5678")).unwrap().name, "Bruno");
        assert!(directory.lookup(&badge("9999")).is_none());
    }

    #[test]
    fn first_duplicate_wins_and_malformed_ids_are_skipped() {
        let records: Vec<EmployeeRecord> = serde_json::from_str(
            r#"[{"badgeId":"1234","name":"Alice"},{"badgeId":"1234","name":"Other"},{"badgeId":"12","name":"Short"}]"#,
        )
        .unwrap();

        let directory = EmployeeDirectory::from_records(records);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup(&badge("1234")).unwrap().name, "Alice");
    }

    #[test]
    fn unreadable_file_is_a_directory_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            EmployeeDirectory::load(&missing),
            Err(AppError::Directory(_))
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{}").unwrap();
        assert!(matches!(
            EmployeeDirectory::load(&bad),
            Err(AppError::Directory(_))
        ));
    }
}
