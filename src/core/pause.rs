use crate::core::history::HistoryLogic;
use crate::core::machine::{BreakPolicy, PauseMachine};
use crate::db::{EmployeeDirectory, PauseStore};
use crate::errors::{AppError, AppResult};
use crate::models::{BadgeId, EmployeeRecord, PauseOutcome, PauseRecord};
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything a toggle needs: the store, the directory and the break policy.
/// Shared by the HTTP handlers and the CLI commands.
pub struct PauseService {
    store: PauseStore,
    directory: EmployeeDirectory,
    policy: BreakPolicy,
}

impl PauseService {
    pub fn new(store: PauseStore, directory: EmployeeDirectory, policy: BreakPolicy) -> Self {
        Self {
            store,
            directory,
            policy,
        }
    }

    pub fn store(&self) -> &PauseStore {
        &self.store
    }

    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    pub fn policy(&self) -> &BreakPolicy {
        &self.policy
    }

    /// Start or end the break of `raw_badge`, timestamped when the exclusive
    /// session is obtained.
    pub fn toggle(&self, raw_badge: &str) -> AppResult<PauseOutcome> {
        self.toggle_with(raw_badge, Utc::now)
    }

    /// Same as [`toggle`](Self::toggle) with a fixed timestamp.
    pub fn toggle_at(&self, raw_badge: &str, now: DateTime<Utc>) -> AppResult<PauseOutcome> {
        self.toggle_with(raw_badge, move || now)
    }

    pub fn history(&self) -> AppResult<Vec<PauseRecord>> {
        HistoryLogic::list(&self.store)
    }

    pub fn active(&self) -> AppResult<Vec<(EmployeeRecord, DateTime<Utc>)>> {
        let open = HistoryLogic::active(&self.store)?;
        Ok(open
            .into_iter()
            .map(|(badge, since)| {
                let employee = self
                    .directory
                    .lookup(&badge)
                    .cloned()
                    .unwrap_or_else(|| EmployeeRecord::new(badge, "?"));
                (employee, since)
            })
            .collect())
    }

    fn toggle_with(
        &self,
        raw_badge: &str,
        clock: impl FnOnce() -> DateTime<Utc>,
    ) -> AppResult<PauseOutcome> {
        // Guards: neither touches the store.
        let badge = BadgeId::parse(raw_badge)?;
        let employee = self
            .directory
            .lookup(&badge)
            .ok_or_else(|| AppError::UnknownEmployee(badge.to_string()))?;

        let session = self.store.load_for_update()?;
        let now = clock();
        let (next, outcome) =
            PauseMachine::transition(session.document(), employee, now, &self.policy);

        session.commit(next)?;

        match &outcome {
            PauseOutcome::Started { start, .. } => {
                info!(badge = %badge, name = %employee.name, start = %start, "break started");
            }
            PauseOutcome::Ended {
                duration_minutes,
                classification,
                ..
            } => {
                info!(
                    badge = %badge,
                    name = %employee.name,
                    minutes = duration_minutes,
                    class = classification.as_str(),
                    "break ended"
                );
            }
        }

        Ok(outcome)
    }
}
