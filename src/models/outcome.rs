use super::classification::Classification;
use super::employee::EmployeeRecord;
use chrono::{DateTime, Utc};

/// What a toggle did for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    Started {
        employee: EmployeeRecord,
        start: DateTime<Utc>,
    },
    Ended {
        employee: EmployeeRecord,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_minutes: i64,
        classification: Classification,
    },
}

impl PauseOutcome {
    pub fn employee(&self) -> &EmployeeRecord {
        match self {
            PauseOutcome::Started { employee, .. } | PauseOutcome::Ended { employee, .. } => {
                employee
            }
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, PauseOutcome::Started { .. })
    }

    /// Human-readable summary, e.g. "Break started for Alice (1234)".
    pub fn message(&self) -> String {
        let e = self.employee();
        match self {
            PauseOutcome::Started { .. } => {
                format!("Break started for {} ({})", e.name, e.badge_id)
            }
            PauseOutcome::Ended {
                duration_minutes, ..
            } => format!(
                "Break ended for {} ({}) after {} min",
                e.name, e.badge_id, duration_minutes
            ),
        }
    }
}
