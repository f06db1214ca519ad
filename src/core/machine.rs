//! Break toggle state machine.
//!
//! Pure: the next document and the outcome depend only on the document, the
//! employee, `now` and the policy. Nothing here touches the disk or the clock.

use crate::models::{
    BreakState, Classification, EmployeeRecord, PauseDocument, PauseOutcome, PauseRecord,
};
use crate::utils::time::rounded_minutes;
use chrono::{DateTime, Utc};

pub const DEFAULT_THRESHOLD_MINUTES: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPolicy {
    /// Breaks longer than this are over-threshold.
    pub threshold_minutes: i64,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            threshold_minutes: DEFAULT_THRESHOLD_MINUTES,
        }
    }
}

pub struct PauseMachine;

impl PauseMachine {
    /// Idle → OnBreak records `now` as the start; OnBreak → Idle closes the break,
    /// prepends it to the history and clears the active entry.
    pub fn transition(
        doc: &PauseDocument,
        employee: &EmployeeRecord,
        now: DateTime<Utc>,
        policy: &BreakPolicy,
    ) -> (PauseDocument, PauseOutcome) {
        let mut next = doc.clone();
        let badge = &employee.badge_id;

        match doc.break_state(badge) {
            BreakState::Idle => {
                next.active.insert(badge.clone(), now);
                let outcome = PauseOutcome::Started {
                    employee: employee.clone(),
                    start: now,
                };
                (next, outcome)
            }
            BreakState::OnBreak { since } => {
                let duration_minutes = rounded_minutes(since, now);
                let classification =
                    Classification::classify(duration_minutes, policy.threshold_minutes);

                next.active.remove(badge);
                next.history.push_front(PauseRecord {
                    badge_id: badge.clone(),
                    name: employee.name.clone(),
                    start: since,
                    end: now,
                    duration_minutes,
                    classification,
                });

                let outcome = PauseOutcome::Ended {
                    employee: employee.clone(),
                    start: since,
                    end: now,
                    duration_minutes,
                    classification,
                };
                (next, outcome)
            }
        }
    }
}
