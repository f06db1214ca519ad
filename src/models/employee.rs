use super::badge::BadgeId;
use serde::{Deserialize, Serialize};

/// One entry of the employee directory (`employees.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(alias = "matricule")]
    pub badge_id: BadgeId,
    pub name: String,
}

impl EmployeeRecord {
    pub fn new(badge_id: BadgeId, name: impl Into<String>) -> Self {
        Self {
            badge_id,
            name: name.into(),
        }
    }
}
