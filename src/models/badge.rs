use crate::errors::{AppError, AppResult};
use crate::utils::validation::is_valid_badge_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 4-digit badge identifier.
///
/// Deserialization is deliberately unchecked so legacy documents still load;
/// request input goes through [`BadgeId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    pub fn parse(raw: &str) -> AppResult<Self> {
        if is_valid_badge_id(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidIdentifier(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
