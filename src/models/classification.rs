use serde::{Deserialize, Serialize};

/// Duration class of a completed break. Serialized as the `overThreshold` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Classification {
    UnderThreshold,
    OverThreshold,
}

impl Classification {
    /// Strictly greater than the threshold is over: a break of exactly
    /// `threshold_minutes` is still under.
    pub fn classify(duration_minutes: i64, threshold_minutes: i64) -> Self {
        if duration_minutes > threshold_minutes {
            Self::OverThreshold
        } else {
            Self::UnderThreshold
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Classification::OverThreshold)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::UnderThreshold => "under",
            Classification::OverThreshold => "over",
        }
    }
}

impl From<bool> for Classification {
    fn from(over: bool) -> Self {
        if over {
            Self::OverThreshold
        } else {
            Self::UnderThreshold
        }
    }
}

impl From<Classification> for bool {
    fn from(c: Classification) -> Self {
        c.is_over()
    }
}
