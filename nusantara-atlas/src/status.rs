use crate::constants::{DANGER_KEYWORDS, WARNING_KEYWORDS};
use serde::{Deserialize, Serialize};

/// Severity tier derived from a free-text conservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Danger,
    Warning,
    Safe,
}

impl StatusTier {
    /// CSS suffix used by badges (`badge-danger`) and modal status lines.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Safe => "safe",
        }
    }
}

/// Classify a status label by keyword membership.
///
/// Danger keywords always win over warning keywords; anything else is safe.
#[must_use]
pub fn classify(status: &str) -> StatusTier {
    if DANGER_KEYWORDS.iter().any(|k| status.contains(k)) {
        StatusTier::Danger
    } else if WARNING_KEYWORDS.iter().any(|k| status.contains(k)) {
        StatusTier::Warning
    } else {
        StatusTier::Safe
    }
}
