use serde::{Deserialize, Serialize};
use std::fmt;

/// The two halves of every province profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flora,
    Fauna,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::Flora, Self::Fauna];

    /// Identifier used for CSS classes and data attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flora => "flora",
            Self::Fauna => "fauna",
        }
    }

    /// Indonesian noun for the kind of organism ("plant" / "animal").
    #[must_use]
    pub const fn kind_noun(self) -> &'static str {
        match self {
            Self::Flora => "tumbuhan",
            Self::Fauna => "hewan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
