//! Accessibility settings enums.
//!
//! Each value maps to a stable string used both as the persisted value and as
//! the document-level attribute value that global styles select on.

use serde::{Deserialize, Serialize};

/// Global font-size setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Stable string form ("small", "medium", "large").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Parse a stored value; unknown values fall back to the default.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::default(),
        }
    }
}

/// Global contrast setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    #[default]
    Normal,
    High,
}

impl Contrast {
    /// Stable string form ("normal", "high").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    /// Parse a stored value; unknown values fall back to the default.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "high" => Self::High,
            _ => Self::default(),
        }
    }
}
