//! Progression data types.

use serde::{Deserialize, Serialize};

/// Experience shown as "unbounded" for the top tier.
///
/// A renderer divides experience by the next threshold for a progress
/// bar, so the top tier carries a sentinel instead of infinity.
pub const TOP_TIER_THRESHOLD: i64 = 999_999;

/// Progression rank derived from experience, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    /// Experience in [0, 500).
    I,
    /// Experience in [500, 2000).
    II,
    /// Experience in [2000, 5000).
    III,
    /// Experience in [5000, 10000).
    IV,
    /// Experience of 10000 and above.
    V,
}

impl Tier {
    /// First matching tier for an experience score.
    #[must_use]
    pub const fn for_experience(experience: i64) -> Self {
        if experience < 500 {
            Self::I
        } else if experience < 2000 {
            Self::II
        } else if experience < 5000 {
            Self::III
        } else if experience < 10000 {
            Self::IV
        } else {
            Self::V
        }
    }

    /// Experience needed for the next tier, for progress display.
    #[must_use]
    pub const fn next_threshold(self) -> i64 {
        match self {
            Self::I => 500,
            Self::II => 2000,
            Self::III => 5000,
            Self::IV => 10000,
            Self::V => TOP_TIER_THRESHOLD,
        }
    }
}

/// A named achievement indicator.
///
/// All four badges are always present in the output, locked or unlocked,
/// with identical metadata either way - a renderer never branches on
/// presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Stable badge identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unlock condition, human-readable.
    pub description: String,
    /// Whether the owner has earned the badge.
    pub unlocked: bool,
}

/// Gamified view of the owner's financial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// Experience score.
    pub experience: i64,
    /// Current tier.
    pub tier: Tier,
    /// Experience needed for the next tier.
    pub next_threshold: i64,
    /// The four achievement badges, always all present.
    pub badges: Vec<Badge>,
}
