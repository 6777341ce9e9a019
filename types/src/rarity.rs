//! Rarity tiers for minted credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How distinguished a credential is, as a monotone step function of the
/// 0–100 rarity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl RarityTier {
    /// Tier for a rarity score on the 0–100 scale.
    pub fn from_score(score: u8) -> Self {
        match score {
            95..=u8::MAX => Self::Legendary,
            85..=94 => Self::Epic,
            75..=84 => Self::Rare,
            60..=74 => Self::Uncommon,
            _ => Self::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(RarityTier::from_score(0), RarityTier::Common);
        assert_eq!(RarityTier::from_score(59), RarityTier::Common);
        assert_eq!(RarityTier::from_score(60), RarityTier::Uncommon);
        assert_eq!(RarityTier::from_score(74), RarityTier::Uncommon);
        assert_eq!(RarityTier::from_score(75), RarityTier::Rare);
        assert_eq!(RarityTier::from_score(84), RarityTier::Rare);
        assert_eq!(RarityTier::from_score(85), RarityTier::Epic);
        assert_eq!(RarityTier::from_score(94), RarityTier::Epic);
        assert_eq!(RarityTier::from_score(95), RarityTier::Legendary);
        assert_eq!(RarityTier::from_score(100), RarityTier::Legendary);
    }

    #[test]
    fn tier_ordering_matches_score_ordering() {
        assert!(RarityTier::Common < RarityTier::Uncommon);
        assert!(RarityTier::Uncommon < RarityTier::Rare);
        assert!(RarityTier::Rare < RarityTier::Epic);
        assert!(RarityTier::Epic < RarityTier::Legendary);
    }
}
