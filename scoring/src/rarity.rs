//! Rarity scoring — skill level and achievement sub-scores to a tier.
//!
//! The raw formula is `skill_level * 25 + mean(sub-scores)`, which spans
//! 25–200 for valid inputs while the tier thresholds live on a 0–100 scale.
//! The stored score is therefore the raw value rescaled by half (a monotone
//! map, so ordering between any two inputs is preserved) and the step
//! function is applied to the rescaled value.

use skillmint_types::{RarityInfo, RarityTier};

/// Neutral substitute for a missing or out-of-range sub-score.
const NEUTRAL_SCORE: u8 = 50;

/// The four achievement sub-scores, each 0–100 when present.
///
/// A `None` (or out-of-range) entry is treated as the neutral 50 rather
/// than failing the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AchievementScores {
    pub code_quality: Option<u8>,
    pub efficiency: Option<u8>,
    pub creativity: Option<u8>,
    pub best_practices: Option<u8>,
}

impl AchievementScores {
    pub fn new(code_quality: u8, efficiency: u8, creativity: u8, best_practices: u8) -> Self {
        Self {
            code_quality: Some(code_quality),
            efficiency: Some(efficiency),
            creativity: Some(creativity),
            best_practices: Some(best_practices),
        }
    }

    fn normalized(&self) -> [u8; 4] {
        [
            normalize(self.code_quality),
            normalize(self.efficiency),
            normalize(self.creativity),
            normalize(self.best_practices),
        ]
    }

    fn all_missing(&self) -> bool {
        [
            self.code_quality,
            self.efficiency,
            self.creativity,
            self.best_practices,
        ]
        .iter()
        .all(|s| !matches!(s, Some(v) if *v <= 100))
    }
}

fn normalize(score: Option<u8>) -> u8 {
    match score {
        Some(v) if v <= 100 => v,
        _ => NEUTRAL_SCORE,
    }
}

/// Compute the rarity of a credential.
///
/// `skill_level` outside 1–4 is clamped into range. Total: never fails.
/// When every sub-score is missing or invalid the tier is forced to
/// `Common` as the safe floor, whatever the computed score says.
pub fn compute_rarity(skill_level: u8, scores: &AchievementScores, total_issued: u64) -> RarityInfo {
    let level = skill_level.clamp(1, 4);
    let subs = scores.normalized();
    let mean = subs.iter().map(|&s| f64::from(s)).sum::<f64>() / 4.0;

    let raw = f64::from(level) * 25.0 + mean;
    // Rescale 0–200 → 0–100 before tier lookup.
    let rarity_score = (raw / 2.0).round().clamp(0.0, 100.0) as u8;

    let tier = if scores.all_missing() {
        RarityTier::Common
    } else {
        RarityTier::from_score(rarity_score)
    };

    RarityInfo {
        level: tier,
        total_issued,
        rarity_score,
    }
}
