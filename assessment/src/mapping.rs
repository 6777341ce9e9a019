//! Performance tier → badge parameter mapping and derived fields.
//!
//! The table is exhaustive over the four tiers and fully deterministic;
//! every derived number below comes from a fixed formula over the
//! assessment record.

use skillmint_types::{PerformanceLevel, RarityTier, SkillAssessed};

/// Badge parameters fixed by the performance tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierParams {
    pub skill_level: u8,
    pub rarity: RarityTier,
    pub title_suffix: &'static str,
    pub market_multiplier: f64,
    pub base_salary_impact: u32,
}

/// The tier table.
pub fn tier_params(level: PerformanceLevel) -> TierParams {
    match level {
        PerformanceLevel::BelowExpectations => TierParams {
            skill_level: 1,
            rarity: RarityTier::Common,
            title_suffix: "Assessment Completion",
            market_multiplier: 0.8,
            base_salary_impact: 0,
        },
        PerformanceLevel::MeetsExpectations => TierParams {
            skill_level: 2,
            rarity: RarityTier::Uncommon,
            title_suffix: "Competent Performance",
            market_multiplier: 1.0,
            base_salary_impact: 5,
        },
        PerformanceLevel::ExceedsExpectations => TierParams {
            skill_level: 3,
            rarity: RarityTier::Rare,
            title_suffix: "Excellent Performance",
            market_multiplier: 1.3,
            base_salary_impact: 15,
        },
        PerformanceLevel::Exceptional => TierParams {
            skill_level: 4,
            rarity: RarityTier::Epic,
            title_suffix: "Outstanding Achievement",
            market_multiplier: 1.6,
            base_salary_impact: 25,
        },
    }
}

/// `round(percentage_score * 10)`.
pub fn experience_points(percentage_score: f64) -> u32 {
    (percentage_score * 10.0).round().max(0.0) as u32
}

/// `round(50 * tier_multiplier * (1 + 0.1*skill_count) * (1 + quality/100))`.
pub fn market_value(level: PerformanceLevel, skill_count: usize, overall_quality: f64) -> u32 {
    let params = tier_params(level);
    let quality_bonus = overall_quality.clamp(0.0, 100.0) / 100.0;
    let value = 50.0
        * params.market_multiplier
        * (1.0 + 0.1 * skill_count as f64)
        * (1.0 + quality_bonus);
    value.round() as u32
}

/// `base_impact[tier] + min(10, 2*skill_count)`.
pub fn salary_impact(level: PerformanceLevel, skill_count: usize) -> u32 {
    tier_params(level).base_salary_impact + (2 * skill_count as u32).min(10)
}

/// Qualitative complexity from the mean of per-skill levels.
pub fn complexity_label(skills: &[SkillAssessed]) -> &'static str {
    if skills.is_empty() {
        return "beginner";
    }
    let mean = skills.iter().map(|s| f64::from(s.level)).sum::<f64>() / skills.len() as f64;
    if mean >= 3.5 {
        "expert"
    } else if mean >= 2.5 {
        "advanced"
    } else if mean >= 1.5 {
        "intermediate"
    } else {
        "beginner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: u8) -> SkillAssessed {
        SkillAssessed {
            name: "skill".into(),
            score: 80.0,
            level,
        }
    }

    #[test]
    fn table_is_exhaustive_and_monotone() {
        let tiers = [
            PerformanceLevel::BelowExpectations,
            PerformanceLevel::MeetsExpectations,
            PerformanceLevel::ExceedsExpectations,
            PerformanceLevel::Exceptional,
        ];
        let params: Vec<_> = tiers.iter().map(|t| tier_params(*t)).collect();
        for pair in params.windows(2) {
            assert!(pair[0].skill_level < pair[1].skill_level);
            assert!(pair[0].rarity < pair[1].rarity);
            assert!(pair[0].market_multiplier < pair[1].market_multiplier);
            assert!(pair[0].base_salary_impact < pair[1].base_salary_impact);
        }
    }

    #[test]
    fn exceeds_expectations_maps_to_skill_three_rare() {
        let params = tier_params(PerformanceLevel::ExceedsExpectations);
        assert_eq!(params.skill_level, 3);
        assert_eq!(params.rarity, RarityTier::Rare);
        assert_eq!(params.title_suffix, "Excellent Performance");
        assert_eq!(experience_points(85.0), 850);
    }

    #[test]
    fn market_value_formula() {
        // 50 * 1.3 * (1 + 0.2) * (1 + 0.8) = 140.4 → 140
        assert_eq!(
            market_value(PerformanceLevel::ExceedsExpectations, 2, 80.0),
            140
        );
        // 50 * 0.8 * 1.1 * 1.0 = 44
        assert_eq!(market_value(PerformanceLevel::BelowExpectations, 1, 0.0), 44);
    }

    #[test]
    fn salary_impact_caps_skill_bonus_at_ten() {
        assert_eq!(salary_impact(PerformanceLevel::ExceedsExpectations, 2), 19);
        assert_eq!(salary_impact(PerformanceLevel::Exceptional, 8), 35);
        assert_eq!(salary_impact(PerformanceLevel::BelowExpectations, 0), 0);
    }

    #[test]
    fn complexity_thresholds() {
        assert_eq!(complexity_label(&[skill(4), skill(4)]), "expert");
        assert_eq!(complexity_label(&[skill(3), skill(2)]), "advanced");
        assert_eq!(complexity_label(&[skill(2), skill(1)]), "intermediate");
        assert_eq!(complexity_label(&[skill(1)]), "beginner");
        assert_eq!(complexity_label(&[]), "beginner");
    }
}
