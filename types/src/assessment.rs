//! Assessment input and output types.
//!
//! [`AssessmentResult`] is owned by the external assessment system and is
//! read-only to this engine. [`AssessmentVerificationBadge`] is what the
//! engine produces: a minted badge plus assessment-specific fields.

use crate::badge::Badge;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Validity window for an assessment credential: two years from completion.
pub const ASSESSMENT_VALIDITY_SECS: u64 = 2 * 365 * 24 * 60 * 60;

/// One of four fixed qualitative outcomes of an assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    BelowExpectations,
    MeetsExpectations,
    ExceedsExpectations,
    Exceptional,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowExpectations => "below_expectations",
            Self::MeetsExpectations => "meets_expectations",
            Self::ExceedsExpectations => "exceeds_expectations",
            Self::Exceptional => "exceptional",
        }
    }
}

/// A single skill covered by an assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessed {
    pub name: String,
    /// Score for this skill, 0–100.
    pub score: f64,
    /// Skill level demonstrated, 1–4.
    pub level: u8,
}

/// Natural-language and numeric output of the external AI scoring service.
///
/// Sub-scores are optional; the rarity engine substitutes a neutral default
/// when one is missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub code_quality: Option<u8>,
    pub efficiency: Option<u8>,
    pub creativity: Option<u8>,
    pub best_practices: Option<u8>,
    /// Overall quality, 0–100. Feeds the market-value bonus.
    pub overall_quality: f64,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Outcome of a third-party skill assessment. Read-only input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub assessment_id: String,
    pub user_id: String,
    pub employer_id: String,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage_score: f64,
    pub performance_level: PerformanceLevel,
    pub skills_assessed: Vec<SkillAssessed>,
    pub time_spent_minutes: u32,
    pub completed_at: Timestamp,
    pub ai_analysis: AiAnalysis,
}

/// Assessment-specific fields attached to a minted badge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentData {
    pub assessment_id: String,
    pub employer_id: String,
    pub performance_level: PerformanceLevel,
    pub skills_verified: Vec<String>,
    pub completion_date: Timestamp,
    pub valid_until: Timestamp,
}

/// A badge minted for an assessment outcome.
///
/// Created once per assessment and never mutated; a later assessment
/// produces a new, separate badge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssessmentVerificationBadge {
    pub badge: Badge,
    pub assessment_data: AssessmentData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_level_serde_names() {
        let json = serde_json::to_string(&PerformanceLevel::ExceedsExpectations).unwrap();
        assert_eq!(json, "\"exceeds_expectations\"");
        let back: PerformanceLevel = serde_json::from_str("\"exceptional\"").unwrap();
        assert_eq!(back, PerformanceLevel::Exceptional);
    }

    #[test]
    fn validity_window_is_two_years() {
        let completed = Timestamp::new(1_700_000_000);
        let until = completed.plus_secs(ASSESSMENT_VALIDITY_SECS);
        assert_eq!(until.as_secs() - completed.as_secs(), 63_072_000);
    }
}
