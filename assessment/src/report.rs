//! Employer-facing report assembled from an assessment and its minted badge.
//!
//! Pure data shaping; nothing here touches the ledger.

use serde::{Deserialize, Serialize};
use skillmint_types::{
    AssessmentResult, AssessmentVerificationBadge, PerformanceLevel, Timestamp, TxRef,
};

/// Minutes budgeted per assessed skill when judging time efficiency.
const EXPECTED_MINUTES_PER_SKILL: u32 = 30;

/// Everything an employer needs to evaluate a candidate's credential.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployerReport {
    pub candidate_id: String,
    pub badge_name: String,
    pub verification: VerificationReport,
    pub skill_breakdown: SkillBreakdown,
    pub performance_analysis: PerformanceAnalysis,
    pub recommendation_summary: String,
}

/// Proof-of-authenticity section: where the credential lives on-chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationReport {
    pub status: String,
    pub integrity: String,
    pub tx_ref: TxRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    pub valid_until: Timestamp,
}

/// Per-skill scores plus the overall figure and a time-efficiency label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub overall_score: f64,
    pub skills: Vec<SkillScore>,
    pub time_efficiency: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillScore {
    pub name: String,
    pub percentage: f64,
    pub level: u8,
}

/// Qualitative notes carried over verbatim from the scoring analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub performance_level: String,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Assemble the report for a verified assessment badge.
pub fn build_report(
    assessment: &AssessmentResult,
    badge: &AssessmentVerificationBadge,
) -> EmployerReport {
    let explorer_url = badge
        .badge
        .ledger_data
        .as_ref()
        .map(|d| d.explorer_url.clone());

    EmployerReport {
        candidate_id: assessment.user_id.clone(),
        badge_name: badge.badge.name.clone(),
        verification: VerificationReport {
            status: "blockchain_verified".to_string(),
            integrity: "tamper_proof".to_string(),
            tx_ref: badge.badge.tx_ref,
            explorer_url,
            valid_until: badge.assessment_data.valid_until,
        },
        skill_breakdown: SkillBreakdown {
            overall_score: assessment.percentage_score,
            skills: assessment
                .skills_assessed
                .iter()
                .map(|s| SkillScore {
                    name: s.name.clone(),
                    percentage: s.score,
                    level: s.level,
                })
                .collect(),
            time_efficiency: time_efficiency(
                assessment.skills_assessed.len(),
                assessment.time_spent_minutes,
            )
            .to_string(),
        },
        performance_analysis: PerformanceAnalysis {
            performance_level: assessment.performance_level.as_str().to_string(),
            strengths: assessment.ai_analysis.strengths.clone(),
            improvement_areas: assessment.ai_analysis.improvement_areas.clone(),
        },
        recommendation_summary: recommendation(
            assessment.performance_level,
            assessment.percentage_score,
        )
        .to_string(),
    }
}

/// Expected time is 30 minutes per skill; the label comes from the ratio of
/// expected to actual. Finishing instantly counts as highly efficient.
fn time_efficiency(skill_count: usize, actual_minutes: u32) -> &'static str {
    if actual_minutes == 0 {
        return "Highly Efficient";
    }
    let expected = EXPECTED_MINUTES_PER_SKILL * skill_count as u32;
    let ratio = f64::from(expected) / f64::from(actual_minutes) * 100.0;
    if ratio >= 120.0 {
        "Highly Efficient"
    } else if ratio >= 100.0 {
        "Efficient"
    } else if ratio >= 80.0 {
        "Adequate"
    } else {
        "Needs Improvement"
    }
}

/// First matching rule wins; tier and score must both clear the bar.
fn recommendation(level: PerformanceLevel, score: f64) -> &'static str {
    if level == PerformanceLevel::Exceptional && score >= 90.0 {
        "Strongly Recommended - exceptional verified performance"
    } else if level == PerformanceLevel::ExceedsExpectations && score >= 80.0 {
        "Recommended - strong verified performance"
    } else if level == PerformanceLevel::MeetsExpectations && score >= 70.0 {
        "Consider - solid verified performance"
    } else {
        "Not Recommended - performance below the verification bar"
    }
}
