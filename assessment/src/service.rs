//! Assessment verification service — assessment outcome in, minted
//! assessment badge out.

use skillmint_ledger::LedgerClient;
use skillmint_minting::{BadgeDraft, MintingService};
use skillmint_scoring::{evidence_hash, EvidenceFacts, SkillFact};
use skillmint_types::{
    AchievementDetails, AssessmentData, AssessmentResult, AssessmentVerificationBadge,
    BadgeMetadata, EmployerInfo, PerformanceLevel, RarityInfo, SkillProgression, Timestamp,
    VerificationData, VerificationMethod, WalletAddress, ASSESSMENT_VALIDITY_SECS,
};

use crate::error::AssessmentError;
use crate::mapping::{
    complexity_label, experience_points, market_value, salary_impact, tier_params,
};

/// The canonical evidence facts of an assessment, in hashing order.
pub fn evidence_facts(assessment: &AssessmentResult) -> EvidenceFacts {
    EvidenceFacts {
        assessment_id: assessment.assessment_id.clone(),
        user_id: assessment.user_id.clone(),
        total_score: assessment.total_score,
        completed_at: assessment.completed_at,
        skills: assessment
            .skills_assessed
            .iter()
            .map(|s| SkillFact {
                name: s.name.clone(),
                score: s.score,
            })
            .collect(),
    }
}

/// Turns assessment outcomes into minted, evidence-hashed badges.
pub struct AssessmentVerificationService<C: LedgerClient> {
    minting: MintingService<C>,
}

impl<C: LedgerClient> AssessmentVerificationService<C> {
    pub fn new(minting: MintingService<C>) -> Self {
        Self { minting }
    }

    pub fn minting(&self) -> &MintingService<C> {
        &self.minting
    }

    /// Mint a verification badge for a completed assessment.
    ///
    /// The input is validated before any network call; minting failures
    /// propagate unchanged.
    pub async fn verify_assessment(
        &self,
        assessment: &AssessmentResult,
        recipient: &WalletAddress,
        now: Timestamp,
    ) -> Result<AssessmentVerificationBadge, AssessmentError> {
        validate(assessment)?;

        let params = tier_params(assessment.performance_level);
        let evidence = evidence_hash(&evidence_facts(assessment));
        let skill_names: Vec<String> = assessment
            .skills_assessed
            .iter()
            .map(|s| s.name.clone())
            .collect();
        let primary_skill = primary_skill(assessment);

        let mut draft = BadgeDraft::new(
            format!("{} - {}", primary_skill, params.title_suffix),
            primary_skill.clone(),
            params.skill_level,
        );
        draft.description = format!(
            "Verified third-party assessment of {} ({}% score)",
            skill_names.join(", "),
            assessment.percentage_score.round()
        );
        draft.icon = tier_icon(assessment.performance_level).to_string();
        draft.assessment_id = Some(assessment.assessment_id.clone());

        let metadata = self.build_metadata(assessment, &params, evidence, &skill_names, now);

        let minted = self
            .minting
            .mint(
                recipient,
                &draft,
                Some(&metadata),
                &self.minting.config().options(),
                now,
            )
            .await?;

        tracing::info!(
            assessment = %assessment.assessment_id,
            tx = %minted.tx_ref,
            "assessment verification badge minted"
        );
        Ok(AssessmentVerificationBadge {
            badge: minted.badge,
            assessment_data: AssessmentData {
                assessment_id: assessment.assessment_id.clone(),
                employer_id: assessment.employer_id.clone(),
                performance_level: assessment.performance_level,
                skills_verified: skill_names,
                completion_date: assessment.completed_at,
                valid_until: assessment.completed_at.plus_secs(ASSESSMENT_VALIDITY_SECS),
            },
        })
    }

    fn build_metadata(
        &self,
        assessment: &AssessmentResult,
        params: &crate::mapping::TierParams,
        evidence: skillmint_types::EvidenceHash,
        skill_names: &[String],
        now: Timestamp,
    ) -> BadgeMetadata {
        let analysis = &assessment.ai_analysis;
        let skill_count = assessment.skills_assessed.len();
        BadgeMetadata {
            skill_progression: SkillProgression {
                skill_level: params.skill_level,
                experience_points: experience_points(assessment.percentage_score),
                competency_areas: skill_names.to_vec(),
            },
            achievement_details: AchievementDetails {
                code_quality: sub_score(analysis.code_quality),
                efficiency: sub_score(analysis.efficiency),
                creativity: sub_score(analysis.creativity),
                best_practices: sub_score(analysis.best_practices),
                complexity: complexity_label(&assessment.skills_assessed).to_string(),
                strengths: analysis.strengths.clone(),
                improvement_areas: analysis.improvement_areas.clone(),
            },
            verification_data: VerificationData {
                issued_at: now,
                issuer_id: self.minting.config().issuer_id.clone(),
                verification_method: VerificationMethod::Assessment,
                evidence_hash: Some(evidence),
            },
            // Placeholder; the mint pipeline recomputes rarity from the
            // ledger's supply accessor when rarity_calculation is on.
            rarity: RarityInfo {
                level: params.rarity,
                total_issued: 0,
                rarity_score: 0,
            },
            employer_info: EmployerInfo {
                job_relevance: skill_names.to_vec(),
                market_value: market_value(
                    assessment.performance_level,
                    skill_count,
                    analysis.overall_quality,
                ),
                demand_level: demand_level(assessment.performance_level).to_string(),
                salary_impact: salary_impact(assessment.performance_level, skill_count),
            },
        }
    }
}

fn validate(assessment: &AssessmentResult) -> Result<(), AssessmentError> {
    if assessment.assessment_id.is_empty() {
        return Err(AssessmentError::InvalidInput("empty assessment id".into()));
    }
    if assessment.user_id.is_empty() {
        return Err(AssessmentError::InvalidInput("empty user id".into()));
    }
    if assessment.skills_assessed.is_empty() {
        return Err(AssessmentError::InvalidInput("no skills assessed".into()));
    }
    if !(0.0..=100.0).contains(&assessment.percentage_score) {
        return Err(AssessmentError::InvalidInput(format!(
            "percentage score {} out of range",
            assessment.percentage_score
        )));
    }
    if assessment.max_score <= 0.0
        || assessment.total_score < 0.0
        || assessment.total_score > assessment.max_score
    {
        return Err(AssessmentError::InvalidInput("malformed score".into()));
    }
    Ok(())
}

/// The highest-scoring skill names the badge.
fn primary_skill(assessment: &AssessmentResult) -> String {
    assessment
        .skills_assessed
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "General".to_string())
}

fn sub_score(score: Option<u8>) -> u8 {
    match score {
        Some(v) if v <= 100 => v,
        _ => 50,
    }
}

fn tier_icon(level: PerformanceLevel) -> &'static str {
    match level {
        PerformanceLevel::BelowExpectations => "🏁",
        PerformanceLevel::MeetsExpectations => "✅",
        PerformanceLevel::ExceedsExpectations => "🌟",
        PerformanceLevel::Exceptional => "🏆",
    }
}

fn demand_level(level: PerformanceLevel) -> &'static str {
    match level {
        PerformanceLevel::BelowExpectations => "entry",
        PerformanceLevel::MeetsExpectations => "moderate",
        PerformanceLevel::ExceedsExpectations | PerformanceLevel::Exceptional => "high",
    }
}
