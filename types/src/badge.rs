//! Badge data model — the credential record and its nested metadata.
//!
//! A [`Badge`] is created exactly once by a successful mint and is immutable
//! after confirmation, except for [`Badge::verification_status`] which an
//! independent re-verification call may refresh. Re-verification never
//! rewrites ledger-side facts.

use crate::address::ContractAddress;
use crate::hash::{EvidenceHash, TxRef};
use crate::network::NetworkId;
use crate::rarity::RarityTier;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a credential token on the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local verification state of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

/// How the underlying performance record was scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    AiAnalysis,
    Assessment,
}

/// A minted skill credential.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tx_ref: TxRef,
    pub issued_at: Timestamp,
    pub verification_status: VerificationStatus,
    pub metadata: Option<BadgeMetadata>,
    pub ledger_data: Option<LedgerVerificationData>,
}

/// Full badge metadata, carried off-chain and summarized on-chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    pub skill_progression: SkillProgression,
    pub achievement_details: AchievementDetails,
    pub verification_data: VerificationData,
    pub rarity: RarityInfo,
    pub employer_info: EmployerInfo,
}

/// Where the holder sits on the skill ladder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillProgression {
    /// Skill level, 1 (beginner) through 4 (expert).
    pub skill_level: u8,
    pub experience_points: u32,
    pub competency_areas: Vec<String>,
}

/// Percentile-like achievement sub-scores (0–100) plus qualitative notes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementDetails {
    pub code_quality: u8,
    pub efficiency: u8,
    pub creativity: u8,
    pub best_practices: u8,
    pub complexity: String,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Issuance provenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationData {
    pub issued_at: Timestamp,
    pub issuer_id: String,
    pub verification_method: VerificationMethod,
    pub evidence_hash: Option<EvidenceHash>,
}

/// Computed rarity of the credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityInfo {
    pub level: RarityTier,
    pub total_issued: u64,
    /// Rarity score on the 0–100 scale.
    pub rarity_score: u8,
}

/// Employer-facing market signals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployerInfo {
    pub job_relevance: Vec<String>,
    pub market_value: u32,
    pub demand_level: String,
    pub salary_impact: u32,
}

/// Ledger-side facts recorded once at confirmation time.
///
/// `confirmations` may be refreshed by a later re-query; everything else is
/// write-once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerVerificationData {
    pub contract_address: ContractAddress,
    pub token_id: Option<TokenId>,
    pub network: NetworkId,
    pub block_number: u64,
    pub gas_used: u64,
    pub confirmations: u32,
    pub explorer_url: String,
    pub on_chain_payload: Option<String>,
}
