//! Fundamental types for the Skillmint credential engine.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: transaction references, evidence hashes, addresses, timestamps,
//! rarity tiers, and the badge / assessment data model.

pub mod address;
pub mod assessment;
pub mod badge;
pub mod hash;
pub mod network;
pub mod rarity;
pub mod time;

pub use address::{ContractAddress, WalletAddress};
pub use assessment::{
    AiAnalysis, AssessmentData, AssessmentResult, AssessmentVerificationBadge, PerformanceLevel,
    SkillAssessed, ASSESSMENT_VALIDITY_SECS,
};
pub use badge::{
    AchievementDetails, Badge, BadgeMetadata, EmployerInfo, LedgerVerificationData, RarityInfo,
    SkillProgression, TokenId, VerificationData, VerificationMethod, VerificationStatus,
};
pub use hash::{EvidenceHash, TxRef};
pub use network::NetworkId;
pub use rarity::RarityTier;
pub use time::Timestamp;
