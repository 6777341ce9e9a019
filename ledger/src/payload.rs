//! Compact on-chain metadata payload.
//!
//! The credential reference string stays short; anything richer travels in
//! this compact JSON payload passed to `mintWithMetadata`. The verifier
//! parses the same format back out of `tokenMetadata`.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use skillmint_types::{EvidenceHash, RarityTier};

/// The structured field stored on-chain next to the reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnChainPayload {
    pub badge_name: String,
    pub skill_name: String,
    pub skill_level: u8,
    pub rarity: RarityTier,
    pub rarity_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_hash: Option<EvidenceHash>,
}

impl OnChainPayload {
    pub fn to_json(&self) -> Result<String, LedgerError> {
        serde_json::to_string(self).map_err(|e| LedgerError::Rpc(format!("payload encode: {e}")))
    }

    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(raw).map_err(|e| LedgerError::Rpc(format!("payload decode: {e}")))
    }
}
