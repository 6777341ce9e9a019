//! Evidence hashing — a deterministic digest over the immutable facts of an
//! award.
//!
//! The facts are encoded with bincode (fixed field order, fixed value
//! encoding) and digested with Blake2b-256. Identical facts always yield
//! the same digest; any single-field change changes it. The verifier relies
//! on exactly this property to detect post-issuance tampering.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use skillmint_types::{EvidenceHash, Timestamp};

type Blake2b256 = Blake2b<U32>;

/// One skill entry as it is hashed: name and score only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillFact {
    pub name: String,
    pub score: f64,
}

/// The canonical, ordered facts of an award.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFacts {
    pub assessment_id: String,
    pub user_id: String,
    pub total_score: f64,
    pub completed_at: Timestamp,
    pub skills: Vec<SkillFact>,
}

/// Digest the facts into an [`EvidenceHash`].
pub fn evidence_hash(facts: &EvidenceFacts) -> EvidenceHash {
    let encoded = bincode::serialize(facts).expect("evidence facts are always serializable");
    let mut hasher = Blake2b256::new();
    hasher.update(&encoded);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    EvidenceHash::new(output)
}
