//! Badge draft — what the caller wants minted.

use serde::{Deserialize, Serialize};

/// Caller-supplied description of the badge to mint.
///
/// The ledger-storable reference is derived from `name` and `skill_level`;
/// everything else travels in the metadata payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BadgeDraft {
    pub name: String,
    pub description: String,
    pub icon: String,
    /// The skill this credential attests.
    pub skill_name: String,
    /// Skill level, 1–4.
    pub skill_level: u8,
    /// Present when this badge attests an assessment; embedded in the
    /// on-chain payload for later authenticity checks.
    pub assessment_id: Option<String>,
}

impl BadgeDraft {
    pub fn new(
        name: impl Into<String>,
        skill_name: impl Into<String>,
        skill_level: u8,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            skill_name: skill_name.into(),
            skill_level,
            assessment_id: None,
        }
    }
}
