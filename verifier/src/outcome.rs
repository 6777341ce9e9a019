//! Verification outcomes.
//!
//! An invalid credential is a *result*, not an error: the verify call
//! succeeded and determined the claim does not hold.

use serde::{Deserialize, Serialize};
use skillmint_types::{TokenId, WalletAddress};

/// What a verification call determined.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<WalletAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Assessment id embedded on-chain, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl VerificationOutcome {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            token_id: None,
            owner: None,
            reference: None,
            metadata: None,
            assessment_id: None,
            failure_reason: Some(reason.into()),
        }
    }

    pub(crate) fn rejected(mut self, reason: impl Into<String>) -> Self {
        self.is_valid = false;
        self.failure_reason = Some(reason.into());
        self
    }
}
