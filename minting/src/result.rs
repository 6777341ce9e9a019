//! Mint outcomes — the typed success value and the serializable outbound
//! wrapper handed to UI/employer collaborators.

use crate::error::MintError;
use serde::{Deserialize, Serialize};
use skillmint_types::{Badge, TokenId, TxRef};

/// Successful mint: the assembled badge plus the ledger coordinates.
///
/// `token_id` is `None` when both identifier-recovery strategies failed;
/// the mint itself still happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintedCredential {
    pub badge: Badge,
    pub tx_ref: TxRef,
    pub token_id: Option<TokenId>,
    pub explorer_url: String,
}

/// Serializable outbound result for collaborators that want a flat
/// success/error record instead of a `Result`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_ref: Option<TxRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MintingResult {
    pub fn from_outcome(outcome: &Result<MintedCredential, MintError>) -> Self {
        match outcome {
            Ok(minted) => Self {
                success: true,
                tx_ref: Some(minted.tx_ref),
                token_id: minted.token_id,
                explorer_url: Some(minted.explorer_url.clone()),
                badge: Some(minted.badge.clone()),
                error: None,
            },
            Err(e) => Self {
                success: false,
                tx_ref: None,
                token_id: None,
                explorer_url: None,
                badge: None,
                error: Some(e.to_string()),
            },
        }
    }
}
