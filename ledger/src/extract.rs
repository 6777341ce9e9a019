//! Credential identifier recovery from a confirmed transaction.
//!
//! Shared by the mint pipeline and the verifier so both decode identically.

use crate::client::LedgerClient;
use crate::receipt::{transfer_event_signature, EventLog, TxReceipt};
use skillmint_types::TokenId;

/// Scan event logs for the standard transfer-of-ownership event and decode
/// the token id from its last topic.
pub fn token_id_from_logs(logs: &[EventLog]) -> Option<TokenId> {
    let signature = transfer_event_signature();
    logs.iter()
        .find(|log| log.topics.first() == Some(&signature) && log.topics.len() >= 2)
        .and_then(|log| log.topics.last())
        .map(|topic| topic.to_token_id())
}

/// Recover the minted token id from a receipt, best effort.
///
/// Strategy 1: decode the transfer event from the logs. Strategy 2: read the
/// contract's current supply and assume the last-minted id `supply - 1`.
/// Returns `None` only when both fail.
///
/// The supply heuristic is only sound when mints against the contract are
/// serialized (single issuing wallet). Deployments with concurrent writers
/// must treat a log-less receipt as unrecoverable.
pub async fn recover_token_id<C: LedgerClient>(client: &C, receipt: &TxReceipt) -> Option<TokenId> {
    if let Some(token) = token_id_from_logs(&receipt.logs) {
        return Some(token);
    }
    tracing::debug!(tx = %receipt.tx_ref, "no transfer event in logs, falling back to supply read");
    match client.total_supply().await {
        Ok(supply) if supply > 0 => Some(TokenId(supply - 1)),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(tx = %receipt.tx_ref, error = %e, "supply read failed during id recovery");
            None
        }
    }
}
