//! Ledger client seam for the Skillmint engine.
//!
//! The engine never talks to a network directly; everything goes through the
//! [`LedgerClient`] trait, which captures the minimal call surface of the
//! pre-existing credential contract (mint, mint-with-metadata, read-owner,
//! read-reference, read-supply) plus the RPC reads the mint pipeline needs
//! (block height, balance, fee oracle, receipts).
//!
//! Real deployments implement the trait over their RPC stack; tests use the
//! null implementation from `skillmint-nullables`.

pub mod call;
pub mod client;
pub mod error;
pub mod extract;
pub mod fee;
pub mod payload;
pub mod receipt;

#[cfg(test)]
pub(crate) mod test_stub;

pub use call::{credential_reference, MintCall, MintCallShape, MAX_REFERENCE_BYTES};
pub use client::LedgerClient;
pub use error::LedgerError;
pub use extract::{recover_token_id, token_id_from_logs};
pub use fee::FeeEstimator;
pub use payload::OnChainPayload;
pub use receipt::{transfer_event_signature, EventLog, LogTopic, TxReceipt};
