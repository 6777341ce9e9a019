//! Transaction receipts and event logs.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use skillmint_types::{ContractAddress, TokenId, TxRef};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte event topic word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogTopic([u8; 32]);

impl LogTopic {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// A topic word carrying a token id in its big-endian tail, the way the
    /// transfer event encodes its `tokenId` argument.
    pub fn from_token_id(token: TokenId) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&token.value().to_be_bytes());
        Self(bytes)
    }

    /// Decode a token id from the big-endian tail of this topic.
    pub fn to_token_id(&self) -> TokenId {
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&self.0[24..]);
        TokenId(u64::from_be_bytes(tail))
    }
}

impl fmt::Debug for LogTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogTopic({})", hex::encode(&self.0[..4]))
    }
}

/// Signature topic of the standard transfer-of-ownership event.
pub fn transfer_event_signature() -> LogTopic {
    let mut hasher = Blake2b256::new();
    hasher.update(b"Transfer(address,address,uint256)");
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    LogTopic(bytes)
}

/// One event log entry from a confirmed transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub address: ContractAddress,
    pub topics: Vec<LogTopic>,
    pub data: Vec<u8>,
}

impl EventLog {
    /// A well-formed transfer event for `token` emitted by `contract`.
    pub fn transfer(contract: ContractAddress, token: TokenId) -> Self {
        Self {
            address: contract,
            topics: vec![
                transfer_event_signature(),
                LogTopic::new([0u8; 32]),
                LogTopic::new([0u8; 32]),
                LogTopic::from_token_id(token),
            ],
            data: Vec::new(),
        }
    }
}

/// Confirmation record of a submitted transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_ref: TxRef,
    pub block_number: u64,
    pub gas_used: u64,
    /// Whether the transaction executed successfully.
    pub status: bool,
    pub confirmations: u32,
    pub logs: Vec<EventLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_token_id_roundtrip() {
        let topic = LogTopic::from_token_id(TokenId(1246));
        assert_eq!(topic.to_token_id(), TokenId(1246));
    }

    #[test]
    fn transfer_signature_is_stable() {
        assert_eq!(transfer_event_signature(), transfer_event_signature());
        assert_ne!(*transfer_event_signature().as_bytes(), [0u8; 32]);
    }

    #[test]
    fn transfer_event_carries_token_in_last_topic() {
        let log = EventLog::transfer(ContractAddress::new("0xcafe"), TokenId(7));
        assert_eq!(log.topics[0], transfer_event_signature());
        assert_eq!(log.topics.last().unwrap().to_token_id(), TokenId(7));
    }
}
