//! Network identifier.

use crate::hash::TxRef;
use serde::{Deserialize, Serialize};

/// Identifies which ledger network credentials are minted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    Main,
    /// The public test network.
    Test,
    /// Local development network.
    Dev,
}

impl NetworkId {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }

    /// Block-explorer URL for a transaction on this network.
    pub fn explorer_tx_url(&self, tx_ref: &TxRef) -> String {
        match self {
            Self::Main => format!("https://explorer.skillmint.net/tx/{tx_ref}"),
            Self::Test => format!("https://test.explorer.skillmint.net/tx/{tx_ref}"),
            Self::Dev => format!("http://localhost:8545/tx/{tx_ref}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_url_embeds_reference() {
        let tx = TxRef::new([0xab; 32]);
        let url = NetworkId::Test.explorer_tx_url(&tx);
        assert!(url.starts_with("https://test."));
        assert!(url.ends_with(&tx.to_string()));
    }
}
