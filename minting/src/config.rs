//! Minting configuration with TOML file support.

use serde::{Deserialize, Serialize};
use skillmint_types::{ContractAddress, NetworkId, WalletAddress};
use std::path::Path;

use crate::error::MintError;

/// Configuration for a [`MintingService`].
///
/// Can be loaded from a TOML file via [`MintingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
///
/// [`MintingService`]: crate::service::MintingService
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintingConfig {
    /// Which network to mint against.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Address of the deployed credential contract.
    pub contract_address: ContractAddress,

    /// The issuing wallet (funds checked before every mint).
    pub wallet_address: WalletAddress,

    /// Identifier recorded as the credential issuer.
    #[serde(default = "default_issuer_id")]
    pub issuer_id: String,

    /// Minimum issuing-wallet balance required before a mint is attempted.
    /// Kept as u64 so it stays representable in TOML.
    #[serde(default = "default_min_wallet_balance")]
    pub min_wallet_balance: u64,

    /// Attach the full metadata payload on-chain vs. reference-only.
    #[serde(default = "default_true")]
    pub include_metadata: bool,

    /// Reserved: generate an off-chain metadata store entry.
    #[serde(default)]
    pub generate_off_chain_store: bool,

    /// Mark freshly minted badges as verified.
    #[serde(default = "default_true")]
    pub enable_verification: bool,

    /// Recompute rarity from the ledger's supply accessor during the mint.
    #[serde(default = "default_true")]
    pub rarity_calculation: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl MintingConfig {
    /// A development config for the given contract and wallet.
    pub fn for_dev(contract: ContractAddress, wallet: WalletAddress) -> Self {
        Self {
            network: NetworkId::Dev,
            contract_address: contract,
            wallet_address: wallet,
            issuer_id: default_issuer_id(),
            min_wallet_balance: default_min_wallet_balance(),
            include_metadata: true,
            generate_off_chain_store: false,
            enable_verification: true,
            rarity_calculation: true,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, MintError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MintError::InvalidInput(format!("config read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| MintError::InvalidInput(format!("config parse {}: {e}", path.display())))
    }

    /// The per-call options implied by this configuration.
    pub fn options(&self) -> MintOptions {
        MintOptions {
            include_metadata: self.include_metadata,
            generate_off_chain_store: self.generate_off_chain_store,
            enable_verification: self.enable_verification,
            rarity_calculation: self.rarity_calculation,
        }
    }
}

/// Per-call switches recognized by [`MintingService::mint`].
///
/// [`MintingService::mint`]: crate::service::MintingService::mint
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MintOptions {
    pub include_metadata: bool,
    pub generate_off_chain_store: bool,
    pub enable_verification: bool,
    pub rarity_calculation: bool,
}

impl Default for MintOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            generate_off_chain_store: false,
            enable_verification: true,
            rarity_calculation: true,
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Dev
}

fn default_issuer_id() -> String {
    "skillmint".to_string()
}

fn default_min_wallet_balance() -> u64 {
    10_000_000_000_000_000 // 0.01 of the native unit
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_minimal_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "contract_address = \"0xcontract\"\nwallet_address = \"0xissuer\""
        )
        .unwrap();

        let config = MintingConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.network, NetworkId::Dev);
        assert!(config.include_metadata);
        assert!(config.rarity_calculation);
        assert!(!config.generate_off_chain_store);
        assert_eq!(config.min_wallet_balance, 10_000_000_000_000_000);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "network = \"test\"\ncontract_address = \"0xc\"\nwallet_address = \"0xw\"\ninclude_metadata = false\nmin_wallet_balance = 5"
        )
        .unwrap();

        let config = MintingConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.network, NetworkId::Test);
        assert!(!config.include_metadata);
        assert_eq!(config.min_wallet_balance, 5);
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let err = MintingConfig::from_toml_file(Path::new("/nonexistent/skillmint.toml"))
            .unwrap_err();
        assert!(matches!(err, MintError::InvalidInput(_)));
    }
}
