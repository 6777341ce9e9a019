//! Minimal in-crate ledger stub for unit tests.
//!
//! The full-featured programmable double lives in `skillmint-nullables`;
//! this one exists only so `fee` and `extract` can be tested without a
//! dependency cycle.

use crate::call::MintCall;
use crate::client::LedgerClient;
use crate::error::LedgerError;
use crate::receipt::TxReceipt;
use skillmint_types::{TokenId, TxRef, WalletAddress};

pub(crate) struct StubLedger {
    pub gas_price: Result<u128, ()>,
    pub total_supply: Result<u64, ()>,
    /// When set, `gas_price` never resolves (simulates a hung oracle).
    pub hang_gas_price: bool,
}

impl Default for StubLedger {
    fn default() -> Self {
        Self {
            gas_price: Ok(30_000_000_000),
            total_supply: Ok(0),
            hang_gas_price: false,
        }
    }
}

impl LedgerClient for StubLedger {
    async fn block_height(&self) -> Result<u64, LedgerError> {
        Ok(1)
    }

    async fn wallet_balance(&self, _wallet: &WalletAddress) -> Result<u128, LedgerError> {
        Ok(0)
    }

    async fn gas_price(&self) -> Result<u128, LedgerError> {
        if self.hang_gas_price {
            std::future::pending::<()>().await;
        }
        self.gas_price
            .map_err(|_| LedgerError::Unreachable("stub oracle down".into()))
    }

    async fn estimate_gas(&self, _call: &MintCall) -> Result<u64, LedgerError> {
        Ok(150_000)
    }

    async fn submit(
        &self,
        _call: &MintCall,
        _gas_limit: u64,
        _fee_per_gas: u128,
    ) -> Result<TxRef, LedgerError> {
        Err(LedgerError::Rpc("stub does not submit".into()))
    }

    async fn transaction_receipt(&self, _tx_ref: &TxRef) -> Result<Option<TxReceipt>, LedgerError> {
        Ok(None)
    }

    async fn owner_of(&self, token: TokenId) -> Result<WalletAddress, LedgerError> {
        Err(LedgerError::NotFound(format!("token {token}")))
    }

    async fn token_reference(&self, token: TokenId) -> Result<String, LedgerError> {
        Err(LedgerError::NotFound(format!("token {token}")))
    }

    async fn token_metadata(&self, _token: TokenId) -> Result<Option<String>, LedgerError> {
        Ok(None)
    }

    async fn total_supply(&self) -> Result<u64, LedgerError> {
        self.total_supply
            .map_err(|_| LedgerError::Unreachable("stub supply down".into()))
    }

    async fn supports_metadata_mint(&self) -> Result<bool, LedgerError> {
        Ok(true)
    }
}
