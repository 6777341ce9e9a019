//! The ledger client trait — every network round-trip the engine makes.

use crate::call::MintCall;
use crate::error::LedgerError;
use crate::receipt::TxReceipt;
use skillmint_types::{TokenId, TxRef, WalletAddress};

/// Capability the engine calls to reach the ledger and the credential
/// contract. Implementations own the RPC transport, wallet signing, and
/// nonce sequencing; the engine owns none of that.
///
/// All reads are idempotent. `submit` is not: a retried submission can mint
/// a duplicate credential, so retry policy lives with the caller.
pub trait LedgerClient: Send + Sync {
    /// Current block height. Doubles as the connectivity check.
    fn block_height(&self) -> impl std::future::Future<Output = Result<u64, LedgerError>> + Send;

    /// Spendable balance of the issuing wallet.
    fn wallet_balance(
        &self,
        wallet: &WalletAddress,
    ) -> impl std::future::Future<Output = Result<u128, LedgerError>> + Send;

    /// Current network fee conditions (fee-per-gas oracle read).
    fn gas_price(&self) -> impl std::future::Future<Output = Result<u128, LedgerError>> + Send;

    /// Estimated gas for a mint call.
    fn estimate_gas(
        &self,
        call: &MintCall,
    ) -> impl std::future::Future<Output = Result<u64, LedgerError>> + Send;

    /// Submit a mint call. Returns the transaction reference.
    fn submit(
        &self,
        call: &MintCall,
        gas_limit: u64,
        fee_per_gas: u128,
    ) -> impl std::future::Future<Output = Result<TxRef, LedgerError>> + Send;

    /// Receipt of a transaction, or `None` while unconfirmed.
    fn transaction_receipt(
        &self,
        tx_ref: &TxRef,
    ) -> impl std::future::Future<Output = Result<Option<TxReceipt>, LedgerError>> + Send;

    /// `ownerOf(id)`.
    fn owner_of(
        &self,
        token: TokenId,
    ) -> impl std::future::Future<Output = Result<WalletAddress, LedgerError>> + Send;

    /// `tokenReference(id)`.
    fn token_reference(
        &self,
        token: TokenId,
    ) -> impl std::future::Future<Output = Result<String, LedgerError>> + Send;

    /// `tokenMetadata(id)` — optional contract surface; absence is tolerated.
    fn token_metadata(
        &self,
        token: TokenId,
    ) -> impl std::future::Future<Output = Result<Option<String>, LedgerError>> + Send;

    /// `totalSupply()`.
    fn total_supply(&self) -> impl std::future::Future<Output = Result<u64, LedgerError>> + Send;

    /// Capability probe: does this deployment expose `mintWithMetadata`?
    fn supports_metadata_mint(
        &self,
    ) -> impl std::future::Future<Output = Result<bool, LedgerError>> + Send;
}

// A shared reference to a client is itself a client; lets several services
// borrow one connection.
impl<T: LedgerClient + Sync> LedgerClient for &T {
    async fn block_height(&self) -> Result<u64, LedgerError> {
        (**self).block_height().await
    }

    async fn wallet_balance(&self, wallet: &WalletAddress) -> Result<u128, LedgerError> {
        (**self).wallet_balance(wallet).await
    }

    async fn gas_price(&self) -> Result<u128, LedgerError> {
        (**self).gas_price().await
    }

    async fn estimate_gas(&self, call: &MintCall) -> Result<u64, LedgerError> {
        (**self).estimate_gas(call).await
    }

    async fn submit(
        &self,
        call: &MintCall,
        gas_limit: u64,
        fee_per_gas: u128,
    ) -> Result<TxRef, LedgerError> {
        (**self).submit(call, gas_limit, fee_per_gas).await
    }

    async fn transaction_receipt(&self, tx_ref: &TxRef) -> Result<Option<TxReceipt>, LedgerError> {
        (**self).transaction_receipt(tx_ref).await
    }

    async fn owner_of(&self, token: TokenId) -> Result<WalletAddress, LedgerError> {
        (**self).owner_of(token).await
    }

    async fn token_reference(&self, token: TokenId) -> Result<String, LedgerError> {
        (**self).token_reference(token).await
    }

    async fn token_metadata(&self, token: TokenId) -> Result<Option<String>, LedgerError> {
        (**self).token_metadata(token).await
    }

    async fn total_supply(&self) -> Result<u64, LedgerError> {
        (**self).total_supply().await
    }

    async fn supports_metadata_mint(&self) -> Result<bool, LedgerError> {
        (**self).supports_metadata_mint().await
    }
}
