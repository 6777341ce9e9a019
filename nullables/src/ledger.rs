//! Nullable ledger — a programmable in-memory [`LedgerClient`].
//!
//! Behaves like a tiny single-writer credential contract: submissions mint
//! sequential token ids, record ownership/reference/metadata, and produce a
//! receipt immediately. Every failure mode of the real thing can be switched
//! on per call site.

use skillmint_ledger::{EventLog, LedgerClient, LedgerError, MintCall, TxReceipt};
use skillmint_types::{ContractAddress, TokenId, TxRef, WalletAddress};
use std::collections::HashMap;
use std::sync::Mutex;

/// A recorded submission, for asserting on what was sent.
#[derive(Clone, Debug)]
pub struct SubmittedCall {
    pub call: MintCall,
    pub gas_limit: u64,
    pub fee_per_gas: u128,
}

#[derive(Default)]
struct Inner {
    block_height: u64,
    balances: HashMap<String, u128>,
    default_balance: u128,
    gas_price: u128,
    gas_estimate: u64,
    total_supply: u64,
    owners: HashMap<u64, WalletAddress>,
    references: HashMap<u64, String>,
    metadata: HashMap<u64, String>,
    receipts: HashMap<TxRef, TxReceipt>,
    submissions: Vec<SubmittedCall>,
    tx_counter: u64,
    supports_metadata: bool,
    // Failure switches
    fail_block_height: bool,
    fail_gas_price: bool,
    fail_gas_estimate: bool,
    fail_enhanced_submit: bool,
    fail_all_submits: bool,
    fail_total_supply: bool,
    fail_token_reference: bool,
    omit_transfer_event: bool,
    withhold_receipts: bool,
}

/// A deterministic ledger for testing.
pub struct NullLedger {
    contract: ContractAddress,
    inner: Mutex<Inner>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self {
            contract: ContractAddress::new("0x00c0ffee"),
            inner: Mutex::new(Inner {
                block_height: 1000,
                default_balance: 1_000_000_000_000_000_000, // plenty
                gas_price: 30_000_000_000,
                gas_estimate: 150_000,
                supports_metadata: true,
                ..Inner::default()
            }),
        }
    }

    // ── Programmable state ─────────────────────────────────────────────

    pub fn set_balance(&self, wallet: &WalletAddress, balance: u128) {
        self.inner
            .lock()
            .unwrap()
            .balances
            .insert(wallet.as_str().to_string(), balance);
    }

    pub fn set_gas_price(&self, price: u128) {
        self.inner.lock().unwrap().gas_price = price;
    }

    pub fn set_gas_estimate(&self, gas: u64) {
        self.inner.lock().unwrap().gas_estimate = gas;
    }

    pub fn set_total_supply(&self, supply: u64) {
        self.inner.lock().unwrap().total_supply = supply;
    }

    pub fn set_supports_metadata(&self, supported: bool) {
        self.inner.lock().unwrap().supports_metadata = supported;
    }

    // ── Failure switches ───────────────────────────────────────────────

    pub fn fail_block_height(&self) {
        self.inner.lock().unwrap().fail_block_height = true;
    }

    pub fn fail_gas_price(&self) {
        self.inner.lock().unwrap().fail_gas_price = true;
    }

    pub fn fail_gas_estimate(&self) {
        self.inner.lock().unwrap().fail_gas_estimate = true;
    }

    /// Enhanced mint calls fail; simple mint still works.
    pub fn fail_enhanced_submit(&self) {
        self.inner.lock().unwrap().fail_enhanced_submit = true;
    }

    /// Every submission fails.
    pub fn fail_all_submits(&self) {
        self.inner.lock().unwrap().fail_all_submits = true;
    }

    pub fn fail_total_supply(&self) {
        self.inner.lock().unwrap().fail_total_supply = true;
    }

    /// `token_reference` reads fail as unreachable (not as missing).
    pub fn fail_token_reference(&self) {
        self.inner.lock().unwrap().fail_token_reference = true;
    }

    /// Receipts carry no transfer event (forces the supply heuristic).
    pub fn omit_transfer_event(&self) {
        self.inner.lock().unwrap().omit_transfer_event = true;
    }

    /// Submissions never confirm (forces a confirmation timeout).
    pub fn withhold_receipts(&self) {
        self.inner.lock().unwrap().withhold_receipts = true;
    }

    // ── Recorded activity ──────────────────────────────────────────────

    pub fn submissions(&self) -> Vec<SubmittedCall> {
        self.inner.lock().unwrap().submissions.clone()
    }

    pub fn minted_count(&self) -> u64 {
        self.inner.lock().unwrap().total_supply
    }

    /// Overwrite the stored metadata payload of a token (tamper with it).
    pub fn tamper_metadata(&self, token: TokenId, payload: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .metadata
            .insert(token.value(), payload.into());
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerClient for NullLedger {
    async fn block_height(&self) -> Result<u64, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_block_height {
            return Err(LedgerError::Unreachable("null ledger offline".into()));
        }
        Ok(inner.block_height)
    }

    async fn wallet_balance(&self, wallet: &WalletAddress) -> Result<u128, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_block_height {
            return Err(LedgerError::Unreachable("null ledger offline".into()));
        }
        Ok(inner
            .balances
            .get(wallet.as_str())
            .copied()
            .unwrap_or(inner.default_balance))
    }

    async fn gas_price(&self) -> Result<u128, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_gas_price {
            return Err(LedgerError::Unreachable("fee oracle offline".into()));
        }
        Ok(inner.gas_price)
    }

    async fn estimate_gas(&self, _call: &MintCall) -> Result<u64, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_gas_estimate {
            return Err(LedgerError::Rpc("gas estimation failed".into()));
        }
        Ok(inner.gas_estimate)
    }

    async fn submit(
        &self,
        call: &MintCall,
        gas_limit: u64,
        fee_per_gas: u128,
    ) -> Result<TxRef, LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.submissions.push(SubmittedCall {
            call: call.clone(),
            gas_limit,
            fee_per_gas,
        });

        if inner.fail_all_submits {
            return Err(LedgerError::Rpc("submission rejected".into()));
        }
        if inner.fail_enhanced_submit && matches!(call, MintCall::WithMetadata { .. }) {
            return Err(LedgerError::CallShapeUnsupported(
                "mintWithMetadata not deployed".into(),
            ));
        }

        inner.tx_counter += 1;
        let mut ref_bytes = [0u8; 32];
        ref_bytes[24..].copy_from_slice(&inner.tx_counter.to_be_bytes());
        let tx_ref = TxRef::new(ref_bytes);

        let token = TokenId(inner.total_supply);
        inner.total_supply += 1;
        inner.owners.insert(token.value(), call.recipient().clone());
        let (reference, metadata_payload) = match call {
            MintCall::WithMetadata {
                reference,
                metadata_payload,
                ..
            } => (reference.clone(), Some(metadata_payload.clone())),
            MintCall::Simple { reference, .. } => (reference.clone(), None),
        };
        inner.references.insert(token.value(), reference);
        if let Some(payload) = metadata_payload {
            inner.metadata.insert(token.value(), payload);
        }

        if !inner.withhold_receipts {
            let logs = if inner.omit_transfer_event {
                Vec::new()
            } else {
                vec![EventLog::transfer(self.contract.clone(), token)]
            };
            let receipt = TxReceipt {
                tx_ref,
                block_number: inner.block_height + 1,
                gas_used: gas_limit.min(inner.gas_estimate),
                status: true,
                confirmations: 1,
                logs,
            };
            inner.receipts.insert(tx_ref, receipt);
        }

        Ok(tx_ref)
    }

    async fn transaction_receipt(&self, tx_ref: &TxRef) -> Result<Option<TxReceipt>, LedgerError> {
        Ok(self.inner.lock().unwrap().receipts.get(tx_ref).cloned())
    }

    async fn owner_of(&self, token: TokenId) -> Result<WalletAddress, LedgerError> {
        self.inner
            .lock()
            .unwrap()
            .owners
            .get(&token.value())
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(format!("token {token}")))
    }

    async fn token_reference(&self, token: TokenId) -> Result<String, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_token_reference {
            return Err(LedgerError::Unreachable("null ledger offline".into()));
        }
        inner
            .references
            .get(&token.value())
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(format!("token {token}")))
    }

    async fn token_metadata(&self, token: TokenId) -> Result<Option<String>, LedgerError> {
        Ok(self.inner.lock().unwrap().metadata.get(&token.value()).cloned())
    }

    async fn total_supply(&self) -> Result<u64, LedgerError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_total_supply {
            return Err(LedgerError::Unreachable("null ledger offline".into()));
        }
        Ok(inner.total_supply)
    }

    async fn supports_metadata_mint(&self) -> Result<bool, LedgerError> {
        Ok(self.inner.lock().unwrap().supports_metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn tx_refs_stay_unique_well_past_a_byte_of_submissions() {
        let ledger = NullLedger::new();
        let call = MintCall::Simple {
            to: WalletAddress::new("0xrecipient"),
            reference: "Rust|L1".into(),
            skill_name: "Rust".into(),
        };

        let mut seen = HashSet::new();
        for _ in 0..300 {
            let tx_ref = ledger.submit(&call, 100_000, 1).await.unwrap();
            assert!(seen.insert(tx_ref), "duplicate tx ref {tx_ref}");
        }
        assert_eq!(ledger.minted_count(), 300);
    }
}
