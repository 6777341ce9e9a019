//! The mint pipeline.

use std::time::Duration;

use skillmint_ledger::{
    credential_reference, recover_token_id, FeeEstimator, LedgerClient, MintCall, MintCallShape,
    OnChainPayload, TxReceipt,
};
use skillmint_scoring::{compute_rarity, AchievementScores};
use skillmint_types::{
    Badge, BadgeMetadata, LedgerVerificationData, Timestamp, TxRef, VerificationStatus,
    WalletAddress,
};

use crate::config::{MintOptions, MintingConfig};
use crate::draft::BadgeDraft;
use crate::error::MintError;
use crate::result::MintedCredential;

/// Timeout for the preflight connection and funds check.
const PREFLIGHT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the confirmation wait.
const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Interval between receipt polls while waiting for confirmation.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Conservative gas limit used when estimation fails, sized for the simple
/// call shape.
const SIMPLE_CALL_GAS_FALLBACK: u64 = 200_000;

/// Mints credentials against a deployed contract.
///
/// Holds no mutable state between calls; safe to invoke concurrently for
/// different recipients. Concurrent mints from the same issuing wallet must
/// be serialized externally — the wallet's nonce sequencing is not owned
/// here.
pub struct MintingService<C: LedgerClient> {
    client: C,
    config: MintingConfig,
    fee: FeeEstimator,
    call_shape: MintCallShape,
}

impl<C: LedgerClient> MintingService<C> {
    /// Construct a service that assumes the enhanced call shape.
    pub fn new(client: C, config: MintingConfig) -> Self {
        Self {
            client,
            config,
            fee: FeeEstimator::default(),
            call_shape: MintCallShape::EnhancedMint,
        }
    }

    /// Construct a service, probing the contract once for its supported
    /// call shape.
    pub async fn with_probed_call_shape(
        client: C,
        config: MintingConfig,
    ) -> Result<Self, MintError> {
        let supported = client
            .supports_metadata_mint()
            .await
            .map_err(|e| MintError::NetworkUnavailable(e.to_string()))?;
        let call_shape = if supported {
            MintCallShape::EnhancedMint
        } else {
            MintCallShape::SimpleMint
        };
        tracing::debug!(?call_shape, "probed contract call shape");
        Ok(Self {
            client,
            config,
            fee: FeeEstimator::default(),
            call_shape,
        })
    }

    pub fn config(&self) -> &MintingConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Mint a credential for `recipient`.
    ///
    /// Every failure is a typed [`MintError`]; a `token_id` of `None` on the
    /// success path means both identifier-recovery strategies failed while
    /// the ledger write itself went through.
    pub async fn mint(
        &self,
        recipient: &WalletAddress,
        draft: &BadgeDraft,
        metadata: Option<&BadgeMetadata>,
        options: &MintOptions,
        now: Timestamp,
    ) -> Result<MintedCredential, MintError> {
        if !recipient.is_valid() {
            return Err(MintError::InvalidInput("empty recipient address".into()));
        }
        if draft.name.is_empty() {
            return Err(MintError::InvalidInput("empty badge name".into()));
        }

        self.preflight().await?;

        let mut metadata = metadata.cloned();
        if options.rarity_calculation {
            self.fill_in_rarity(draft, metadata.as_mut()).await;
        }

        let reference = credential_reference(&draft.name, draft.skill_level);
        let payload = if options.include_metadata {
            self.build_payload(draft, metadata.as_ref())?
        } else {
            None
        };

        if options.generate_off_chain_store {
            // Reserved path; nothing is stored yet.
            tracing::debug!(badge = %draft.name, "off-chain store generation requested (placeholder)");
        }

        let fee_per_gas = self.fee.estimate(&self.client).await;
        let (tx_ref, receipt, submitted_shape) = self
            .submit_with_fallback(recipient, draft, &reference, payload.as_deref(), fee_per_gas)
            .await?;

        let token_id = recover_token_id(&self.client, &receipt).await;
        if token_id.is_none() {
            tracing::warn!(tx = %tx_ref, "minted but credential identifier not recoverable");
        }

        // The record must reflect what actually landed: a simple-shape
        // submission carries no metadata payload on-chain.
        let on_chain_payload = match submitted_shape {
            MintCallShape::EnhancedMint => payload,
            MintCallShape::SimpleMint => None,
        };

        let explorer_url = self.config.network.explorer_tx_url(&tx_ref);
        let ledger_data = LedgerVerificationData {
            contract_address: self.config.contract_address.clone(),
            token_id,
            network: self.config.network,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            confirmations: receipt.confirmations,
            explorer_url: explorer_url.clone(),
            on_chain_payload,
        };

        let status = if options.enable_verification {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        };

        let badge = Badge {
            id: format!("badge-{}", &tx_ref.to_string()[2..10]),
            name: draft.name.clone(),
            description: draft.description.clone(),
            icon: draft.icon.clone(),
            tx_ref,
            issued_at: now,
            verification_status: status,
            metadata,
            ledger_data: Some(ledger_data),
        };

        tracing::info!(tx = %tx_ref, token = ?token_id, badge = %badge.name, "credential minted");
        Ok(MintedCredential {
            badge,
            tx_ref,
            token_id,
            explorer_url,
        })
    }

    /// Connection and funds check: fail fast rather than attempt a mint
    /// doomed to fail.
    async fn preflight(&self) -> Result<(), MintError> {
        let checks = async {
            let height = self.client.block_height().await?;
            let balance = self
                .client
                .wallet_balance(&self.config.wallet_address)
                .await?;
            Ok::<_, skillmint_ledger::LedgerError>((height, balance))
        };
        let (height, balance) = tokio::time::timeout(PREFLIGHT_TIMEOUT, checks)
            .await
            .map_err(|_| MintError::NetworkUnavailable("preflight check timed out".into()))?
            .map_err(|e| MintError::NetworkUnavailable(e.to_string()))?;

        let required = u128::from(self.config.min_wallet_balance);
        if balance < required {
            return Err(MintError::InsufficientFunds { balance, required });
        }
        tracing::debug!(height, balance, "preflight ok");
        Ok(())
    }

    /// Recompute rarity from the ledger's supply accessor. Best effort: a
    /// failed supply read keeps whatever rarity the metadata already has.
    async fn fill_in_rarity(&self, draft: &BadgeDraft, metadata: Option<&mut BadgeMetadata>) {
        let Some(meta) = metadata else { return };
        match self.client.total_supply().await {
            Ok(total_issued) => {
                let details = &meta.achievement_details;
                let scores = AchievementScores::new(
                    details.code_quality,
                    details.efficiency,
                    details.creativity,
                    details.best_practices,
                );
                meta.rarity = compute_rarity(draft.skill_level, &scores, total_issued);
            }
            Err(e) => {
                tracing::warn!(error = %e, "supply read failed, keeping caller-supplied rarity");
            }
        }
    }

    fn build_payload(
        &self,
        draft: &BadgeDraft,
        metadata: Option<&BadgeMetadata>,
    ) -> Result<Option<String>, MintError> {
        let Some(meta) = metadata else {
            return Ok(None);
        };
        let payload = OnChainPayload {
            badge_name: draft.name.clone(),
            skill_name: draft.skill_name.clone(),
            skill_level: draft.skill_level,
            rarity: meta.rarity.level,
            rarity_score: meta.rarity.rarity_score,
            assessment_id: draft.assessment_id.clone(),
            evidence_hash: meta.verification_data.evidence_hash,
        };
        payload
            .to_json()
            .map(Some)
            .map_err(|e| MintError::InvalidInput(e.to_string()))
    }

    /// Submit the preferred call shape; on failure retry exactly once with
    /// the simple shape at 80% of the enhanced gas estimate. Both attempts
    /// share the same fee value. Returns the shape that actually landed.
    async fn submit_with_fallback(
        &self,
        recipient: &WalletAddress,
        draft: &BadgeDraft,
        reference: &str,
        payload: Option<&str>,
        fee_per_gas: u128,
    ) -> Result<(TxRef, TxReceipt, MintCallShape), MintError> {
        let preferred = match (self.call_shape, payload) {
            (MintCallShape::EnhancedMint, Some(payload)) => MintCall::WithMetadata {
                to: recipient.clone(),
                reference: reference.to_string(),
                skill_name: draft.skill_name.clone(),
                metadata_payload: payload.to_string(),
            },
            _ => MintCall::Simple {
                to: recipient.clone(),
                reference: reference.to_string(),
                skill_name: draft.skill_name.clone(),
            },
        };

        let gas_limit = match self.client.estimate_gas(&preferred).await {
            Ok(gas) => gas,
            Err(e) => {
                tracing::warn!(error = %e, fallback = SIMPLE_CALL_GAS_FALLBACK, "gas estimation failed");
                SIMPLE_CALL_GAS_FALLBACK
            }
        };

        let (tx_ref, submitted_shape) =
            match self.client.submit(&preferred, gas_limit, fee_per_gas).await {
                Ok(tx_ref) => (tx_ref, preferred.shape()),
                Err(primary_err) if preferred.shape() == MintCallShape::EnhancedMint => {
                    tracing::warn!(error = %primary_err, "enhanced mint failed, retrying with simple call");
                    let simple = preferred.to_simple();
                    let reduced_gas = gas_limit * 8 / 10;
                    let tx_ref = self
                        .client
                        .submit(&simple, reduced_gas, fee_per_gas)
                        .await
                        .map_err(|fallback_err| {
                            MintError::SubmissionFailed(format!(
                                "enhanced: {primary_err}; simple: {fallback_err}"
                            ))
                        })?;
                    (tx_ref, MintCallShape::SimpleMint)
                }
                Err(e) => return Err(MintError::SubmissionFailed(e.to_string())),
            };

        let receipt = self.await_confirmation(tx_ref).await?;
        if !receipt.status {
            return Err(MintError::SubmissionFailed(format!(
                "transaction {tx_ref} reverted on-chain"
            )));
        }
        Ok((tx_ref, receipt, submitted_shape))
    }

    /// Wait for exactly one confirmation. Absence of a receipt within the
    /// timeout is an error, never a silent success.
    async fn await_confirmation(&self, tx_ref: TxRef) -> Result<TxReceipt, MintError> {
        let poll = async {
            loop {
                match self.client.transaction_receipt(&tx_ref).await {
                    Ok(Some(receipt)) => return Ok(receipt),
                    Ok(None) => tokio::time::sleep(RECEIPT_POLL_INTERVAL).await,
                    Err(e) => return Err(MintError::NetworkUnavailable(e.to_string())),
                }
            }
        };
        tokio::time::timeout(CONFIRMATION_TIMEOUT, poll)
            .await
            .map_err(|_| MintError::ConfirmationTimeout { tx_ref })?
    }
}
