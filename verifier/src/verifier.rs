//! The verifier itself.

use skillmint_ledger::{recover_token_id, LedgerClient, LedgerError, OnChainPayload};
use skillmint_scoring::{evidence_hash, EvidenceFacts};
use skillmint_types::TxRef;

use crate::error::VerifyError;
use crate::outcome::VerificationOutcome;

/// Verifies credentials from nothing but a transaction reference.
pub struct CredentialVerifier<C: LedgerClient> {
    client: C,
}

impl<C: LedgerClient> CredentialVerifier<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Verify that `tx_ref` minted a credential that still exists on the
    /// ledger, and read back its current owner and stored data.
    pub async fn verify(&self, tx_ref: &TxRef) -> Result<VerificationOutcome, VerifyError> {
        let receipt = self
            .client
            .transaction_receipt(tx_ref)
            .await?
            .ok_or(VerifyError::NotFound(*tx_ref))?;

        if !receipt.status {
            return Ok(VerificationOutcome::invalid("transaction reverted"));
        }

        let Some(token_id) = recover_token_id(&self.client, &receipt).await else {
            return Ok(VerificationOutcome::invalid(
                "credential identifier not recoverable from transaction",
            ));
        };

        let owner = match self.client.owner_of(token_id).await {
            Ok(owner) => owner,
            Err(LedgerError::NotFound(_)) => {
                return Ok(VerificationOutcome::invalid(format!(
                    "token {token_id} no longer exists on the contract"
                )));
            }
            Err(e) => return Err(e.into()),
        };
        let reference = match self.client.token_reference(token_id).await {
            Ok(reference) => Some(reference),
            Err(LedgerError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        };
        let metadata = self.client.token_metadata(token_id).await?;
        let assessment_id = metadata
            .as_deref()
            .and_then(|raw| OnChainPayload::from_json(raw).ok())
            .and_then(|payload| payload.assessment_id);

        tracing::debug!(tx = %tx_ref, token = %token_id, owner = %owner, "credential verified");
        Ok(VerificationOutcome {
            is_valid: true,
            token_id: Some(token_id),
            owner: Some(owner),
            reference,
            metadata,
            assessment_id,
            failure_reason: None,
        })
    }

    /// Verify that `tx_ref` attests *this specific* assessment.
    ///
    /// A mismatch returns `is_valid: false` even though the underlying
    /// transaction is perfectly valid — authenticity means the transaction
    /// attests the claim being made, not merely that it exists.
    pub async fn verify_assessment_authenticity(
        &self,
        tx_ref: &TxRef,
        expected_assessment_id: &str,
    ) -> Result<VerificationOutcome, VerifyError> {
        let outcome = self.verify(tx_ref).await?;
        if !outcome.is_valid {
            return Ok(outcome);
        }
        match outcome.assessment_id.as_deref() {
            Some(embedded) if embedded == expected_assessment_id => Ok(outcome),
            Some(embedded) => {
                tracing::warn!(
                    tx = %tx_ref,
                    expected = expected_assessment_id,
                    embedded,
                    "assessment id mismatch"
                );
                Ok(outcome.rejected("Assessment ID mismatch"))
            }
            None => Ok(outcome.rejected("no assessment id embedded on-chain")),
        }
    }

    /// Verify the claimed assessment facts against the evidence hash stored
    /// on-chain. Any single-field tampering changes the recomputed digest.
    pub async fn verify_assessment_evidence(
        &self,
        tx_ref: &TxRef,
        claimed_facts: &EvidenceFacts,
    ) -> Result<VerificationOutcome, VerifyError> {
        let outcome = self.verify(tx_ref).await?;
        if !outcome.is_valid {
            return Ok(outcome);
        }
        let stored = outcome
            .metadata
            .as_deref()
            .and_then(|raw| OnChainPayload::from_json(raw).ok())
            .and_then(|payload| payload.evidence_hash);
        match stored {
            Some(stored) if stored == evidence_hash(claimed_facts) => Ok(outcome),
            Some(_) => Ok(outcome.rejected("evidence hash mismatch: claimed facts were altered")),
            None => Ok(outcome.rejected("no evidence hash embedded on-chain")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmint_minting::{BadgeDraft, MintOptions, MintingConfig, MintingService};
    use skillmint_nullables::NullLedger;
    use skillmint_types::{
        AchievementDetails, BadgeMetadata, ContractAddress, EmployerInfo, EvidenceHash,
        RarityInfo, RarityTier, SkillProgression, Timestamp, VerificationData,
        VerificationMethod, WalletAddress,
    };

    fn facts() -> EvidenceFacts {
        EvidenceFacts {
            assessment_id: "asmt-001".into(),
            user_id: "user-42".into(),
            total_score: 87.5,
            completed_at: Timestamp::new(1_700_000_000),
            skills: vec![],
        }
    }

    fn metadata_with_evidence(evidence: Option<EvidenceHash>) -> BadgeMetadata {
        BadgeMetadata {
            skill_progression: SkillProgression {
                skill_level: 3,
                experience_points: 850,
                competency_areas: vec!["Rust".into()],
            },
            achievement_details: AchievementDetails {
                code_quality: 88,
                efficiency: 82,
                creativity: 90,
                best_practices: 85,
                complexity: "advanced".into(),
                strengths: vec![],
                improvement_areas: vec![],
            },
            verification_data: VerificationData {
                issued_at: Timestamp::new(1_700_000_000),
                issuer_id: "skillmint".into(),
                verification_method: VerificationMethod::Assessment,
                evidence_hash: evidence,
            },
            rarity: RarityInfo {
                level: RarityTier::Rare,
                total_issued: 1247,
                rarity_score: 81,
            },
            employer_info: EmployerInfo {
                job_relevance: vec![],
                market_value: 80,
                demand_level: "high".into(),
                salary_impact: 21,
            },
        }
    }

    /// Mint a credential on a shared null ledger and hand back the service
    /// (which owns the ledger) plus the transaction reference.
    async fn mint_one(
        evidence: Option<EvidenceHash>,
    ) -> (MintingService<NullLedger>, TxRef) {
        let config = MintingConfig::for_dev(
            ContractAddress::new("0x00c0ffee"),
            WalletAddress::new("0xissuer"),
        );
        let service = MintingService::new(NullLedger::new(), config);
        let mut draft = BadgeDraft::new("Rust - Excellent Performance", "Rust", 3);
        draft.assessment_id = Some("asmt-001".into());
        let minted = service
            .mint(
                &WalletAddress::new("0xrecipient"),
                &draft,
                Some(&metadata_with_evidence(evidence)),
                &MintOptions::default(),
                Timestamp::new(1_700_000_100),
            )
            .await
            .unwrap();
        (service, minted.tx_ref)
    }

    #[tokio::test]
    async fn verify_round_trips_a_minted_credential() {
        let (service, tx_ref) = mint_one(None).await;
        let verifier = CredentialVerifier::new(service.client());
        let outcome = verifier.verify(&tx_ref).await.unwrap();

        assert!(outcome.is_valid);
        assert_eq!(outcome.owner.unwrap(), WalletAddress::new("0xrecipient"));
        assert_eq!(
            outcome.reference.as_deref(),
            Some("Rust - Excellent Performance|L3")
        );
        assert_eq!(outcome.assessment_id.as_deref(), Some("asmt-001"));
    }

    #[tokio::test]
    async fn unknown_reference_is_not_found() {
        let verifier = CredentialVerifier::new(NullLedger::new());
        let err = verifier.verify(&TxRef::new([0x99; 32])).await.unwrap_err();
        assert!(matches!(err, VerifyError::NotFound(_)));
    }

    #[tokio::test]
    async fn transient_reference_read_failure_is_an_error_not_a_gap() {
        let (service, tx_ref) = mint_one(None).await;
        service.client().fail_token_reference();
        let verifier = CredentialVerifier::new(service.client());
        let err = verifier.verify(&tx_ref).await.unwrap_err();
        assert!(matches!(err, VerifyError::Ledger(_)));
    }

    #[tokio::test]
    async fn matching_assessment_id_is_authentic() {
        let (service, tx_ref) = mint_one(None).await;
        let verifier = CredentialVerifier::new(service.client());
        let outcome = verifier
            .verify_assessment_authenticity(&tx_ref, "asmt-001")
            .await
            .unwrap();
        assert!(outcome.is_valid);
    }

    #[tokio::test]
    async fn mismatched_assessment_id_is_rejected() {
        let (service, tx_ref) = mint_one(None).await;
        let verifier = CredentialVerifier::new(service.client());
        let outcome = verifier
            .verify_assessment_authenticity(&tx_ref, "asmt-999")
            .await
            .unwrap();
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.failure_reason.as_deref(),
            Some("Assessment ID mismatch")
        );
    }

    #[tokio::test]
    async fn tampered_on_chain_payload_fails_authenticity() {
        let (service, tx_ref) = mint_one(None).await;
        service
            .client()
            .tamper_metadata(skillmint_types::TokenId(0), "{\"garbage\":true}");
        let verifier = CredentialVerifier::new(service.client());
        let outcome = verifier
            .verify_assessment_authenticity(&tx_ref, "asmt-001")
            .await
            .unwrap();
        assert!(!outcome.is_valid);
    }

    #[tokio::test]
    async fn original_facts_match_stored_evidence() {
        let evidence = evidence_hash(&facts());
        let (service, tx_ref) = mint_one(Some(evidence)).await;
        let verifier = CredentialVerifier::new(service.client());
        let outcome = verifier
            .verify_assessment_evidence(&tx_ref, &facts())
            .await
            .unwrap();
        assert!(outcome.is_valid);
    }

    #[tokio::test]
    async fn tampered_facts_fail_the_evidence_check() {
        let evidence = evidence_hash(&facts());
        let (service, tx_ref) = mint_one(Some(evidence)).await;
        let verifier = CredentialVerifier::new(service.client());
        let mut tampered = facts();
        tampered.total_score = 99.9;
        let outcome = verifier
            .verify_assessment_evidence(&tx_ref, &tampered)
            .await
            .unwrap();
        assert!(!outcome.is_valid);
        assert!(outcome.failure_reason.unwrap().contains("evidence hash"));
    }
}
