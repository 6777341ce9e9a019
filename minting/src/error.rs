use skillmint_types::TxRef;
use thiserror::Error;

/// Pipeline stage at which a mint failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintStage {
    Preflight,
    Submission,
    Confirmation,
}

#[derive(Debug, Error)]
pub enum MintError {
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Insufficient funds: balance {balance} below minimum {required}")]
    InsufficientFunds { balance: u128, required: u128 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    #[error("confirmation timed out for {tx_ref}; the transaction may still land, re-verify later by reference")]
    ConfirmationTimeout { tx_ref: TxRef },
}

impl MintError {
    pub fn stage(&self) -> MintStage {
        match self {
            Self::NetworkUnavailable(_) | Self::InsufficientFunds { .. } | Self::InvalidInput(_) => {
                MintStage::Preflight
            }
            Self::SubmissionFailed(_) => MintStage::Submission,
            Self::ConfirmationTimeout { .. } => MintStage::Confirmation,
        }
    }

    /// Whether retrying later could reasonably succeed.
    ///
    /// Note that retrying after a `ConfirmationTimeout` risks a duplicate
    /// credential — callers should dedupe via the evidence hash first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkUnavailable(_) | Self::ConfirmationTimeout { .. }
        )
    }
}
