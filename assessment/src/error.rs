use skillmint_minting::MintError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid assessment: {0}")]
    InvalidInput(String),

    /// Minting failures propagate unchanged — no silent downgrade.
    #[error(transparent)]
    Mint(#[from] MintError),
}
