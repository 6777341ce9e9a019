use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger read timed out: {0}")]
    Timeout(String),

    #[error("RPC unreachable: {0}")]
    Unreachable(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("contract does not support this call shape: {0}")]
    CallShapeUnsupported(String),

    #[error("RPC error: {0}")]
    Rpc(String),
}

impl LedgerError {
    /// Whether retrying later could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unreachable(_))
    }
}
