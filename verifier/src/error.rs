use skillmint_ledger::LedgerError;
use skillmint_types::TxRef;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("no transaction found for reference {0}")]
    NotFound(TxRef),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
