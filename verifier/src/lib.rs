//! Credential verification.
//!
//! Given only a transaction reference, re-derives the credential identifier,
//! reads current ownership and stored reference data from the ledger, and
//! reports validity. For assessment credentials there are two deeper checks:
//! the embedded assessment id against a claimed one, and the stored evidence
//! hash against recomputed facts.
//!
//! Everything here is read-only and safely retryable.

pub mod error;
pub mod outcome;
pub mod verifier;

pub use error::VerifyError;
pub use outcome::VerificationOutcome;
pub use verifier::CredentialVerifier;
