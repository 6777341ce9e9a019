//! Deterministic test doubles for the Skillmint engine.
//!
//! The engine's only real external dependencies are the ledger (behind the
//! `LedgerClient` trait) and wall-clock time (passed in as a parameter).
//! This crate provides programmable stand-ins for both: every value they
//! return is deterministic, every failure mode can be switched on per test,
//! and nothing here ever touches a network.

pub mod clock;
pub mod ledger;

pub use clock::NullClock;
pub use ledger::{NullLedger, SubmittedCall};
