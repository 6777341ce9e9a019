//! Pure scoring primitives for the Skillmint engine.
//!
//! - **Rarity engine**: skill level + achievement sub-scores + issued count
//!   → rarity tier and numeric score. Total: never fails, substitutes a
//!   neutral default for missing inputs.
//! - **Evidence hashing**: canonical Blake2b-256 digest over the immutable
//!   facts of an award, relied on later for tamper detection.
//!
//! No I/O anywhere in this crate.

pub mod evidence;
pub mod rarity;

pub use evidence::{evidence_hash, EvidenceFacts, SkillFact};
pub use rarity::{compute_rarity, AchievementScores};
