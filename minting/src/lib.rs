//! Credential minting service.
//!
//! Orchestrates the full mint pipeline: preflight connection and funds
//! checks, rarity fill-in, credential-reference construction, gas estimation
//! with fallback, submission with call-shape fallback, confirmation wait,
//! identifier extraction, and result assembly.
//!
//! The service is an explicit, caller-constructed object — configuration in,
//! client handle out. No hidden process-wide state; tests instantiate
//! independent services.

pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod result;
pub mod service;

pub use config::{MintOptions, MintingConfig};
pub use draft::BadgeDraft;
pub use error::{MintError, MintStage};
pub use logging::{init_logging, LogFormat};
pub use result::{MintedCredential, MintingResult};
pub use service::MintingService;
