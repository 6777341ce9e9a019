//! Tracing subscriber setup.
//!
//! The minting service itself only emits `tracing` events; embedding
//! applications decide where they go. This module is the convenience path
//! for binaries that want the engine's config to drive the subscriber:
//! `log_format` picks human lines or NDJSON, `log_level` seeds the filter,
//! and `RUST_LOG` overrides both at runtime.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::MintingConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for development.
    Human,
    /// Newline-delimited JSON for log aggregation.
    Json,
}

impl LogFormat {
    /// Parse from a config string; anything other than `"json"` is human.
    pub fn from_config(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Install the global subscriber according to `config.log_format` and
/// `config.log_level`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &MintingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_config(&config.log_format) {
        LogFormat::Human => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
    }
}
