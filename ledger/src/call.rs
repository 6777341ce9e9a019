//! Mint call shapes.
//!
//! The contract exposes two mint entry points: the enhanced
//! `mintWithMetadata` and the plain `mint`. Rather than duck-typed probing
//! on every call, the shape is an explicit two-variant strategy; which one a
//! deployment prefers is decided once via [`LedgerClient::supports_metadata_mint`].
//!
//! [`LedgerClient::supports_metadata_mint`]: crate::client::LedgerClient::supports_metadata_mint

use serde::{Deserialize, Serialize};
use skillmint_types::WalletAddress;

/// Maximum length of the on-ledger credential reference string.
///
/// Many call shapes reject oversized payloads; anything richer than the
/// reference goes into the separate compact metadata payload.
pub const MAX_REFERENCE_BYTES: usize = 96;

/// Which mint entry point a deployment supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintCallShape {
    /// `mintWithMetadata(to, ref, skillName, metadataPayload)`.
    EnhancedMint,
    /// `mint(to, ref, skillName)`.
    SimpleMint,
}

/// A concrete mint call ready for submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MintCall {
    WithMetadata {
        to: WalletAddress,
        reference: String,
        skill_name: String,
        metadata_payload: String,
    },
    Simple {
        to: WalletAddress,
        reference: String,
        skill_name: String,
    },
}

impl MintCall {
    pub fn shape(&self) -> MintCallShape {
        match self {
            Self::WithMetadata { .. } => MintCallShape::EnhancedMint,
            Self::Simple { .. } => MintCallShape::SimpleMint,
        }
    }

    /// The same call downgraded to the simple shape (metadata dropped).
    pub fn to_simple(&self) -> Self {
        match self {
            Self::WithMetadata {
                to,
                reference,
                skill_name,
                ..
            } => Self::Simple {
                to: to.clone(),
                reference: reference.clone(),
                skill_name: skill_name.clone(),
            },
            simple @ Self::Simple { .. } => simple.clone(),
        }
    }

    pub fn recipient(&self) -> &WalletAddress {
        match self {
            Self::WithMetadata { to, .. } | Self::Simple { to, .. } => to,
        }
    }
}

/// Build the short, ledger-storable credential reference.
///
/// Encodes the badge name and skill level, truncated to
/// [`MAX_REFERENCE_BYTES`] on a char boundary.
pub fn credential_reference(badge_name: &str, skill_level: u8) -> String {
    let full = format!("{badge_name}|L{skill_level}");
    if full.len() <= MAX_REFERENCE_BYTES {
        return full;
    }
    let mut end = MAX_REFERENCE_BYTES;
    while !full.is_char_boundary(end) {
        end -= 1;
    }
    full[..end].to_string()
}
