//! Canonical collectible model.
//!
//! A [`CollectibleItem`] is produced by the normalizer from one raw chain
//! record and owned by the view that asked for it. Nothing in the engine
//! mutates an item after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::class::{self, CharacterClass};
use crate::constants::MAX_PROVENANCE_LEN;
use crate::{rarity, royalty};

/// A wallet address as reported by the chain (hex, `0x`-prefixed).
///
/// Equality is exact. Use [`WalletAddress::matches`] where casing of the
/// encoding must be tolerated.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another address.
    pub fn matches(&self, other: &str) -> bool {
        addresses_match(&self.0, other)
    }
}

/// Whether two hex addresses name the same wallet. Hex case is ignored.
pub fn addresses_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletAddress({})", self.0)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Class and accumulated points of an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Raw class id; may fall outside the closed class table.
    pub class_id: u64,
    /// Accumulated points, `0..=50`.
    pub points: u8,
}

impl Attribute {
    pub fn class(&self) -> Option<CharacterClass> {
        CharacterClass::from_id(self.class_id)
    }
}

/// The generated display name of an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub full_name: String,
    /// Drawn from the smaller OG naming pool.
    pub is_prestige: bool,
    pub prestige_tier: String,
}

/// One sale stamp in an item's provenance passport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    pub owner: WalletAddress,
    pub timestamp_ms: u64,
    pub sale_price_base_units: u64,
}

/// A collectible in canonical form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectibleItem {
    /// Opaque object id.
    pub id: String,
    /// Object version, when the source reported one.
    pub version: Option<String>,
    /// Object digest, when the source reported one.
    pub digest: Option<String>,
    /// Per-item serial number; default ordering and image lookup key.
    pub token_index: u64,
    pub display_name: String,
    pub description: String,
    pub image_ref: String,
    /// Latest holder. Independent of the passport, which records sales only.
    pub current_owner: WalletAddress,
    pub is_condemned: bool,
    pub bounty_metadata: String,
    pub attribute: Attribute,
    pub generated_name: GeneratedName,
    /// Sale stamps, oldest first, at most [`MAX_PROVENANCE_LEN`].
    pub provenance: Vec<ProvenanceEntry>,
}

impl CollectibleItem {
    pub fn class(&self) -> Option<CharacterClass> {
        self.attribute.class()
    }

    pub fn class_name(&self) -> &'static str {
        class::class_name(self.attribute.class_id)
    }

    /// Number of stamps recorded on the passport.
    pub fn passport_len(&self) -> usize {
        self.provenance.len()
    }

    /// Stamps left before the passport is maxed out.
    pub fn stamps_remaining(&self) -> usize {
        MAX_PROVENANCE_LEN.saturating_sub(self.provenance.len())
    }

    pub fn passport_is_full(&self) -> bool {
        self.provenance.len() >= MAX_PROVENANCE_LEN
    }

    /// See [`rarity::rarity_score`].
    pub fn rarity_score(&self) -> f64 {
        rarity::rarity_score(self)
    }

    /// See [`royalty::royalty_pct`].
    pub fn royalty_rate(&self) -> f64 {
        royalty::royalty_pct(self.provenance.len())
    }
}
