//! The closed character class table.
//!
//! Every item carries one of four classes. Each class has a publisher-assigned
//! population share; the rarity weight orders them rarest-first:
//!
//! - **Hood Nerd**: 5% of supply, weight 1
//! - **Gym Rat**: 20% of supply, weight 2
//! - **Fashion Killer**: 25% of supply, weight 3
//! - **Anger Issues**: 50% of supply, weight 4
//!
//! Class ids outside the table are not an error. They weigh
//! [`UNKNOWN_CLASS_WEIGHT`] so ranking never fails on them.

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_CLASS_WEIGHT;

/// One of the four character classes, keyed by its on-chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharacterClass {
    AngerIssues = 1,
    HoodNerd = 2,
    FashionKiller = 3,
    GymRat = 4,
}

impl CharacterClass {
    /// All classes in id order.
    pub const ALL: [CharacterClass; 4] = [
        Self::AngerIssues,
        Self::HoodNerd,
        Self::FashionKiller,
        Self::GymRat,
    ];

    /// Resolve an on-chain class id. `None` for ids outside the table.
    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(Self::AngerIssues),
            2 => Some(Self::HoodNerd),
            3 => Some(Self::FashionKiller),
            4 => Some(Self::GymRat),
            _ => None,
        }
    }

    /// The on-chain id.
    pub fn id(self) -> u64 {
        self as u64
    }

    /// Rarity weight; 1 is the rarest class.
    pub fn weight(self) -> f64 {
        match self {
            Self::HoodNerd => 1.0,
            Self::GymRat => 2.0,
            Self::FashionKiller => 3.0,
            Self::AngerIssues => 4.0,
        }
    }

    /// Human-readable class name for UI display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AngerIssues => "Anger Issues",
            Self::HoodNerd => "Hood Nerd",
            Self::FashionKiller => "Fashion Killer",
            Self::GymRat => "Gym Rat",
        }
    }

    /// Population-share label.
    pub fn rarity_label(self) -> &'static str {
        match self {
            Self::AngerIssues => "Common (50%)",
            Self::HoodNerd => "Very Rare (5%)",
            Self::FashionKiller => "Uncommon (25%)",
            Self::GymRat => "Rare (20%)",
        }
    }
}

/// Weight of a raw class id, falling back to the unknown-class sentinel.
pub fn class_weight(class_id: u64) -> f64 {
    CharacterClass::from_id(class_id)
        .map(CharacterClass::weight)
        .unwrap_or(UNKNOWN_CLASS_WEIGHT)
}

/// Display name of a raw class id.
pub fn class_name(class_id: u64) -> &'static str {
    CharacterClass::from_id(class_id)
        .map(CharacterClass::display_name)
        .unwrap_or("Unknown")
}
