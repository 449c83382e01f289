//! Named constants the engine depends on.
//!
//! These mirror the on-chain collection parameters. They are fixed for the
//! deployed package; changing them changes observable rankings.

/// Hard cap on provenance passport stamps per item.
pub const MAX_PROVENANCE_LEN: usize = 20;

/// Ceiling of an attribute's accumulated points.
pub const MAX_POINTS: u8 = 50;

/// Points at or below this value fall in the `low` band.
pub const POINTS_BAND_SPLIT: u8 = 25;

/// Passport lengths at or below this value fall in the `low` band.
pub const PROVENANCE_BAND_SPLIT: usize = 10;

/// Base weight for a class id outside the closed class table.
pub const UNKNOWN_CLASS_WEIGHT: f64 = 5.0;

/// Score added per missing passport stamp.
pub const STAMP_SCORE_STEP: f64 = 0.1;

/// Score added per missing attribute point.
pub const POINT_SCORE_STEP: f64 = 0.05;

/// Score removed for a prestige (OG) name.
pub const PRESTIGE_BONUS: f64 = 0.5;

/// Royalty percentage of a freshly minted item.
pub const BASE_ROYALTY_PCT: f64 = 1.0;

/// Royalty percentage added per passport stamp.
pub const ROYALTY_STEP_PCT: f64 = 0.95;

/// Royalty ceiling, reached at a full passport.
pub const MAX_ROYALTY_PCT: f64 = 20.0;

/// Decimal places of the payment asset's base unit.
pub const BASE_UNIT_DECIMALS: u32 = 9;
