use crate::constants::{BASE_ROYALTY_PCT, MAX_ROYALTY_PCT, ROYALTY_STEP_PCT};

/// Royalty percentage for a passport of the given length.
///
/// A fresh item pays 1%. Each stamp adds 0.95%, reaching 20% at a full
/// passport. Lengths beyond the passport cap are clamped to 20%.
pub fn royalty_pct(passport_len: usize) -> f64 {
    if passport_len == 0 {
        return BASE_ROYALTY_PCT;
    }
    let rate = BASE_ROYALTY_PCT + passport_len as f64 * ROYALTY_STEP_PCT;
    rate.min(MAX_ROYALTY_PCT)
}
