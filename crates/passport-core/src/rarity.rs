use crate::class::class_weight;
use crate::constants::{
    MAX_POINTS, MAX_PROVENANCE_LEN, POINT_SCORE_STEP, PRESTIGE_BONUS, STAMP_SCORE_STEP,
};
use crate::item::CollectibleItem;

/// Compute the rarity score of an item. Lower is rarer.
///
/// Seeded from the class weight (1 for the rarest class, 5 for unknown ids),
/// then:
/// - `+0.1` per stamp missing from a full passport (0.0–2.0)
/// - `+0.05` per point missing from the ceiling (0.0–2.5)
/// - `-0.5` for a prestige name
///
/// The scale is open-ended and only meaningful for relative ordering. It
/// depends on class id, points, passport length and the prestige flag only.
pub fn rarity_score(item: &CollectibleItem) -> f64 {
    score_components(
        item.attribute.class_id,
        item.attribute.points,
        item.provenance.len(),
        item.generated_name.is_prestige,
    )
}

/// Score from the raw inputs.
pub fn score_components(class_id: u64, points: u8, passport_len: usize, is_prestige: bool) -> f64 {
    let mut score = class_weight(class_id);

    let missing_stamps = MAX_PROVENANCE_LEN.saturating_sub(passport_len);
    score += missing_stamps as f64 * STAMP_SCORE_STEP;

    let missing_points = MAX_POINTS.saturating_sub(points);
    score += missing_points as f64 * POINT_SCORE_STEP;

    if is_prestige {
        score -= PRESTIGE_BONUS;
    }

    score
}
