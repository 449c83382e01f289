//! Bloodline aggregation: one wallet's footprint across every passport in a
//! collection snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::CollectibleItem;

/// An item carrying at least one stamp from the wallet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffectedItem {
    pub item: CollectibleItem,
    /// Stamps from the wallet on this item.
    pub stamp_count: usize,
    /// Timestamp of the wallet's last stamp in passport order.
    pub last_stamp_timestamp_ms: u64,
}

/// Aggregate footprint of one wallet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodlineStats {
    pub total_stamps: usize,
    /// Most-stamped first; ties keep snapshot order.
    pub affected_items: Vec<AffectedItem>,
    /// Share of analyzed items carrying the wallet, `0.0..=100.0`.
    pub collection_percentage: f64,
    /// Sum of sale prices over every matching stamp.
    pub total_sales_volume_base_units: u128,
    /// Size of the snapshot the stats were computed over.
    pub analyzed_items: usize,
}

impl BloodlineStats {
    pub fn is_empty(&self) -> bool {
        self.affected_items.is_empty()
    }
}

/// Scan every passport in `items` for stamps owned by `wallet`.
///
/// Owner comparison ignores ASCII case. Every stamp counts towards volume,
/// including repeat stamps on the same item. Always scans the full snapshot.
pub fn aggregate(items: &[CollectibleItem], wallet: &str) -> BloodlineStats {
    let mut stats = BloodlineStats {
        analyzed_items: items.len(),
        ..Default::default()
    };

    for item in items {
        let mut stamp_count = 0usize;
        let mut last_stamp = None;

        for entry in item.provenance.iter().filter(|e| e.owner.matches(wallet)) {
            stamp_count += 1;
            stats.total_sales_volume_base_units += u128::from(entry.sale_price_base_units);
            last_stamp = Some(entry.timestamp_ms);
        }

        if let Some(last_stamp_timestamp_ms) = last_stamp {
            stats.total_stamps += stamp_count;
            stats.affected_items.push(AffectedItem {
                item: item.clone(),
                stamp_count,
                last_stamp_timestamp_ms,
            });
        }
    }

    stats
        .affected_items
        .sort_by(|a, b| b.stamp_count.cmp(&a.stamp_count));

    if !items.is_empty() {
        stats.collection_percentage =
            stats.affected_items.len() as f64 / items.len() as f64 * 100.0;
    }

    debug!(
        wallet,
        analyzed = items.len(),
        affected = stats.affected_items.len(),
        stamps = stats.total_stamps,
        "Aggregated bloodline"
    );
    stats
}
