//! Text and JSON rendering of engine output

use std::fmt::Write;

use passport_chain::{BloodlineView, CollectionCounters, OwnedView};
use passport_core::constants::{MAX_POINTS, MAX_PROVENANCE_LEN};
use passport_core::display::{format_base_units, format_timestamp_ms, shorten_address};
use passport_core::{CharacterClass, CollectibleItem};
use serde::Serialize;

/// An item with its derived figures, for JSON output
#[derive(Serialize)]
pub struct ItemSummary<'a> {
    #[serde(flatten)]
    pub item: &'a CollectibleItem,
    pub class_name: &'static str,
    pub rarity_score: f64,
    pub royalty_pct: f64,
    pub stamps_remaining: usize,
}

impl<'a> ItemSummary<'a> {
    pub fn new(item: &'a CollectibleItem) -> Self {
        Self {
            item,
            class_name: item.class_name(),
            rarity_score: item.rarity_score(),
            royalty_pct: item.royalty_rate(),
            stamps_remaining: item.stamps_remaining(),
        }
    }
}

pub fn item_line(item: &CollectibleItem) -> String {
    let mut line = format!(
        "#{:<6} {:<24} {:<15} pts {:>2}/{}  passport {:>2}/{}  score {:>5.2}  royalty {:>5.2}%",
        item.token_index,
        item.generated_name.full_name,
        item.class_name(),
        item.attribute.points,
        MAX_POINTS,
        item.passport_len(),
        MAX_PROVENANCE_LEN,
        item.rarity_score(),
        item.royalty_rate(),
    );
    if item.generated_name.is_prestige {
        line.push_str("  [OG]");
    }
    if item.is_condemned {
        line.push_str("  [CONDEMNED]");
    }
    line
}

pub fn owned(view: &OwnedView) -> String {
    let mut out = format!(
        "Your collection ({} of {} items)\n",
        view.items.len(),
        view.total_owned
    );
    for item in &view.items {
        let _ = writeln!(out, "{}", item_line(item));
    }
    if !view.rejected.is_empty() {
        let _ = writeln!(out, "{} malformed record(s) skipped", view.rejected.len());
    }
    out
}

pub fn bloodline(view: &BloodlineView, wallet: &str) -> String {
    let stats = &view.stats;
    let mut out = format!("Bloodline of {}\n", shorten_address(wallet));
    let _ = writeln!(out, "  stamps:  {}", stats.total_stamps);
    let _ = writeln!(
        out,
        "  items:   {} ({:.2}% of {} analyzed)",
        stats.affected_items.len(),
        stats.collection_percentage,
        stats.analyzed_items
    );
    let _ = writeln!(
        out,
        "  volume:  {}",
        format_base_units(stats.total_sales_volume_base_units)
    );

    if stats.is_empty() {
        out.push_str("  No stamps from this wallet in the analyzed items.\n");
    }
    for affected in &stats.affected_items {
        let _ = writeln!(
            out,
            "  {}  x{}  last {}",
            item_line(&affected.item),
            affected.stamp_count,
            format_timestamp_ms(affected.last_stamp_timestamp_ms)
        );
    }
    out
}

pub fn item_detail(item: &CollectibleItem) -> String {
    let mut out = format!("{}\n", item_line(item));
    let _ = writeln!(out, "  object:  {}", item.id);
    let _ = writeln!(out, "  owner:   {}", shorten_address(item.current_owner.as_str()));
    let rarity = item
        .class()
        .map(CharacterClass::rarity_label)
        .unwrap_or("Unknown");
    let _ = writeln!(out, "  class:   {} ({})", item.class_name(), rarity);
    if !item.generated_name.prestige_tier.is_empty() {
        let _ = writeln!(out, "  name:    {}", item.generated_name.prestige_tier);
    }
    let _ = writeln!(out, "  image:   {}", item.image_ref);

    let _ = writeln!(
        out,
        "  Provenance passport ({}/{} stamps)",
        item.passport_len(),
        MAX_PROVENANCE_LEN
    );
    if item.provenance.is_empty() {
        out.push_str("    No provenance stamps yet\n");
    }
    for (i, entry) in item.provenance.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {:>2}. {}  {}  {}",
            i + 1,
            format_timestamp_ms(entry.timestamp_ms),
            shorten_address(entry.owner.as_str()),
            format_base_units(u128::from(entry.sale_price_base_units))
        );
    }
    if item.passport_is_full() {
        out.push_str("    Full passport, maximum royalty\n");
    } else if !item.provenance.is_empty() {
        let _ = writeln!(out, "    {} more stamp(s) available", item.stamps_remaining());
    }
    out
}

pub fn counters(counters: &CollectionCounters, network: &str) -> String {
    let mut out = format!("Collection on {network}\n");
    let _ = writeln!(out, "  minted:    {}", counters.total_minted);
    if counters.total_burned > 0 {
        let _ = writeln!(out, "  burned:    {}", counters.total_burned);
    }
    let _ = writeln!(out, "  phase:     {}", counters.current_phase);
    let _ = writeln!(out, "  pvp:       {}", if counters.pvp_enabled { "on" } else { "off" });
    let _ = writeln!(out, "  available: {}", counters.available_supply);
    out
}
