//! Builders for unit tests.

use crate::item::{Attribute, CollectibleItem, GeneratedName, ProvenanceEntry, WalletAddress};

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(crate) struct ItemBuilder {
    item: CollectibleItem,
}

impl ItemBuilder {
    pub(crate) fn new(token_index: u64) -> Self {
        Self {
            item: CollectibleItem {
                id: format!("0xobj{token_index}"),
                version: None,
                digest: None,
                token_index,
                display_name: format!("GBz #{token_index}"),
                description: String::new(),
                image_ref: String::new(),
                current_owner: WalletAddress::new("0xholder"),
                is_condemned: false,
                bounty_metadata: String::new(),
                attribute: Attribute {
                    class_id: 1,
                    points: 0,
                },
                generated_name: GeneratedName {
                    full_name: "Lil Test".into(),
                    is_prestige: false,
                    prestige_tier: String::new(),
                },
                provenance: Vec::new(),
            },
        }
    }

    pub(crate) fn class(mut self, class_id: u64) -> Self {
        self.item.attribute.class_id = class_id;
        self
    }

    pub(crate) fn points(mut self, points: u8) -> Self {
        self.item.attribute.points = points;
        self
    }

    pub(crate) fn prestige(mut self, is_prestige: bool) -> Self {
        self.item.generated_name.is_prestige = is_prestige;
        self
    }

    pub(crate) fn owner(mut self, owner: &str) -> Self {
        self.item.current_owner = WalletAddress::new(owner);
        self
    }

    /// Append `count` stamps from distinct filler sellers.
    pub(crate) fn stamps(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.stamp(&format!("0xseller{i}"), 1_000 + i as u64, 1);
        }
        self
    }

    pub(crate) fn stamp(mut self, owner: &str, timestamp_ms: u64, price: u64) -> Self {
        self.item.provenance.push(ProvenanceEntry {
            owner: WalletAddress::new(owner),
            timestamp_ms,
            sale_price_base_units: price,
        });
        self
    }

    pub(crate) fn build(self) -> CollectibleItem {
        self.item
    }
}
