//! Filter/sort pipeline for the owned-items view.
//!
//! Three independent filters, AND-combined, followed by an optional rarity
//! ordering. The input is expected in ascending token order; the output is a
//! new vector and the input is never touched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{POINTS_BAND_SPLIT, PROVENANCE_BAND_SPLIT};
use crate::error::ModeParseError;
use crate::item::CollectibleItem;
use crate::rarity::rarity_score;

/// Class filter: everything, or one exact class id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassFilter {
    #[default]
    All,
    Only(u64),
}

impl ClassFilter {
    pub fn accepts(self, item: &CollectibleItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => item.attribute.class_id == id,
        }
    }
}

impl FromStr for ClassFilter {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<u64>().map(Self::Only).map_err(|_| ModeParseError {
            kind: "class filter",
            value: s.to_owned(),
            expected: "all, or a class id",
        })
    }
}

/// A two-way split on some numeric property. The boundary belongs to `Low`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    #[default]
    All,
    Low,
    High,
}

impl Band {
    /// Whether `value` falls in this band given the split point.
    pub fn contains<T: PartialOrd>(self, value: T, split: T) -> bool {
        match self {
            Self::All => true,
            Self::Low => value <= split,
            Self::High => value > split,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Band {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(ModeParseError {
                kind: "band",
                value: s.to_owned(),
                expected: "all, low, high",
            }),
        }
    }
}

/// Rarity ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep input order.
    #[default]
    None,
    /// Ascending score: rarest first ("rarity high to low").
    RarestFirst,
    /// Descending score: commonest first ("rarity low to high").
    CommonestFirst,
}

impl FromStr for SortMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "rarity-high" | "rarity-ascending-score" | "rarest" => Ok(Self::RarestFirst),
            "rarity-low" | "rarity-descending-score" | "commonest" => Ok(Self::CommonestFirst),
            _ => Err(ModeParseError {
                kind: "sort mode",
                value: s.to_owned(),
                expected: "none, rarity-high, rarity-low",
            }),
        }
    }
}

/// The combined filter selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub class: ClassFilter,
    /// Split at 25 points.
    pub points: Band,
    /// Split at 10 stamps.
    pub provenance: Band,
}

impl FilterSpec {
    pub fn with_class(mut self, class: ClassFilter) -> Self {
        self.class = class;
        self
    }

    pub fn with_points(mut self, points: Band) -> Self {
        self.points = points;
        self
    }

    pub fn with_provenance(mut self, provenance: Band) -> Self {
        self.provenance = provenance;
        self
    }

    /// Whether no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    pub fn accepts(&self, item: &CollectibleItem) -> bool {
        self.class.accepts(item)
            && self.points.contains(item.attribute.points, POINTS_BAND_SPLIT)
            && self
                .provenance
                .contains(item.provenance.len(), PROVENANCE_BAND_SPLIT)
    }
}

/// Filter, then optionally order by rarity score.
///
/// Sorting is stable: items with equal scores keep their input order.
pub fn apply(items: &[CollectibleItem], spec: &FilterSpec, sort: SortMode) -> Vec<CollectibleItem> {
    let filtered: Vec<CollectibleItem> = items
        .iter()
        .filter(|item| spec.accepts(item))
        .cloned()
        .collect();

    match sort {
        SortMode::None => filtered,
        SortMode::RarestFirst => sort_by_score(filtered, false),
        SortMode::CommonestFirst => sort_by_score(filtered, true),
    }
}

fn sort_by_score(items: Vec<CollectibleItem>, descending: bool) -> Vec<CollectibleItem> {
    // Score once per item; `sort_by` is stable.
    let mut scored: Vec<(f64, CollectibleItem)> = items
        .into_iter()
        .map(|item| (rarity_score(&item), item))
        .collect();

    scored.sort_by(|a, b| {
        let ord = a.0.total_cmp(&b.0);
        if descending { ord.reverse() } else { ord }
    });

    scored.into_iter().map(|(_, item)| item).collect()
}
