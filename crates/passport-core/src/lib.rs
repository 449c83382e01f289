//! Provenance and rarity analytics for the GBz collectible set.
//!
//! The engine turns raw chain records into [`CollectibleItem`]s and derives
//! everything the collector views show from them:
//!
//! - [`normalize`] / [`normalize_batch`]: raw JSON to canonical items
//! - [`rarity_score`]: deterministic rarity, lower is rarer
//! - [`royalty_pct`]: royalty rate from passport length
//! - [`pipeline::apply`]: class/points/passport filters plus rarity sort
//! - [`aggregate`]: one wallet's bloodline across a collection snapshot
//!
//! Every function is synchronous and pure over the snapshot it is given.
//!
//! ```ignore
//! use passport_core::{normalize_batch, pipeline, FilterSpec, SortMode};
//!
//! let batch = normalize_batch(&records);
//! let view = pipeline::apply(&batch.items, &FilterSpec::default(), SortMode::RarestFirst);
//! ```

pub mod bloodline;
pub mod class;
pub mod constants;
pub mod display;
pub mod error;
pub mod item;
pub mod normalize;
pub mod pipeline;
pub mod rarity;
pub mod royalty;

#[cfg(test)]
pub(crate) mod testing;

pub use bloodline::{AffectedItem, BloodlineStats, aggregate};
pub use class::{CharacterClass, class_name, class_weight};
pub use error::{MalformedRecord, ModeParseError, RecordResult};
pub use item::{
    Attribute, CollectibleItem, GeneratedName, ProvenanceEntry, WalletAddress, addresses_match,
};
pub use normalize::{NormalizedBatch, RejectedRecord, normalize, normalize_batch};
pub use pipeline::{Band, ClassFilter, FilterSpec, SortMode};
pub use rarity::rarity_score;
pub use royalty::royalty_pct;
