//! Chain snapshot retrieval and collection views
//!
//! The engine in `passport-core` is synchronous and works on one complete
//! snapshot at a time. This crate is the boundary around it:
//!
//! - [`ChainSource`]: async retrieval of raw object JSON
//! - [`InMemorySource`] / [`SnapshotSource`]: sources over captured snapshots
//! - [`CollectionViewer`]: fetch, normalize and run the engine for a view
//! - [`ChainConfig`]: deployment configuration, passed in explicitly

pub mod config;
pub mod counters;
pub mod error;
pub mod snapshot;
pub mod viewer;
mod wire;

pub use config::{ChainConfig, CollectionInfo, Network};
pub use counters::CollectionCounters;
pub use error::{ChainError, ChainResult};
pub use snapshot::{InMemorySource, Snapshot, SnapshotSource};
pub use viewer::{BloodlineView, CollectionViewer, OwnedView};

use async_trait::async_trait;
use serde_json::Value;

/// Retrieval of raw chain records
///
/// Every call returns a complete result or fails; there is no partial
/// snapshot. Retries belong to the caller.
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// All collectible objects currently owned by `owner`
    async fn owned_records(&self, owner: &str) -> ChainResult<Vec<Value>>;

    /// One object by id
    async fn object_record(&self, object_id: &str) -> ChainResult<Value>;

    /// Up to `limit` of the most recently minted objects
    async fn collection_records(&self, limit: usize) -> ChainResult<Vec<Value>>;

    /// The raw collection-state object
    async fn collection_counters(&self) -> ChainResult<Value>;
}
