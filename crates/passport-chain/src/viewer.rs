//! Collection views: fetch a snapshot, normalize it, run the engine.

use passport_core::display::image_url;
use passport_core::{
    BloodlineStats, CollectibleItem, FilterSpec, RejectedRecord, SortMode, aggregate, normalize,
    normalize_batch, pipeline,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::ChainSource;
use crate::config::ChainConfig;
use crate::counters::CollectionCounters;
use crate::error::{ChainError, ChainResult};

/// The owned-items view for one wallet
#[derive(Debug, Clone, Default)]
pub struct OwnedView {
    /// Items passing the filters, in display order
    pub items: Vec<CollectibleItem>,
    /// Well-formed items owned before filtering
    pub total_owned: usize,
    /// Records dropped as malformed
    pub rejected: Vec<RejectedRecord>,
}

/// Bloodline of one wallet over the analyzed collection subset
#[derive(Debug, Clone, Default)]
pub struct BloodlineView {
    pub stats: BloodlineStats,
    pub rejected: Vec<RejectedRecord>,
}

/// Runs engine queries against a chain source
pub struct CollectionViewer<S: ChainSource> {
    source: S,
    config: ChainConfig,
}

impl<S: ChainSource> CollectionViewer<S> {
    pub fn new(source: S, config: ChainConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Items owned by `owner`, filtered and sorted
    pub async fn owned_view(
        &self,
        owner: &str,
        filter: &FilterSpec,
        sort: SortMode,
    ) -> ChainResult<OwnedView> {
        let records = self.source.owned_records(owner).await?;
        let batch = normalize_batch(&records);
        let owned = self.with_images(batch.items);
        let items = pipeline::apply(&owned, filter, sort);

        debug!(
            owner,
            owned = owned.len(),
            shown = items.len(),
            rejected = batch.rejected.len(),
            "Built owned view"
        );

        Ok(OwnedView {
            items,
            total_owned: owned.len(),
            rejected: batch.rejected,
        })
    }

    /// Bloodline of `wallet` over the most recent `bulk_query_limit` items
    pub async fn bloodline(&self, wallet: &str) -> ChainResult<BloodlineView> {
        let records = self
            .source
            .collection_records(self.config.bulk_query_limit)
            .await?;
        let batch = normalize_batch(&records);
        let items = self.with_images(batch.items);
        let stats = aggregate(&items, wallet);

        info!(
            wallet,
            analyzed = stats.analyzed_items,
            affected = stats.affected_items.len(),
            "Bloodline computed"
        );

        Ok(BloodlineView {
            stats,
            rejected: batch.rejected,
        })
    }

    /// One item by object id
    pub async fn item(&self, object_id: &str) -> ChainResult<CollectibleItem> {
        let raw: Value = self.source.object_record(object_id).await?;
        let item = normalize(&raw).map_err(|source| ChainError::Malformed {
            object_id: object_id.to_owned(),
            source,
        })?;
        Ok(self.with_image(item))
    }

    pub async fn counters(&self) -> ChainResult<CollectionCounters> {
        let raw = self.source.collection_counters().await?;
        CollectionCounters::from_raw(&raw)
    }

    /// Image URL derived from the token index, if it can be numbered
    pub fn image_url(&self, item: &CollectibleItem) -> Option<String> {
        let info = &self.config.collection;
        image_url(item.token_index, &info.image_base_url, info.image_offset)
    }

    /// Items without an on-chain image reference get the derived URL.
    /// An item whose file number overflows keeps an empty reference.
    fn with_image(&self, mut item: CollectibleItem) -> CollectibleItem {
        if item.image_ref.is_empty() {
            match self.image_url(&item) {
                Some(url) => item.image_ref = url,
                None => debug!(token = item.token_index, "No derivable image URL"),
            }
        }
        item
    }

    fn with_images(&self, items: Vec<CollectibleItem>) -> Vec<CollectibleItem> {
        items.into_iter().map(|item| self.with_image(item)).collect()
    }
}
