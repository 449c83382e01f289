//! Snapshot-backed sources.
//!
//! A snapshot is a JSON document `{ "counters": <collection state>,
//! "objects": [<object>, ..] }` captured from a full node. Each query runs
//! against one complete snapshot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use passport_core::addresses_match;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::ChainSource;
use crate::error::{ChainError, ChainResult};
use crate::wire;

/// A captured collection: counters plus raw objects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub counters: Value,
    #[serde(default)]
    pub objects: Vec<Value>,
}

impl Snapshot {
    pub fn from_json_str(s: &str) -> ChainResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Objects whose `current_owner` is `owner`, ignoring hex case
    pub fn owned_by(&self, owner: &str) -> Vec<Value> {
        self.objects
            .iter()
            .filter(|raw| {
                wire::current_owner(raw).is_some_and(|current| addresses_match(current, owner))
            })
            .cloned()
            .collect()
    }

    pub fn find(&self, object_id: &str) -> ChainResult<Value> {
        self.objects
            .iter()
            .find(|raw| wire::object_id(raw) == Some(object_id))
            .cloned()
            .ok_or_else(|| ChainError::ObjectNotFound(object_id.to_owned()))
    }

    /// The `limit` most recently minted objects, newest first.
    ///
    /// Objects without a readable token index sort last.
    pub fn most_recent(&self, limit: usize) -> Vec<Value> {
        let mut objects: Vec<&Value> = self.objects.iter().collect();
        objects.sort_by_key(|raw| std::cmp::Reverse(wire::token_index(raw)));
        objects.into_iter().take(limit).cloned().collect()
    }
}

/// Source over a snapshot held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: Snapshot,
}

impl InMemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Source with objects only; counters are absent
    pub fn from_objects(objects: Vec<Value>) -> Self {
        Self::new(Snapshot {
            counters: Value::Null,
            objects,
        })
    }

    pub fn with_counters(mut self, counters: Value) -> Self {
        self.snapshot.counters = counters;
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl ChainSource for InMemorySource {
    async fn owned_records(&self, owner: &str) -> ChainResult<Vec<Value>> {
        Ok(self.snapshot.owned_by(owner))
    }

    async fn object_record(&self, object_id: &str) -> ChainResult<Value> {
        self.snapshot.find(object_id)
    }

    async fn collection_records(&self, limit: usize) -> ChainResult<Vec<Value>> {
        Ok(self.snapshot.most_recent(limit))
    }

    async fn collection_counters(&self) -> ChainResult<Value> {
        Ok(self.snapshot.counters.clone())
    }
}

/// Source backed by a snapshot file, re-read on every query
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file
    pub async fn read(&self) -> ChainResult<Snapshot> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let snapshot = Snapshot::from_json_str(&text)?;
        debug!(
            path = %self.path.display(),
            objects = snapshot.objects.len(),
            "Read snapshot"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl ChainSource for SnapshotSource {
    async fn owned_records(&self, owner: &str) -> ChainResult<Vec<Value>> {
        Ok(self.read().await?.owned_by(owner))
    }

    async fn object_record(&self, object_id: &str) -> ChainResult<Value> {
        self.read().await?.find(object_id)
    }

    async fn collection_records(&self, limit: usize) -> ChainResult<Vec<Value>> {
        Ok(self.read().await?.most_recent(limit))
    }

    async fn collection_counters(&self) -> ChainResult<Value> {
        Ok(self.read().await?.counters)
    }
}
