//! Collection-wide counters, shown alongside the views

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChainError, ChainResult};
use crate::wire;

/// Counters from the collection-state object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCounters {
    pub total_minted: u64,
    pub total_burned: u64,
    pub current_phase: u64,
    pub pvp_enabled: bool,
    /// Token ids still available to mint
    pub available_supply: usize,
}

impl CollectionCounters {
    /// Parse the raw collection-state object
    pub fn from_raw(raw: &Value) -> ChainResult<Self> {
        let fields = wire::fields(raw)
            .ok_or_else(|| ChainError::UnexpectedShape("collection state has no fields".into()))?;

        let counter = |name: &str| -> ChainResult<u64> {
            fields
                .get(name)
                .and_then(wire::as_u64)
                .ok_or_else(|| ChainError::UnexpectedShape(format!("collection state `{name}`")))
        };

        Ok(Self {
            total_minted: counter("total_minted")?,
            total_burned: counter("total_burned")?,
            current_phase: counter("current_phase")?,
            pvp_enabled: fields
                .get("pvp_enabled")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            available_supply: fields
                .get("available_token_ids")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        })
    }

    /// Minted and not burned
    pub fn circulating(&self) -> u64 {
        self.total_minted.saturating_sub(self.total_burned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_wire_counters() {
        let raw = json!({
            "objectId": "0xstate",
            "content": { "fields": {
                "total_minted": "1200",
                "total_burned": "15",
                "current_phase": 2,
                "pvp_enabled": true,
                "available_token_ids": [1, 2, 3]
            } }
        });
        let counters = CollectionCounters::from_raw(&raw).unwrap();
        assert_eq!(counters.total_minted, 1200);
        assert_eq!(counters.total_burned, 15);
        assert_eq!(counters.current_phase, 2);
        assert!(counters.pvp_enabled);
        assert_eq!(counters.available_supply, 3);
        assert_eq!(counters.circulating(), 1185);
    }

    #[test]
    fn test_optional_counters_default() {
        let raw = json!({ "total_minted": 4, "total_burned": 9, "current_phase": 0 });
        let counters = CollectionCounters::from_raw(&raw).unwrap();
        assert!(!counters.pvp_enabled);
        assert_eq!(counters.available_supply, 0);
        assert_eq!(counters.circulating(), 0);
    }

    #[test]
    fn test_missing_counter_is_error() {
        let raw = json!({ "total_minted": 4 });
        assert!(matches!(
            CollectionCounters::from_raw(&raw),
            Err(ChainError::UnexpectedShape(_))
        ));
    }
}
