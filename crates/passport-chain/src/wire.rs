//! Lookups on raw object JSON used to answer source queries.
//!
//! Shape resolution is shared with the normalizer; these only locate records.

use passport_core::normalize::{lenient_u64, record_field_set};
use serde_json::{Map, Value};

pub(crate) use passport_core::normalize::record_object_id as object_id;

pub(crate) fn fields(raw: &Value) -> Option<&Map<String, Value>> {
    record_field_set(raw)
}

pub(crate) fn current_owner(raw: &Value) -> Option<&str> {
    fields(raw)?.get("current_owner")?.as_str()
}

pub(crate) fn token_index(raw: &Value) -> Option<u64> {
    lenient_u64(fields(raw)?.get("token_id")?)
}

pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    lenient_u64(value)
}
