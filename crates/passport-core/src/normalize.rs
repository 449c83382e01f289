//! Record normalizer.
//!
//! Maps loosely-typed chain JSON onto [`CollectibleItem`]. The node reports
//! objects in a few shapes, all of which are accepted:
//!
//! - a full object response `{ "data": { "objectId", "content": { "fields" } } }`
//! - an object body `{ "objectId", "version", "digest", "content": { "fields" } }`
//! - a bare field set carrying its own `id`
//!
//! Nested structs may be wrapped as `{ "fields": { .. } }` or inlined, and
//! 64-bit integers may arrive as JSON numbers or decimal strings.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::{MAX_POINTS, MAX_PROVENANCE_LEN};
use crate::error::{MalformedRecord, RecordResult};
use crate::item::{Attribute, CollectibleItem, GeneratedName, ProvenanceEntry, WalletAddress};

type Object = Map<String, Value>;

/// Normalize one raw record.
///
/// A missing `provenance` is an empty passport. A provenance entry missing
/// any of its fields rejects the whole record.
pub fn normalize(raw: &Value) -> RecordResult<CollectibleItem> {
    let body = unwrap_data(raw);
    let body = body
        .as_object()
        .ok_or(MalformedRecord::wrong_type("record", "an object"))?;
    let fields = record_fields(body)?;

    let id = object_id(body, fields)?;
    let token_index = required_u64(fields, "token_id")?;
    let current_owner = WalletAddress::new(required_str(fields, "current_owner")?);

    let attribute = attribute(fields)?;
    let generated_name = generated_name(fields)?;
    let provenance = provenance(fields)?;

    Ok(CollectibleItem {
        id,
        version: scalar_string(body.get("version")),
        digest: scalar_string(body.get("digest")),
        token_index,
        display_name: optional_str(fields, "name")?,
        description: optional_str(fields, "description")?,
        image_ref: optional_str(fields, "image_url")?,
        current_owner,
        is_condemned: optional_bool(fields, "is_condemned")?,
        bounty_metadata: optional_str(fields, "bounty_metadata")?,
        attribute,
        generated_name,
        provenance,
    })
}

/// Outcome of normalizing a batch of records.
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    /// Accepted items, ascending by token index.
    pub items: Vec<CollectibleItem>,
    /// Dropped records.
    pub rejected: Vec<RejectedRecord>,
}

/// A record dropped from a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the input batch.
    pub index: usize,
    /// Object id, if it could be read.
    pub object_id: Option<String>,
    pub error: MalformedRecord,
}

/// Normalize a batch, dropping malformed records instead of failing.
pub fn normalize_batch<'a, I>(records: I) -> NormalizedBatch
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut batch = NormalizedBatch::default();

    for (index, raw) in records.into_iter().enumerate() {
        match normalize(raw) {
            Ok(item) => batch.items.push(item),
            Err(error) => {
                let object_id = peek_object_id(raw);
                warn!(
                    index,
                    object_id = object_id.as_deref().unwrap_or("?"),
                    %error,
                    "Dropping malformed record"
                );
                batch.rejected.push(RejectedRecord {
                    index,
                    object_id,
                    error,
                });
            }
        }
    }

    batch.items.sort_by_key(|item| item.token_index);
    debug!(
        accepted = batch.items.len(),
        rejected = batch.rejected.len(),
        "Normalized record batch"
    );
    batch
}

fn unwrap_data(raw: &Value) -> &Value {
    match raw.get("data") {
        Some(data) if data.is_object() => data,
        _ => raw,
    }
}

/// The field set of a record: `content.fields` if present, else the body itself.
fn record_fields(body: &Object) -> RecordResult<&Object> {
    match body.get("content") {
        Some(content) => {
            let content = content
                .as_object()
                .ok_or(MalformedRecord::wrong_type("content", "an object"))?;
            match content.get("fields") {
                Some(fields) => fields
                    .as_object()
                    .ok_or(MalformedRecord::wrong_type("content.fields", "an object")),
                None => Err(MalformedRecord::MissingField("content.fields")),
            }
        }
        None => Ok(body),
    }
}

/// Inner field set of a nested struct, tolerating the `{ "fields": .. }` wrapper.
fn struct_fields<'a>(value: &'a Value, field: &'static str) -> RecordResult<&'a Object> {
    let obj = value
        .as_object()
        .ok_or(MalformedRecord::wrong_type(field, "an object"))?;
    match obj.get("fields") {
        Some(inner) => inner
            .as_object()
            .ok_or(MalformedRecord::wrong_type(field, "an object")),
        None => Ok(obj),
    }
}

fn object_id(body: &Object, fields: &Object) -> RecordResult<String> {
    object_id_ref(body, fields).map(str::to_owned)
}

fn object_id_ref<'a>(body: &'a Object, fields: &'a Object) -> RecordResult<&'a str> {
    if let Some(id) = body.get("objectId") {
        return id
            .as_str()
            .ok_or(MalformedRecord::wrong_type("objectId", "a string"));
    }
    match fields.get("id") {
        Some(Value::String(id)) => Ok(id),
        // UID is `{ "id": "0x.." }` on the wire
        Some(Value::Object(uid)) => uid
            .get("id")
            .and_then(Value::as_str)
            .ok_or(MalformedRecord::wrong_type("id", "a string or UID")),
        Some(_) => Err(MalformedRecord::wrong_type("id", "a string or UID")),
        None => Err(MalformedRecord::MissingField("id")),
    }
}

fn peek_object_id(raw: &Value) -> Option<String> {
    record_object_id(raw).map(str::to_owned)
}

/// Field set of a raw record in any accepted shape.
///
/// Lookup only: a record with a field set may still fail [`normalize`].
pub fn record_field_set(raw: &Value) -> Option<&Map<String, Value>> {
    let body = unwrap_data(raw).as_object()?;
    record_fields(body).ok()
}

/// Object id of a raw record in any accepted shape.
pub fn record_object_id(raw: &Value) -> Option<&str> {
    let body = unwrap_data(raw).as_object()?;
    let fields = record_fields(body).ok()?;
    object_id_ref(body, fields).ok()
}

/// Unsigned integer encoded as a JSON number or a decimal string.
pub fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn attribute(fields: &Object) -> RecordResult<Attribute> {
    let raw = fields
        .get("attribute")
        .ok_or(MalformedRecord::MissingField("attribute"))?;
    let attr = struct_fields(raw, "attribute")?;

    let class_id = required_u64(attr, "attribute_type")?;
    let points = required_u64(attr, "points")?;
    if points > MAX_POINTS as u64 {
        return Err(MalformedRecord::OutOfRange {
            field: "points",
            value: points,
            max: MAX_POINTS as u64,
        });
    }

    Ok(Attribute {
        class_id,
        points: points as u8,
    })
}

fn generated_name(fields: &Object) -> RecordResult<GeneratedName> {
    let raw = fields
        .get("generated_name")
        .ok_or(MalformedRecord::MissingField("generated_name"))?;
    let name = struct_fields(raw, "generated_name")?;

    Ok(GeneratedName {
        full_name: required_str(name, "full_name")?.to_owned(),
        is_prestige: required_bool(name, "is_og_title")?,
        prestige_tier: optional_str(name, "name_rarity")?,
    })
}

fn provenance(fields: &Object) -> RecordResult<Vec<ProvenanceEntry>> {
    let entries = match fields.get("provenance") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(MalformedRecord::wrong_type("provenance", "an array")),
    };

    if entries.len() > MAX_PROVENANCE_LEN {
        return Err(MalformedRecord::PassportOverflow {
            len: entries.len(),
            max: MAX_PROVENANCE_LEN,
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| stamp(entry).map_err(|e| e.in_stamp(index)))
        .collect()
}

fn stamp(entry: &Value) -> RecordResult<ProvenanceEntry> {
    let fields = struct_fields(entry, "provenance entry")?;
    Ok(ProvenanceEntry {
        owner: WalletAddress::new(required_str(fields, "owner")?),
        timestamp_ms: required_u64(fields, "timestamp")?,
        sale_price_base_units: required_u64(fields, "sale_price")?,
    })
}

fn required_str<'a>(obj: &'a Object, field: &'static str) -> RecordResult<&'a str> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(MalformedRecord::wrong_type(field, "a string")),
        None => Err(MalformedRecord::MissingField(field)),
    }
}

fn optional_str(obj: &Object, field: &'static str) -> RecordResult<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MalformedRecord::wrong_type(field, "a string")),
    }
}

fn required_bool(obj: &Object, field: &'static str) -> RecordResult<bool> {
    match obj.get(field) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(MalformedRecord::wrong_type(field, "a boolean")),
        None => Err(MalformedRecord::MissingField(field)),
    }
}

fn optional_bool(obj: &Object, field: &'static str) -> RecordResult<bool> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(MalformedRecord::wrong_type(field, "a boolean")),
    }
}

fn required_u64(obj: &Object, field: &'static str) -> RecordResult<u64> {
    let value = obj.get(field).ok_or(MalformedRecord::MissingField(field))?;
    lenient_u64(value).ok_or(MalformedRecord::wrong_type(field, "an unsigned integer"))
}

fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_record() -> Value {
        json!({
            "objectId": "0xobj1",
            "version": "17",
            "digest": "9xKf",
            "content": {
                "dataType": "moveObject",
                "fields": {
                    "id": { "id": "0xobj1" },
                    "token_id": "42",
                    "name": "GBz #42",
                    "description": "a baby",
                    "image_url": "https://img/43.png",
                    "current_owner": "0xBEEF",
                    "is_condemned": false,
                    "bounty_metadata": "",
                    "attribute": { "fields": { "attribute_type": 2, "points": 30 } },
                    "generated_name": { "fields": {
                        "full_name": "Lil Tuff",
                        "is_og_title": true,
                        "name_rarity": "OG"
                    } },
                    "provenance": [
                        { "fields": { "owner": "0xaa", "timestamp": "1000", "sale_price": "500" } },
                        { "fields": { "owner": "0xbb", "timestamp": "2000", "sale_price": "750" } }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_wire_shape() {
        let item = normalize(&wire_record()).unwrap();
        assert_eq!(item.id, "0xobj1");
        assert_eq!(item.version.as_deref(), Some("17"));
        assert_eq!(item.digest.as_deref(), Some("9xKf"));
        assert_eq!(item.token_index, 42);
        assert_eq!(item.display_name, "GBz #42");
        assert_eq!(item.current_owner.as_str(), "0xBEEF");
        assert_eq!(item.attribute, Attribute { class_id: 2, points: 30 });
        assert!(item.generated_name.is_prestige);
        assert_eq!(item.generated_name.prestige_tier, "OG");
        assert_eq!(item.provenance.len(), 2);
        assert_eq!(item.provenance[1].timestamp_ms, 2000);
        assert_eq!(item.provenance[1].sale_price_base_units, 750);
    }

    #[test]
    fn test_data_wrapper_accepted() {
        let wrapped = json!({ "data": wire_record() });
        assert_eq!(normalize(&wrapped).unwrap().token_index, 42);
    }

    #[test]
    fn test_flat_shape_with_numbers() {
        let raw = json!({
            "id": "0xflat",
            "token_id": 7,
            "current_owner": "0x01",
            "attribute": { "attribute_type": 1, "points": 0 },
            "generated_name": { "full_name": "Smol", "is_og_title": false }
        });
        let item = normalize(&raw).unwrap();
        assert_eq!(item.id, "0xflat");
        assert_eq!(item.token_index, 7);
        assert!(item.provenance.is_empty());
        assert!(!item.is_condemned);
        assert_eq!(item.generated_name.prestige_tier, "");
        assert_eq!(item.version, None);
    }

    #[test]
    fn test_null_provenance_is_empty() {
        let mut raw = wire_record();
        raw["content"]["fields"]["provenance"] = Value::Null;
        assert!(normalize(&raw).unwrap().provenance.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        for (field, expected) in [
            ("token_id", "token_id"),
            ("current_owner", "current_owner"),
            ("attribute", "attribute"),
            ("generated_name", "generated_name"),
        ] {
            let mut raw = wire_record();
            raw["content"]["fields"]
                .as_object_mut()
                .unwrap()
                .remove(field);
            assert_eq!(
                normalize(&raw).unwrap_err(),
                MalformedRecord::MissingField(expected),
                "removing {field}"
            );
        }
    }

    #[test]
    fn test_missing_id() {
        let raw = json!({
            "token_id": 7,
            "current_owner": "0x01",
            "attribute": { "attribute_type": 1, "points": 0 },
            "generated_name": { "full_name": "Smol", "is_og_title": false }
        });
        assert_eq!(normalize(&raw).unwrap_err(), MalformedRecord::MissingField("id"));
    }

    #[test]
    fn test_wrong_shapes() {
        let mut raw = wire_record();
        raw["content"]["fields"]["token_id"] = json!("forty-two");
        assert!(matches!(
            normalize(&raw),
            Err(MalformedRecord::WrongType { field: "token_id", .. })
        ));

        let mut raw = wire_record();
        raw["content"]["fields"]["provenance"] = json!({ "owner": "0xaa" });
        assert!(matches!(
            normalize(&raw),
            Err(MalformedRecord::WrongType { field: "provenance", .. })
        ));

        assert!(normalize(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_partial_stamp_rejects_item() {
        let mut raw = wire_record();
        raw["content"]["fields"]["provenance"][1] =
            json!({ "fields": { "owner": "0xbb", "timestamp": "2000" } });
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::Stamp {
                index: 1,
                reason: Box::new(MalformedRecord::MissingField("sale_price")),
            }
        );
    }

    #[test]
    fn test_points_above_ceiling() {
        let mut raw = wire_record();
        raw["content"]["fields"]["attribute"]["fields"]["points"] = json!(51);
        assert!(matches!(
            normalize(&raw),
            Err(MalformedRecord::OutOfRange { field: "points", value: 51, max: 50 })
        ));
    }

    #[test]
    fn test_wide_class_id_is_kept_as_unknown() {
        let mut raw = wire_record();
        raw["content"]["fields"]["attribute"]["fields"]["attribute_type"] = json!("256");
        let item = normalize(&raw).unwrap();
        assert_eq!(item.attribute.class_id, 256);
        assert_eq!(item.class(), None);
        assert_eq!(item.class_name(), "Unknown");
        assert_eq!(
            item.rarity_score(),
            crate::rarity::score_components(0, 30, 2, true)
        );
    }

    #[test]
    fn test_shared_lookups() {
        let wrapped = json!({ "data": wire_record() });
        assert_eq!(record_object_id(&wrapped), Some("0xobj1"));
        let fields = record_field_set(&wrapped).unwrap();
        assert_eq!(fields.get("token_id").and_then(lenient_u64), Some(42));

        let flat = json!({ "id": { "id": "0xflat" }, "token_id": 3 });
        assert_eq!(record_object_id(&flat), Some("0xflat"));
        assert_eq!(record_field_set(&flat).unwrap().get("token_id").and_then(lenient_u64), Some(3));

        // Lookups work on records the normalizer would reject
        assert_eq!(record_object_id(&json!({ "objectId": "0xbare" })), Some("0xbare"));
        assert_eq!(record_object_id(&json!({ "content": 5 })), None);
        assert_eq!(lenient_u64(&json!("-1")), None);
        assert_eq!(lenient_u64(&json!(true)), None);
    }

    #[test]
    fn test_passport_overflow() {
        let stamp = json!({ "owner": "0xaa", "timestamp": "1", "sale_price": "1" });
        let mut raw = wire_record();
        raw["content"]["fields"]["provenance"] = Value::Array(vec![stamp; 21]);
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::PassportOverflow { len: 21, max: 20 }
        );
    }

    #[test]
    fn test_batch_drops_bad_records_and_sorts() {
        let mut late = wire_record();
        late["objectId"] = json!("0xlate");
        late["content"]["fields"]["token_id"] = json!("900");

        let mut broken = wire_record();
        broken["objectId"] = json!("0xbroken");
        broken["content"]["fields"]
            .as_object_mut()
            .unwrap()
            .remove("attribute");

        let records = vec![late, broken, wire_record()];
        let batch = normalize_batch(&records);

        let tokens: Vec<u64> = batch.items.iter().map(|i| i.token_index).collect();
        assert_eq!(tokens, vec![42, 900]);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].index, 1);
        assert_eq!(batch.rejected[0].object_id.as_deref(), Some("0xbroken"));
        assert_eq!(
            batch.rejected[0].error,
            MalformedRecord::MissingField("attribute")
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = normalize_batch(&Vec::<Value>::new());
        assert!(batch.items.is_empty());
        assert!(batch.rejected.is_empty());
    }
}
