//! Error types for record normalization

use thiserror::Error;

/// A raw chain record that could not be mapped onto a [`CollectibleItem`].
///
/// The whole item is rejected; callers drop it and keep the rest of the batch.
///
/// [`CollectibleItem`]: crate::CollectibleItem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` out of range: {value} exceeds {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("provenance holds {len} stamps, passport cap is {max}")]
    PassportOverflow { len: usize, max: usize },

    #[error("provenance stamp {index}: {reason}")]
    Stamp {
        index: usize,
        reason: Box<MalformedRecord>,
    },
}

impl MalformedRecord {
    pub(crate) fn wrong_type(field: &'static str, expected: &'static str) -> Self {
        Self::WrongType { field, expected }
    }

    pub(crate) fn in_stamp(self, index: usize) -> Self {
        Self::Stamp {
            index,
            reason: Box::new(self),
        }
    }
}

/// Result type alias for normalization
pub type RecordResult<T> = Result<T, MalformedRecord>;

/// An unrecognized filter or sort mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ModeParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
