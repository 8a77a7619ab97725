//! # Wire Codec
//!
//! Deterministic record serialization (bincode, fixed-width integers,
//! little-endian, trailing bytes rejected).
//!
//! The records passing through here have a fixed shape, so encoding cannot
//! fail for any value a caller can build; a failure is a programming defect.

use super::errors::{EnvelopeError, EnvelopeResult};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Encode a fixed-shape record.
///
/// # Panics
///
/// Panics if the record cannot be serialized, which only happens for
/// non-serializable shapes.
pub fn encode<T: Serialize>(record: &T) -> Vec<u8> {
    options()
        .serialize(record)
        .expect("fixed-shape record must serialize")
}

/// Decode a record, refusing inputs longer than `limit` bytes.
///
/// bincode drops `with_limit` when reading from a slice, so the bound is
/// checked on the input length first.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], limit: u64) -> EnvelopeResult<T> {
    if bytes.len() as u64 > limit {
        return Err(EnvelopeError::Decode(format!(
            "record of {} bytes exceeds limit of {limit}",
            bytes.len()
        )));
    }
    options()
        .deserialize(bytes)
        .map_err(|e| EnvelopeError::Decode(e.to_string()))
}
