//! # Chunking
//!
//! Splits a byte sequence into pieces no larger than the codec's per-operation
//! limit and joins them back.
//!
//! `split` always yields at least one part: an empty input produces a single
//! empty part, so an empty record still travels as one ciphertext.

/// Number of parts `split` produces for `len` bytes.
///
/// # Panics
///
/// Panics if `max_size` is zero.
pub fn chunk_count(len: usize, max_size: usize) -> usize {
    assert!(max_size > 0, "chunk size must be positive");
    len.div_ceil(max_size).max(1)
}

/// Split `data` into ordered parts of at most `max_size` bytes.
///
/// # Panics
///
/// Panics if `max_size` is zero.
pub fn split(data: &[u8], max_size: usize) -> Vec<&[u8]> {
    assert!(max_size > 0, "chunk size must be positive");
    if data.is_empty() {
        return vec![data];
    }
    data.chunks(max_size).collect()
}

/// Concatenate parts in order.
pub fn join<P: AsRef<[u8]>>(parts: &[P]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut joined = Vec::with_capacity(total);
    for part in parts {
        joined.extend_from_slice(part.as_ref());
    }
    joined
}
