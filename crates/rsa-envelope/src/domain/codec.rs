//! # Asymmetric Codec
//!
//! Chunked OAEP encryption of an arbitrary-length byte string.
//!
//! Each chunk is encrypted independently under the same public key, so there
//! is no chaining state; chunk `i` decrypts to exactly the `i`-th slice of the
//! input. Both directions are all-or-nothing and report the lowest failing
//! chunk index.
//!
//! Per-chunk work moves to the rayon pool once the chunk count reaches
//! `EnvelopeConfig::parallel_threshold`. Results are collected in input order.

use super::chunking;
use super::config::EnvelopeConfig;
use super::digest::HashAlgorithm;
use super::errors::{EnvelopeError, EnvelopeResult};
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey, KeyOperationError};
use rayon::prelude::*;
use tracing::{debug, warn};
use zeroize::Zeroize;

/// Largest plaintext one OAEP operation can carry under `public_key`.
///
/// `ceil(modulus_bits / 8) - 2 * digest_size - 2`, recomputed for every key.
pub fn max_plaintext_size<K>(public_key: &K, algorithm: HashAlgorithm) -> EnvelopeResult<usize>
where
    K: EnvelopePublicKey + ?Sized,
{
    let modulus_bits = public_key.modulus_bit_length();
    let key_size = modulus_bits.div_ceil(8);
    let overhead = 2 * algorithm.output_size() + 2;

    key_size
        .checked_sub(overhead)
        .filter(|&size| size > 0)
        .ok_or(EnvelopeError::KeyTooSmall {
            modulus_bits,
            algorithm,
        })
}

/// Encoded size of the container holding `data` once encrypted under `public_key`.
///
/// Every OAEP ciphertext is exactly one modulus long, so the size is known
/// before any RSA work: an 8-byte chunk count, then per chunk an 8-byte
/// length prefix and the ciphertext.
pub fn container_size<K>(
    data_len: usize,
    public_key: &K,
    algorithm: HashAlgorithm,
) -> EnvelopeResult<u64>
where
    K: EnvelopePublicKey + ?Sized,
{
    let max_size = max_plaintext_size(public_key, algorithm)?;
    let chunks = chunking::chunk_count(data_len, max_size) as u64;
    let ciphertext_len = public_key.modulus_bit_length().div_ceil(8) as u64;
    Ok(8 + chunks * (8 + ciphertext_len))
}

/// Split `data` and encrypt every slice under `public_key`.
pub fn encrypt_chunks<K>(
    data: &[u8],
    public_key: &K,
    config: &EnvelopeConfig,
) -> EnvelopeResult<Vec<Vec<u8>>>
where
    K: EnvelopePublicKey + ?Sized,
{
    let algorithm = config.hash_algorithm;
    let max_size = max_plaintext_size(public_key, algorithm)?;

    let bytes = container_size(data.len(), public_key, algorithm)?;
    if bytes > config.max_container_bytes {
        warn!(bytes, limit = config.max_container_bytes, "Container over size limit");
        return Err(EnvelopeError::ContainerTooLarge {
            bytes,
            limit: config.max_container_bytes,
        });
    }

    let slices = chunking::split(data, max_size);

    debug!(
        bytes = data.len(),
        max_chunk = max_size,
        chunks = slices.len(),
        %algorithm,
        "Encrypting chunks"
    );

    let results = map_chunks(&slices, config, |slice| public_key.encrypt(algorithm, slice));

    in_order(results).map_err(|(chunk, e)| {
        warn!(chunk, error = %e, "Chunk encryption failed");
        EnvelopeError::Encryption {
            chunk,
            reason: e.to_string(),
        }
    })
}

/// Decrypt every chunk with `private_key` and join the plaintext slices.
pub fn decrypt_chunks<K, C>(
    chunks: &[C],
    private_key: &K,
    config: &EnvelopeConfig,
) -> EnvelopeResult<Vec<u8>>
where
    K: EnvelopePrivateKey + ?Sized,
    C: AsRef<[u8]> + Sync,
{
    if chunks.is_empty() {
        return Err(EnvelopeError::Decryption {
            chunk: 0,
            reason: "no ciphertext chunks".to_string(),
        });
    }

    let algorithm = config.hash_algorithm;
    debug!(chunks = chunks.len(), %algorithm, "Decrypting chunks");

    let results = map_chunks(chunks, config, |chunk| private_key.decrypt(algorithm, chunk));

    let mut parts = in_order(results).map_err(|(chunk, e)| {
        warn!(chunk, error = %e, "Chunk decryption failed");
        EnvelopeError::Decryption {
            chunk,
            reason: e.to_string(),
        }
    })?;

    let joined = chunking::join(&parts);
    parts.iter_mut().for_each(Zeroize::zeroize);
    Ok(joined)
}

fn map_chunks<C, F>(
    chunks: &[C],
    config: &EnvelopeConfig,
    op: F,
) -> Vec<Result<Vec<u8>, KeyOperationError>>
where
    C: AsRef<[u8]> + Sync,
    F: Fn(&[u8]) -> Result<Vec<u8>, KeyOperationError> + Send + Sync,
{
    if config.runs_parallel(chunks.len()) {
        chunks.par_iter().map(|c| op(c.as_ref())).collect()
    } else {
        chunks.iter().map(|c| op(c.as_ref())).collect()
    }
}

/// Collect per-chunk results, stopping at the lowest failing index.
fn in_order(
    results: Vec<Result<Vec<u8>, KeyOperationError>>,
) -> Result<Vec<Vec<u8>>, (usize, KeyOperationError)> {
    results
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.map_err(|e| (i, e)))
        .collect()
}
