//! # Signing and Verification
//!
//! Signatures are computed over the digest of the data, never over the raw
//! bytes, so the key only ever sees a fixed-size input.
//!
//! `verify` keeps two outcomes apart: `Ok(false)` means the signature was
//! evaluated and does not match, `Err(Verification)` means it could not be
//! evaluated at all.

use super::digest::HashAlgorithm;
use super::errors::{EnvelopeError, EnvelopeResult};
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey};

/// Sign `data` with `private_key`.
pub fn sign<K>(data: &[u8], private_key: &K, algorithm: HashAlgorithm) -> EnvelopeResult<Vec<u8>>
where
    K: EnvelopePrivateKey + ?Sized,
{
    let digest = algorithm.digest(data);
    private_key
        .sign(algorithm, &digest)
        .map_err(|e| EnvelopeError::Signing(e.to_string()))
}

/// Verify `signature` over `data` against `public_key`.
pub fn verify<K>(
    data: &[u8],
    signature: &[u8],
    public_key: &K,
    algorithm: HashAlgorithm,
) -> EnvelopeResult<bool>
where
    K: EnvelopePublicKey + ?Sized,
{
    let digest = algorithm.digest(data);
    public_key
        .verify(algorithm, &digest, signature)
        .map_err(|e| EnvelopeError::Verification(e.to_string()))
}
