//! # Outbound Ports (Driven Ports / SPI)
//!
//! Key capabilities the protocol depends on. The envelope never touches key
//! material directly; it only asks a key to sign, verify, encrypt or decrypt.

use crate::domain::digest::{Hash, HashAlgorithm};
use thiserror::Error;

/// Error from a key primitive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyOperationError {
    /// The signature cannot be evaluated against this key at all
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// The primitive rejected the operation
    #[error("{0}")]
    Primitive(String),
}

/// Public half of an asymmetric key pair.
///
/// Implementations must be thread-safe (`Send + Sync`): chunks may be
/// encrypted from several rayon workers at once.
pub trait EnvelopePublicKey: Send + Sync {
    /// Length of the modulus in bits.
    fn modulus_bit_length(&self) -> usize;

    /// Encrypt one plaintext chunk with OAEP padding keyed by `algorithm`.
    ///
    /// # Errors
    /// * `KeyOperationError::Primitive` - plaintext too long or RNG failure
    fn encrypt(
        &self,
        algorithm: HashAlgorithm,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, KeyOperationError>;

    /// Check a signature over a precomputed digest.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    ///
    /// # Errors
    /// * `KeyOperationError::MalformedSignature` - the signature cannot be evaluated
    fn verify(
        &self,
        algorithm: HashAlgorithm,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, KeyOperationError>;
}

/// Private half of an asymmetric key pair.
pub trait EnvelopePrivateKey: Send + Sync {
    /// Sign a precomputed digest.
    ///
    /// # Errors
    /// * `KeyOperationError::Primitive` - key/algorithm mismatch or RNG failure
    fn sign(&self, algorithm: HashAlgorithm, digest: &Hash) -> Result<Vec<u8>, KeyOperationError>;

    /// Decrypt one ciphertext chunk produced by [`EnvelopePublicKey::encrypt`].
    ///
    /// # Errors
    /// * `KeyOperationError::Primitive` - wrong key or corrupted ciphertext
    fn decrypt(
        &self,
        algorithm: HashAlgorithm,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, KeyOperationError>;
}
