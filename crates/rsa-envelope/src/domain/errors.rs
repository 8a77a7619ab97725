//! # Envelope Errors
//!
//! Error types for the sign-then-encrypt protocol.
//!
//! The variants separate three kinds of trouble a caller reacts to differently:
//! an untrusted message (`SignatureRejected`), an unusable message
//! (`Decryption`, `Decode`, `Verification`) and a local misconfiguration
//! (`Signing`, `KeyTooSmall`, `ContainerTooLarge`, `InvalidConfig`).

use super::digest::HashAlgorithm;
use thiserror::Error;

/// Errors that can occur while sealing or opening an envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The private key could not produce a signature (key/algorithm mismatch, RNG failure)
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The signature could not be evaluated at all (malformed encoding)
    #[error("Signature verification could not be evaluated: {0}")]
    Verification(String),

    /// The signature is well-formed but does not match the payload and signer
    #[error("Signature rejected: payload is not authentic")]
    SignatureRejected,

    /// The public key modulus is too small to carry any OAEP payload
    #[error("Key of {modulus_bits} bits is too small for OAEP with {algorithm}")]
    KeyTooSmall {
        /// Modulus length of the offending key
        modulus_bits: usize,
        /// Hash algorithm used for OAEP padding
        algorithm: HashAlgorithm,
    },

    /// The sealed container would exceed the configured size limit
    #[error("Container of {bytes} bytes would exceed limit of {limit}")]
    ContainerTooLarge {
        /// Encoded size the container would have
        bytes: u64,
        /// Configured `max_container_bytes`
        limit: u64,
    },

    /// A chunk failed to encrypt; no ciphertext is returned
    #[error("Encryption failed at chunk {chunk}: {reason}")]
    Encryption {
        /// Index of the first chunk that failed
        chunk: usize,
        /// Underlying primitive failure
        reason: String,
    },

    /// A chunk failed to decrypt (wrong key, corrupted or truncated ciphertext)
    #[error("Decryption failed at chunk {chunk}: {reason}")]
    Decryption {
        /// Index of the first chunk that failed
        chunk: usize,
        /// Underlying primitive failure
        reason: String,
    },

    /// Bytes do not parse into the expected record
    #[error("Malformed record: {0}")]
    Decode(String),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EnvelopeError {
    /// Whether the message must be treated as untrusted rather than broken.
    pub fn is_untrusted(&self) -> bool {
        matches!(self, Self::SignatureRejected)
    }
}

/// Result alias used throughout the crate.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
