//! # Message Digest
//!
//! 256-bit fingerprints used both for the signature digest and for OAEP padding.
//!
//! One algorithm is used end to end for a given envelope; signer, verifier and
//! codec all read it from the same [`EnvelopeConfig`](super::config::EnvelopeConfig).

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use sha3::Sha3_256;
use std::fmt;

/// Digest output (256-bit).
pub type Hash = [u8; 32];

/// Size of every supported digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Hash algorithm selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (default)
    #[default]
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA3-256
    #[serde(rename = "sha3-256")]
    Sha3_256,
}

impl HashAlgorithm {
    /// Hash data (one-shot).
    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            Self::Sha256 => Sha256::digest(data).into(),
            Self::Sha3_256 => Sha3_256::digest(data).into(),
        }
    }

    /// Output size in bytes.
    pub const fn output_size(self) -> usize {
        DIGEST_SIZE
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha3_256 => "sha3-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash data with the default algorithm.
pub fn digest(data: &[u8]) -> Hash {
    HashAlgorithm::default().digest(data)
}
