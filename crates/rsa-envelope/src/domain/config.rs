//! Envelope configuration and validation
//!
//! # Example
//!
//! ```
//! use rsa_envelope::{EnvelopeConfig, HashAlgorithm};
//!
//! let config = EnvelopeConfig::default()
//!     .with_hash_algorithm(HashAlgorithm::Sha3_256)
//!     .with_parallel_threshold(8);
//! assert!(config.validate().is_ok());
//! ```

use super::digest::HashAlgorithm;
use super::errors::{EnvelopeError, EnvelopeResult};
use serde::{Deserialize, Serialize};

/// Default chunk count at which per-chunk work moves to the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Default upper bound for a serialized container (16 MiB).
pub const DEFAULT_MAX_CONTAINER_BYTES: u64 = 16 * 1024 * 1024;

/// Envelope configuration
///
/// Sender and recipient must agree on `hash_algorithm`; the other fields are
/// local tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Digest for signatures and OAEP padding
    pub hash_algorithm: HashAlgorithm,
    /// Chunk count at or above which chunks are processed in parallel (0 = never)
    pub parallel_threshold: usize,
    /// Largest container or inner record accepted when decoding
    pub max_container_bytes: u64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::Sha256,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_container_bytes: DEFAULT_MAX_CONTAINER_BYTES,
        }
    }
}

impl EnvelopeConfig {
    /// Parse a JSON document and validate it. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EnvelopeResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EnvelopeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> EnvelopeResult<()> {
        if self.max_container_bytes == 0 {
            return Err(EnvelopeError::InvalidConfig(
                "max_container_bytes cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `chunks` pieces of work should go to the rayon pool.
    pub fn runs_parallel(&self, chunks: usize) -> bool {
        self.parallel_threshold > 0 && chunks >= self.parallel_threshold
    }

    /// Builder-style method to set the hash algorithm
    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    /// Builder-style method to set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder-style method to set the container size limit
    pub fn with_max_container_bytes(mut self, max: u64) -> Self {
        self.max_container_bytes = max;
        self
    }
}
