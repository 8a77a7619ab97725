//! # RSA Envelope - Sign-then-Encrypt over Chunked RSA-OAEP
//!
//! Transports an arbitrary-length payload over RSA, whose single operation can
//! only carry `modulus_bytes - 2 * hash_bytes - 2` bytes, while proving
//! authorship.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Chunking, digest, signing, codec, entities
//! - **Ports Layer** (`ports/`): Key capability traits and the `EnvelopeApi`
//! - **Adapters Layer** (`adapters/`): `rsa` crate implementations of the key ports
//! - **Service Layer** (`service.rs`): `EnvelopeService` wiring config to the domain
//!
//! ## Protocol
//!
//! | Step | Operation | Output |
//! |------|-----------|--------|
//! | 1 | Serialize `Message` | bytes |
//! | 2 | RSASSA-PKCS#1 v1.5 over SHA-256 digest | `SignedMessage` |
//! | 3 | Serialize `(payload, signature)`, split, RSA-OAEP each chunk | `EncryptedMessage` |
//!
//! Opening reverses the steps. [`EncryptedMessage::decrypt_and_verify`] refuses
//! to decode a payload whose signature does not verify;
//! [`EncryptedMessage::decrypt_to_payload`] skips the check and is named so.
//!
//! ## Example
//!
//! ```no_run
//! use rsa::RsaPrivateKey;
//!
//! let mut rng = rand::thread_rng();
//! let sender = RsaPrivateKey::new(&mut rng, 2048)?;
//! let recipient = RsaPrivateKey::new(&mut rng, 2048)?;
//!
//! let sealed = rsa_envelope::sign_and_encrypt(b"hello", &sender, &recipient.to_public_key())?;
//! let container = sealed.to_bytes();
//!
//! let payload = rsa_envelope::open_container(&container, &recipient, &sender.to_public_key())?;
//! assert_eq!(payload, b"hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::chunking::{join, split};
pub use domain::config::EnvelopeConfig;
pub use domain::digest::{digest, Hash, HashAlgorithm, DIGEST_SIZE};
pub use domain::entities::{EncryptedMessage, Message, SignedMessage};
pub use domain::errors::{EnvelopeError, EnvelopeResult};
pub use ports::inbound::EnvelopeApi;
pub use ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey, KeyOperationError};
pub use service::EnvelopeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sign `payload` with `private_key` and encrypt it for `public_key`, using
/// the default configuration.
pub fn sign_and_encrypt<D, E>(
    payload: &[u8],
    private_key: &D,
    public_key: &E,
) -> EnvelopeResult<EncryptedMessage>
where
    D: EnvelopePrivateKey + ?Sized,
    E: EnvelopePublicKey + ?Sized,
{
    let config = EnvelopeConfig::default();
    Message::new(payload)
        .sign(private_key, &config)?
        .encrypt(public_key, &config)
}

/// Parse a container, decrypt it and verify the sender's signature.
pub fn open_container<D, V>(
    container: &[u8],
    private_key: &D,
    public_key: &V,
) -> EnvelopeResult<Vec<u8>>
where
    D: EnvelopePrivateKey + ?Sized,
    V: EnvelopePublicKey + ?Sized,
{
    let config = EnvelopeConfig::default();
    EncryptedMessage::from_bytes_with(container, &config)?.decrypt_and_verify(
        private_key,
        public_key,
        &config,
    )
}

/// Parse a container and decrypt it WITHOUT checking the signature.
pub fn decrypt_container<D>(container: &[u8], private_key: &D) -> EnvelopeResult<Vec<u8>>
where
    D: EnvelopePrivateKey + ?Sized,
{
    let config = EnvelopeConfig::default();
    EncryptedMessage::from_bytes_with(container, &config)?.decrypt_to_payload(private_key, &config)
}
