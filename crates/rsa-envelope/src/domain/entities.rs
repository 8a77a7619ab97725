//! # Domain Entities
//!
//! The three envelope states and the transitions between them:
//!
//! ```text
//! send:     Message --sign--> SignedMessage --encrypt--> EncryptedMessage
//! receive:  EncryptedMessage --decrypt--> SignedMessage (unverified)
//!               --verify_and_extract--> Message | SignatureRejected
//! ```
//!
//! All three are immutable value records. A `SignedMessage` only hands out its
//! payload through [`SignedMessage::verify_and_extract`]; the unverified route
//! is [`EncryptedMessage::decrypt_without_verify`] and says so in its name.

use super::codec;
use super::config::EnvelopeConfig;
use super::errors::{EnvelopeError, EnvelopeResult};
use super::signing;
use super::wire;
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

// =============================================================================
// Message
// =============================================================================

/// The plaintext payload a caller wants protected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    payload: Vec<u8>,
}

impl Message {
    /// Wrap a payload.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Borrow the payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take the payload.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Serialize this message and sign the serialized bytes.
    pub fn sign<K>(&self, private_key: &K, config: &EnvelopeConfig) -> EnvelopeResult<SignedMessage>
    where
        K: EnvelopePrivateKey + ?Sized,
    {
        let serialized_payload = wire::encode(self);
        let signature = signing::sign(&serialized_payload, private_key, config.hash_algorithm)?;
        Ok(SignedMessage {
            serialized_payload,
            signature,
        })
    }
}

// =============================================================================
// SignedMessage
// =============================================================================

/// A serialized [`Message`] plus a signature over exactly those bytes.
///
/// Opening an envelope zeroizes the intermediate signed record once the
/// payload has been extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
pub struct SignedMessage {
    serialized_payload: Vec<u8>,
    signature: Vec<u8>,
}

impl SignedMessage {
    /// Rebuild a signed record from its fields. Nothing is checked until
    /// [`verify`](Self::verify) or [`verify_and_extract`](Self::verify_and_extract).
    pub fn from_parts(serialized_payload: Vec<u8>, signature: Vec<u8>) -> Self {
        Self {
            serialized_payload,
            signature,
        }
    }

    /// Split into `(serialized_payload, signature)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.serialized_payload, self.signature)
    }

    /// The signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Check the signature against `public_key`.
    ///
    /// `Ok(false)` for a well-formed signature that does not match;
    /// `Err(Verification)` if the signature cannot be evaluated.
    pub fn verify<K>(&self, public_key: &K, config: &EnvelopeConfig) -> EnvelopeResult<bool>
    where
        K: EnvelopePublicKey + ?Sized,
    {
        signing::verify(
            &self.serialized_payload,
            &self.signature,
            public_key,
            config.hash_algorithm,
        )
    }

    /// Verify, then decode the embedded [`Message`].
    ///
    /// The payload bytes are not decoded unless the signature verifies.
    pub fn verify_and_extract<K>(
        &self,
        public_key: &K,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<Message>
    where
        K: EnvelopePublicKey + ?Sized,
    {
        if !self.verify(public_key, config)? {
            return Err(EnvelopeError::SignatureRejected);
        }
        self.extract(config)
    }

    fn extract(&self, config: &EnvelopeConfig) -> EnvelopeResult<Message> {
        wire::decode(&self.serialized_payload, config.max_container_bytes)
    }

    /// Serialize `(payload, signature)` and encrypt it in chunks under `public_key`.
    pub fn encrypt<K>(
        &self,
        public_key: &K,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<EncryptedMessage>
    where
        K: EnvelopePublicKey + ?Sized,
    {
        let record = wire::encode(self);
        let chunks = codec::encrypt_chunks(&record, public_key, config)?;
        Ok(EncryptedMessage { chunks })
    }
}

// =============================================================================
// EncryptedMessage
// =============================================================================

/// Ordered OAEP ciphertext chunks of a serialized [`SignedMessage`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedMessage {
    chunks: Vec<Vec<u8>>,
}

impl EncryptedMessage {
    /// Wrap ciphertext chunks received from elsewhere.
    pub fn from_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self { chunks }
    }

    /// Ciphertext chunks in order.
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }

    /// Number of ciphertext chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Serialize to the byte container.
    pub fn to_bytes(&self) -> Vec<u8> {
        wire::encode(self)
    }

    /// Parse a byte container produced by [`to_bytes`](Self::to_bytes), using
    /// the default size limit.
    pub fn from_bytes(bytes: &[u8]) -> EnvelopeResult<Self> {
        Self::from_bytes_with(bytes, &EnvelopeConfig::default())
    }

    /// Parse a byte container, bounded by `config.max_container_bytes`.
    pub fn from_bytes_with(bytes: &[u8], config: &EnvelopeConfig) -> EnvelopeResult<Self> {
        if bytes.len() as u64 > config.max_container_bytes {
            return Err(EnvelopeError::Decode(format!(
                "container of {} bytes exceeds limit of {}",
                bytes.len(),
                config.max_container_bytes
            )));
        }
        wire::decode(bytes, config.max_container_bytes)
    }

    /// Decrypt and reassemble the signed record. The signature is NOT checked.
    ///
    /// Fails with `Decryption` when a chunk does not decrypt and with `Decode`
    /// when the reassembled bytes are not a signed record.
    pub fn decrypt<K>(
        &self,
        private_key: &K,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<SignedMessage>
    where
        K: EnvelopePrivateKey + ?Sized,
    {
        let mut record = codec::decrypt_chunks(&self.chunks, private_key, config)?;
        debug!(
            chunks = self.chunks.len(),
            record_bytes = record.len(),
            "Reassembled signed record"
        );
        let signed = wire::decode(&record, config.max_container_bytes);
        record.zeroize();
        signed
    }

    /// Decrypt, verify the signature against `public_key`, and return the payload.
    pub fn decrypt_and_verify<D, V>(
        &self,
        private_key: &D,
        public_key: &V,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<Vec<u8>>
    where
        D: EnvelopePrivateKey + ?Sized,
        V: EnvelopePublicKey + ?Sized,
    {
        let mut signed = self.decrypt(private_key, config)?;
        let message = signed.verify_and_extract(public_key, config);
        signed.zeroize();
        Ok(message?.into_payload())
    }

    /// Decrypt to a [`Message`] WITHOUT checking who signed it.
    ///
    /// Confidentiality only: use [`decrypt_and_verify`](Self::decrypt_and_verify)
    /// whenever authorship matters.
    pub fn decrypt_without_verify<K>(
        &self,
        private_key: &K,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<Message>
    where
        K: EnvelopePrivateKey + ?Sized,
    {
        let mut signed = self.decrypt(private_key, config)?;
        let message = signed.extract(config);
        signed.zeroize();
        message
    }

    /// Payload of [`decrypt_without_verify`](Self::decrypt_without_verify).
    pub fn decrypt_to_payload<K>(
        &self,
        private_key: &K,
        config: &EnvelopeConfig,
    ) -> EnvelopeResult<Vec<u8>>
    where
        K: EnvelopePrivateKey + ?Sized,
    {
        Ok(self.decrypt_without_verify(private_key, config)?.into_payload())
    }
}
