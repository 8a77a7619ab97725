//! # Envelope Service
//!
//! Application service layer that implements the `EnvelopeApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`EnvelopeApi`)
//! - Holds the validated `EnvelopeConfig` shared by every call
//! - Delegates protocol steps to the domain layer

use crate::domain::codec;
use crate::domain::config::EnvelopeConfig;
use crate::domain::entities::{EncryptedMessage, Message};
use crate::domain::errors::{EnvelopeError, EnvelopeResult};
use crate::ports::inbound::EnvelopeApi;
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey};
use tracing::{debug, warn};

/// Envelope Service.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeService {
    config: EnvelopeConfig,
}

impl EnvelopeService {
    /// Create a service after validating `config`.
    pub fn new(config: EnvelopeConfig) -> EnvelopeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    fn parse(&self, container: &[u8]) -> EnvelopeResult<EncryptedMessage> {
        EncryptedMessage::from_bytes_with(container, &self.config)
    }
}

impl EnvelopeApi for EnvelopeService {
    fn sign_and_encrypt(
        &self,
        payload: &[u8],
        sender_key: &dyn EnvelopePrivateKey,
        recipient_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<EncryptedMessage> {
        let encrypted = Message::new(payload)
            .sign(sender_key, &self.config)?
            .encrypt(recipient_key, &self.config)?;

        debug!(
            payload_bytes = payload.len(),
            chunks = encrypted.chunk_count(),
            algorithm = %self.config.hash_algorithm,
            "Sealed envelope"
        );
        Ok(encrypted)
    }

    fn decrypt_and_verify(
        &self,
        message: &EncryptedMessage,
        recipient_key: &dyn EnvelopePrivateKey,
        sender_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<Vec<u8>> {
        message
            .decrypt_and_verify(recipient_key, sender_key, &self.config)
            .inspect_err(|e| {
                if let EnvelopeError::SignatureRejected = e {
                    warn!(chunks = message.chunk_count(), "Envelope signature rejected");
                }
            })
    }

    fn decrypt_to_payload(
        &self,
        message: &EncryptedMessage,
        recipient_key: &dyn EnvelopePrivateKey,
    ) -> EnvelopeResult<Vec<u8>> {
        debug!(
            chunks = message.chunk_count(),
            "Opening envelope without signature check"
        );
        message.decrypt_to_payload(recipient_key, &self.config)
    }

    fn open_container(
        &self,
        container: &[u8],
        recipient_key: &dyn EnvelopePrivateKey,
        sender_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<Vec<u8>> {
        let message = self.parse(container)?;
        self.decrypt_and_verify(&message, recipient_key, sender_key)
    }

    fn decrypt_container(
        &self,
        container: &[u8],
        recipient_key: &dyn EnvelopePrivateKey,
    ) -> EnvelopeResult<Vec<u8>> {
        let message = self.parse(container)?;
        self.decrypt_to_payload(&message, recipient_key)
    }

    fn max_plaintext_size(&self, recipient_key: &dyn EnvelopePublicKey) -> EnvelopeResult<usize> {
        codec::max_plaintext_size(recipient_key, self.config.hash_algorithm)
    }
}
