//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the envelope service.

use crate::domain::entities::EncryptedMessage;
use crate::domain::errors::EnvelopeResult;
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey};

/// Primary envelope API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait EnvelopeApi: Send + Sync {
    /// Sign `payload` with the sender's private key and encrypt it for the
    /// recipient's public key.
    fn sign_and_encrypt(
        &self,
        payload: &[u8],
        sender_key: &dyn EnvelopePrivateKey,
        recipient_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<EncryptedMessage>;

    /// Decrypt with the recipient's private key and return the payload only if
    /// the signature verifies against the sender's public key.
    ///
    /// # Errors
    /// * `EnvelopeError::SignatureRejected` - the payload is not authentic
    fn decrypt_and_verify(
        &self,
        message: &EncryptedMessage,
        recipient_key: &dyn EnvelopePrivateKey,
        sender_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<Vec<u8>>;

    /// Decrypt and return the payload WITHOUT checking the signature.
    fn decrypt_to_payload(
        &self,
        message: &EncryptedMessage,
        recipient_key: &dyn EnvelopePrivateKey,
    ) -> EnvelopeResult<Vec<u8>>;

    /// Parse a byte container, then behave as [`decrypt_and_verify`](Self::decrypt_and_verify).
    fn open_container(
        &self,
        container: &[u8],
        recipient_key: &dyn EnvelopePrivateKey,
        sender_key: &dyn EnvelopePublicKey,
    ) -> EnvelopeResult<Vec<u8>>;

    /// Parse a byte container, then behave as [`decrypt_to_payload`](Self::decrypt_to_payload).
    fn decrypt_container(
        &self,
        container: &[u8],
        recipient_key: &dyn EnvelopePrivateKey,
    ) -> EnvelopeResult<Vec<u8>>;

    /// Largest plaintext slice carried by one ciphertext chunk for this key.
    fn max_plaintext_size(&self, recipient_key: &dyn EnvelopePublicKey) -> EnvelopeResult<usize>;
}
