//! # Adversarial Cases
//!
//! What an attacker or a broken channel can do to an envelope, and the error
//! each case must surface. None of them may yield a payload from the verified
//! path.

#[cfg(test)]
mod tests {
    use crate::fixtures::{init_tracing, lorem, recipient, sender, stranger};
    use rsa_envelope::{
        open_container, sign_and_encrypt, EncryptedMessage, EnvelopeConfig, EnvelopeError,
        Message, SignedMessage,
    };

    fn config() -> EnvelopeConfig {
        EnvelopeConfig::default()
    }

    // =============================================================================
    // WRONG KEYS
    // =============================================================================

    #[test]
    fn test_wrong_recipient_key_fails_decryption() {
        init_tracing();
        let (sender_private, _) = sender();
        let (_, recipient_public) = recipient();
        let (stranger_private, _) = stranger();

        let sealed = sign_and_encrypt(b"not for you", sender_private, recipient_public).unwrap();
        let result = sealed.decrypt_to_payload(stranger_private, &config());

        match result {
            Err(EnvelopeError::Decryption { .. }) | Err(EnvelopeError::Decode(_)) => {}
            other => panic!("expected decryption failure, got {other:?}"),
        }
    }

    #[test]
    fn test_impersonated_sender_rejected() {
        let (recipient_private, recipient_public) = recipient();
        let (stranger_private, _) = stranger();
        let (_, sender_public) = sender();

        // Stranger signs, recipient expects the sender
        let sealed = sign_and_encrypt(b"trust me", stranger_private, recipient_public).unwrap();
        let result = sealed.decrypt_and_verify(recipient_private, sender_public, &config());

        assert_eq!(result, Err(EnvelopeError::SignatureRejected));
        assert!(result.unwrap_err().is_untrusted());
    }

    // =============================================================================
    // TAMPERING
    // =============================================================================

    #[test]
    fn test_unverified_path_is_independent_of_signature() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();

        let (payload, mut signature) = Message::new(b"forged".to_vec())
            .sign(sender_private, &config())
            .unwrap()
            .into_parts();
        let last = signature.len() - 1;
        signature[last] ^= 0xFF;

        let sealed = SignedMessage::from_parts(payload, signature)
            .encrypt(recipient_public, &config())
            .unwrap();

        assert_eq!(
            sealed.decrypt_to_payload(recipient_private, &config()).unwrap(),
            b"forged"
        );
        assert_eq!(
            sealed.decrypt_and_verify(recipient_private, sender_public, &config()),
            Err(EnvelopeError::SignatureRejected)
        );
    }

    #[test]
    fn test_swapped_payload_rejected() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();

        let (_, signature) = Message::new(b"original".to_vec())
            .sign(sender_private, &config())
            .unwrap()
            .into_parts();
        let (other_payload, _) = Message::new(b"replaced".to_vec())
            .sign(sender_private, &config())
            .unwrap()
            .into_parts();

        let sealed = SignedMessage::from_parts(other_payload, signature)
            .encrypt(recipient_public, &config())
            .unwrap();

        assert_eq!(
            sealed.decrypt_and_verify(recipient_private, sender_public, &config()),
            Err(EnvelopeError::SignatureRejected)
        );
    }

    #[test]
    fn test_flipped_ciphertext_byte_fails() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();

        let sealed = sign_and_encrypt(&lorem(), sender_private, recipient_public).unwrap();
        let mut chunks = sealed.chunks().to_vec();
        chunks[3][100] ^= 0x01;

        let tampered = EncryptedMessage::from_chunks(chunks);
        assert!(matches!(
            tampered.decrypt_and_verify(recipient_private, sender_public, &config()),
            Err(EnvelopeError::Decryption { chunk: 3, .. })
        ));
    }

    // =============================================================================
    // BROKEN CHANNEL
    // =============================================================================

    #[test]
    fn test_reordered_chunks_never_verify() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();
        let payload = lorem();

        let sealed = sign_and_encrypt(&payload, sender_private, recipient_public).unwrap();
        let mut chunks = sealed.chunks().to_vec();
        chunks.swap(1, 2);

        let reordered = EncryptedMessage::from_chunks(chunks);
        let result = reordered.decrypt_and_verify(recipient_private, sender_public, &config());
        assert!(result.is_err(), "reordered envelope opened");
    }

    #[test]
    fn test_truncated_chunk_list_fails() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();

        let sealed = sign_and_encrypt(&lorem(), sender_private, recipient_public).unwrap();
        let mut chunks = sealed.chunks().to_vec();
        chunks.pop();

        let truncated = EncryptedMessage::from_chunks(chunks);
        assert!(matches!(
            truncated.decrypt_and_verify(recipient_private, sender_public, &config()),
            Err(EnvelopeError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_container_fails() {
        let (recipient_private, _) = recipient();
        let (_, sender_public) = sender();

        let empty = EncryptedMessage::from_chunks(Vec::new()).to_bytes();
        assert!(matches!(
            open_container(&empty, recipient_private, sender_public),
            Err(EnvelopeError::Decryption { chunk: 0, .. })
        ));
    }

    #[test]
    fn test_truncated_container_bytes_fail_to_parse() {
        let (sender_private, sender_public) = sender();
        let (recipient_private, recipient_public) = recipient();

        let container = sign_and_encrypt(b"cut short", sender_private, recipient_public)
            .unwrap()
            .to_bytes();
        let cut = &container[..container.len() - 10];

        assert!(matches!(
            open_container(cut, recipient_private, sender_public),
            Err(EnvelopeError::Decode(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use crate::fixtures::{recipient, sender};
    use proptest::prelude::*;
    use rsa_envelope::{sign_and_encrypt, EnvelopeConfig};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_roundtrip_identity(payload in proptest::collection::vec(any::<u8>(), 0..1200)) {
            let (sender_private, sender_public) = sender();
            let (recipient_private, recipient_public) = recipient();

            let sealed = sign_and_encrypt(&payload, sender_private, recipient_public).unwrap();
            let opened = sealed
                .decrypt_and_verify(recipient_private, sender_public, &EnvelopeConfig::default())
                .unwrap();

            prop_assert_eq!(opened, payload);
        }
    }
}
