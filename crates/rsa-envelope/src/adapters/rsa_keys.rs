//! # RSA Key Adapter
//!
//! Implements the key ports for the `rsa` crate:
//! - RSAES-OAEP for chunk encryption (empty label, MGF1 with the same hash)
//! - RSASSA-PKCS#1 v1.5 for signatures over a digest
//!
//! Signing and decryption use blinding and therefore draw from the
//! thread-local CSPRNG.

use crate::domain::digest::{Hash, HashAlgorithm};
use crate::ports::outbound::{EnvelopePrivateKey, EnvelopePublicKey, KeyOperationError};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use sha3::Sha3_256;

fn oaep_padding(algorithm: HashAlgorithm) -> Oaep {
    match algorithm {
        HashAlgorithm::Sha256 => Oaep::new::<Sha256>(),
        HashAlgorithm::Sha3_256 => Oaep::new::<Sha3_256>(),
    }
}

fn signature_scheme(algorithm: HashAlgorithm) -> Pkcs1v15Sign {
    match algorithm {
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha3_256 => Pkcs1v15Sign::new::<Sha3_256>(),
    }
}

impl EnvelopePublicKey for RsaPublicKey {
    fn modulus_bit_length(&self) -> usize {
        self.n().bits()
    }

    fn encrypt(
        &self,
        algorithm: HashAlgorithm,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, KeyOperationError> {
        RsaPublicKey::encrypt(self, &mut rand::thread_rng(), oaep_padding(algorithm), plaintext)
            .map_err(|e| KeyOperationError::Primitive(e.to_string()))
    }

    fn verify(
        &self,
        algorithm: HashAlgorithm,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, KeyOperationError> {
        // A PKCS#1 v1.5 signature is always exactly the modulus length
        if signature.len() != self.size() {
            return Err(KeyOperationError::MalformedSignature(format!(
                "expected {} bytes, got {}",
                self.size(),
                signature.len()
            )));
        }

        match RsaPublicKey::verify(self, signature_scheme(algorithm), digest, signature) {
            Ok(()) => Ok(true),
            Err(rsa::Error::Verification) => Ok(false),
            Err(e) => Err(KeyOperationError::MalformedSignature(e.to_string())),
        }
    }
}

impl EnvelopePrivateKey for RsaPrivateKey {
    fn sign(&self, algorithm: HashAlgorithm, digest: &Hash) -> Result<Vec<u8>, KeyOperationError> {
        self.sign_with_rng(&mut rand::thread_rng(), signature_scheme(algorithm), digest)
            .map_err(|e| KeyOperationError::Primitive(e.to_string()))
    }

    fn decrypt(
        &self,
        algorithm: HashAlgorithm,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, KeyOperationError> {
        self.decrypt_blinded(&mut rand::thread_rng(), oaep_padding(algorithm), ciphertext)
            .map_err(|e| KeyOperationError::Primitive(e.to_string()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
