//! Shared fixtures: key pairs are expensive to generate, so each one is built
//! once per test binary and handed out by reference.

use rsa::{RsaPrivateKey, RsaPublicKey};
use std::sync::{Once, OnceLock};
use tracing_subscriber::EnvFilter;

/// `(private, public)` RSA key pair.
pub type KeyPair = (RsaPrivateKey, RsaPublicKey);

/// Short UTF-8 (Polish) payload for the basic round trip.
pub const SHORT_PAYLOAD: &str = "Taka tam wiadomość";

/// Multi-byte text used for chunk-boundary checks.
pub const SPLIT_TEXT: &str = "Zażółć gęślą jaźć. Lorem Ipsum. Foo Bar.";

/// Generate a fresh key pair.
///
/// # Panics
///
/// Panics if the RSA key cannot be generated.
pub fn generate_key_pair(bits: usize) -> KeyPair {
    let private_key =
        RsaPrivateKey::new(&mut rand::thread_rng(), bits).expect("key generation failed");
    let public_key = private_key.to_public_key();
    (private_key, public_key)
}

/// Sender pair "A" (2048-bit).
pub fn sender() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(2048))
}

/// Recipient pair "B" (2048-bit).
pub fn recipient() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(2048))
}

/// Unrelated pair used as the wrong key (2048-bit).
pub fn stranger() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(2048))
}

/// A 1024-bit pair: smaller chunks, more of them.
pub fn small_key() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(1024))
}

/// Several KiB of text, enough for dozens of chunks.
pub fn lorem() -> Vec<u8> {
    const SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
        Sed hendrerit lectus eu sapien dictum cursus. Duis fermentum tempus ligula et luctus. ";
    SENTENCE.repeat(40).into_bytes()
}

/// Install a test subscriber once. Honours `RUST_LOG`, defaults to `warn`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
