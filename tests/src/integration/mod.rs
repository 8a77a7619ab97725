//! # Integration Tests
//!
//! - `flows`: sender-to-recipient round trips through the public API
//! - `adversarial`: tampering, wrong keys, reordered and truncated containers

pub mod adversarial;
