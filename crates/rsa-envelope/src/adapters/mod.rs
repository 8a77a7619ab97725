//! # Adapters Layer
//!
//! Implementations of the outbound ports for concrete key types.

pub mod rsa_keys;
