//! # RSA Envelope Test Suite
//!
//! Cross-module flows and adversarial cases for `rsa-envelope`, plus benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks (seal/open by payload size)
//! └── src/
//!     ├── fixtures.rs   # Cached key pairs, payloads, tracing setup
//!     └── integration/  # End-to-end flows and adversarial cases
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p envelope-tests
//!
//! # By category
//! cargo test -p envelope-tests integration::flows
//! cargo test -p envelope-tests integration::adversarial
//!
//! # Benchmarks
//! cargo bench -p envelope-tests
//! ```

pub mod fixtures;
pub mod integration;
