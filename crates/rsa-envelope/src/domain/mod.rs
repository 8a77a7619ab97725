//! # Domain Layer
//!
//! Pure protocol logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod chunking;
pub mod codec;
pub mod config;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod signing;
pub mod wire;
