//! Public API traits and types for the a5cipher library
//!
//! This crate provides the public API surface shared by the a5cipher crates:
//! the unified error type, the keystream and randomness traits, and the
//! audio format descriptor passed between the sample cipher and container
//! collaborators.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{FormatDescriptor, SampleWidth};

pub use traits::{Keystream, KeystreamGenerator, RandomBitSource};
