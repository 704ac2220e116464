//! Trait definitions shared across the a5cipher crates

pub mod random;
pub mod stream;

pub use random::RandomBitSource;
pub use stream::{Keystream, KeystreamGenerator};
