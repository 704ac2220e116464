//! Audio container collaborators
//!
//! A container turns file bytes into a [`FormatDescriptor`] plus raw PCM
//! bytes and back. The sample cipher never looks inside the descriptor beyond
//! the sample width, so any container that preserves it round-trips cleanly.

use a5cipher_api::error::Result;
use a5cipher_api::FormatDescriptor;

pub mod wav;

pub use wav::WavContainer;

/// Reads and writes one audio file format
pub trait AudioContainer {
    /// Split `bytes` into the stream format and its raw PCM data
    fn decode(&self, bytes: &[u8]) -> Result<(FormatDescriptor, Vec<u8>)>;

    /// Build a complete file from `format` and raw PCM data
    fn encode(&self, format: &FormatDescriptor, pcm: &[u8]) -> Result<Vec<u8>>;
}
