//! # a5cipher
//!
//! An A5/1-style majority-clocked LFSR keystream generator and a
//! deterministic PCM audio masking pipeline built on it.
//!
//! A5/1 is broken and must not be used to protect real data. This crate is
//! meant for teaching and for reproducing legacy scrambled audio.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! a5cipher = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, including OS-seeded random keys
//! - `audio` (default): the sample masking pipeline and WAV container
//! - `serde`: serialization of format descriptors and pipeline configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`a5cipher-api`]: error type, keystream traits and format descriptors
//! - [`a5cipher-params`]: register geometry and PCM constants
//! - [`a5cipher-algorithms`]: shift registers, key loading and the A5/1 generator
//! - [`a5cipher-audio`]: sample masking, WAV container and file operations
//!
//! ```
//! use a5cipher::prelude::*;
//!
//! let mut cipher = A51::from_hex("0123456789abcdef")?;
//! let masking = SampleCipher::default();
//! let masked = masking.apply(&SampleBuffer::U8(vec![128; 4]), &mut cipher);
//! assert_eq!(masking.apply(&masked, &mut cipher), SampleBuffer::U8(vec![128; 4]));
//! # Ok::<(), a5cipher::prelude::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use a5cipher_algorithms as algorithms;
pub use a5cipher_api as api;
pub use a5cipher_params as params;

// Feature-gated re-exports
#[cfg(feature = "audio")]
pub use a5cipher_audio as audio;

pub use zeroize;

/// Common imports for a5cipher users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeystreamGenerator, RandomBitSource};

    pub use crate::api::{FormatDescriptor, SampleWidth};

    pub use crate::algorithms::{Key, A51};

    #[cfg(feature = "audio")]
    pub use crate::audio::{
        process_audio_file, AudioContainer, Mode, PipelineConfig, ProcessOutcome, SampleBuffer,
        SampleCipher, WavContainer,
    };

    pub use zeroize::Zeroize;
}
