//! PCM audio masking pipeline for the a5cipher library
//!
//! This crate applies an A5/1 keystream to raw PCM samples one bit per
//! sample, and wraps the result in a WAV container round trip. It uses the
//! unified API error system from `a5cipher-api`.
//!
//! # Example
//!
//! ```
//! use a5cipher_algorithms::A51;
//! use a5cipher_audio::{SampleBuffer, SampleCipher};
//!
//! let mut cipher = A51::from_hex("0123456789abcdef").unwrap();
//! let masking = SampleCipher::default();
//!
//! let original = SampleBuffer::I16(vec![0, 1000, -1000, 12345]);
//! let masked = masking.apply(&original, &mut cipher);
//! let restored = masking.apply(&masked, &mut cipher);
//! assert_eq!(restored, original);
//! ```

#![forbid(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod container;
pub mod process;
pub mod samples;

// Re-export main types for convenience
pub use cipher::{mask_sample, SampleCipher};
pub use config::PipelineConfig;
pub use container::{AudioContainer, WavContainer};
pub use process::{
    process_audio_bytes, process_audio_file, process_audio_file_with, Mode, ProcessOutcome,
};
pub use samples::SampleBuffer;

// Re-export the API error system instead of custom error types
pub use a5cipher_api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use a5cipher_api::error::{validate, ResultExt};
