//! Constants for PCM sample masking

/// Default number of samples processed per keystream chunk
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Full-scale mask for 8-bit unsigned samples
pub const U8_MASK: i32 = 255;

/// Lower bound of 8-bit unsigned samples
pub const U8_MIN: i32 = 0;

/// Upper bound of 8-bit unsigned samples
pub const U8_MAX: i32 = 255;

/// Full-scale mask for 16-bit signed samples
pub const I16_MASK: i32 = 32_767;

/// Lower bound of 16-bit signed samples
pub const I16_MIN: i32 = -32_768;

/// Upper bound of 16-bit signed samples
pub const I16_MAX: i32 = 32_767;
