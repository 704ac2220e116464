//! Audio format types shared between the sample cipher and containers

use a5cipher_params::pcm::{I16_MASK, I16_MAX, I16_MIN, U8_MASK, U8_MAX, U8_MIN};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of one PCM sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleWidth {
    /// 1 byte, unsigned, 0..=255
    U8,
    /// 2 bytes, signed little-endian, -32768..=32767
    I16,
}

impl SampleWidth {
    /// Width in bytes
    pub const fn bytes(self) -> u16 {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
        }
    }

    /// Full-scale value a keystream bit of 1 masks with
    pub const fn max_value(self) -> i32 {
        match self {
            Self::U8 => U8_MASK,
            Self::I16 => I16_MASK,
        }
    }

    /// Inclusive range of valid sample values
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::U8 => (U8_MIN, U8_MAX),
            Self::I16 => (I16_MIN, I16_MAX),
        }
    }
}

impl TryFrom<u16> for SampleWidth {
    type Error = Error;

    fn try_from(width: u16) -> Result<Self> {
        match width {
            1 => Ok(Self::U8),
            2 => Ok(Self::I16),
            _ => Err(Error::UnsupportedFormat { width }),
        }
    }
}

/// Container-level description of a PCM stream.
///
/// Opaque to the cipher: it is read for the sample width and otherwise handed
/// back unchanged so the container can re-encode the processed samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatDescriptor {
    /// Number of interleaved channels
    pub channels: u16,
    /// Bytes per sample
    pub sample_width: u16,
    /// Frames per second
    pub frame_rate: u32,
    /// Number of frames in the stream
    pub frame_count: u32,
}

impl FormatDescriptor {
    /// Create a new descriptor
    pub fn new(channels: u16, sample_width: u16, frame_rate: u32, frame_count: u32) -> Self {
        Self {
            channels,
            sample_width,
            frame_rate,
            frame_count,
        }
    }

    /// The sample width, if the masking pipeline supports it
    pub fn width(&self) -> Result<SampleWidth> {
        SampleWidth::try_from(self.sample_width)
    }

    /// Bytes per interleaved frame
    pub fn block_align(&self) -> u32 {
        u32::from(self.channels) * u32::from(self.sample_width)
    }
}
