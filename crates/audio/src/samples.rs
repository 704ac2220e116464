//! Decoded PCM sample sequences

use a5cipher_api::error::{validate, Result};
use a5cipher_api::SampleWidth;
use byteorder::{ByteOrder, LittleEndian};

/// Samples of one supported width, interleaved across channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleBuffer {
    /// Unsigned 8-bit samples
    U8(Vec<u8>),
    /// Signed 16-bit samples
    I16(Vec<i16>),
}

impl SampleBuffer {
    /// Decode raw little-endian PCM bytes of the given width
    pub fn from_pcm(bytes: &[u8], width: SampleWidth) -> Result<Self> {
        match width {
            SampleWidth::U8 => Ok(Self::U8(bytes.to_vec())),
            SampleWidth::I16 => {
                validate::multiple_of("PCM sample data", bytes.len(), 2)?;
                let mut samples = vec![0i16; bytes.len() / 2];
                LittleEndian::read_i16_into(bytes, &mut samples);
                Ok(Self::I16(samples))
            }
        }
    }

    /// Encode back to raw little-endian PCM bytes
    pub fn to_pcm(&self) -> Vec<u8> {
        match self {
            Self::U8(samples) => samples.clone(),
            Self::I16(samples) => {
                let mut bytes = vec![0u8; samples.len() * 2];
                LittleEndian::write_i16_into(samples, &mut bytes);
                bytes
            }
        }
    }

    pub fn width(&self) -> SampleWidth {
        match self {
            Self::U8(_) => SampleWidth::U8,
            Self::I16(_) => SampleWidth::I16,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::U8(samples) => samples.len(),
            Self::I16(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for SampleBuffer {
    fn from(samples: Vec<u8>) -> Self {
        Self::U8(samples)
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self::I16(samples)
    }
}
