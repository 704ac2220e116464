//! Keystream masking of PCM samples
//!
//! Every sample consumes exactly one keystream bit. A bit of `1` XORs the
//! sample with the full-scale value of its width (255 or 32767); a bit of `0`
//! leaves it unchanged. The operation is an involution, so the same call
//! with the same key both encrypts and decrypts.

use a5cipher_api::error::{Error, Result};
use a5cipher_api::{FormatDescriptor, KeystreamGenerator, SampleWidth};
use log::debug;

use crate::config::PipelineConfig;
use crate::samples::SampleBuffer;

/// Mask one sample with one keystream bit.
///
/// The XOR is computed in `i32` and clamped to the width's range. Both masks
/// keep every in-range input in range, so the clamp only matters for inputs
/// that were already out of range.
#[inline]
pub fn mask_sample(sample: i32, bit: u8, width: SampleWidth) -> i32 {
    let masked = i32::from(bit & 1) * width.max_value();
    let (min, max) = width.range();
    (sample ^ masked).clamp(min, max)
}

trait PcmSample: Copy {
    const WIDTH: SampleWidth;

    fn to_i32(self) -> i32;
    fn from_i32(value: i32) -> Self;
}

impl PcmSample for u8 {
    const WIDTH: SampleWidth = SampleWidth::U8;

    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    // value is already clamped to 0..=255
    fn from_i32(value: i32) -> Self {
        value as u8
    }
}

impl PcmSample for i16 {
    const WIDTH: SampleWidth = SampleWidth::I16;

    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    fn from_i32(value: i32) -> Self {
        value as i16
    }
}

/// Applies a keystream to sample buffers in fixed-size chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleCipher {
    config: PipelineConfig,
}

impl SampleCipher {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Mask every sample of `samples`.
    ///
    /// The generator is reset first, so the result depends only on its key
    /// and the input. Chunks are processed strictly in order.
    pub fn apply<G: KeystreamGenerator>(
        &self,
        samples: &SampleBuffer,
        generator: &mut G,
    ) -> SampleBuffer {
        generator.reset();
        match samples {
            SampleBuffer::U8(values) => SampleBuffer::U8(self.mask_all(values, generator)),
            SampleBuffer::I16(values) => SampleBuffer::I16(self.mask_all(values, generator)),
        }
    }

    /// Mask `samples` after checking them against the stream's format
    pub fn process<G: KeystreamGenerator>(
        &self,
        samples: &SampleBuffer,
        format: &FormatDescriptor,
        generator: &mut G,
    ) -> Result<SampleBuffer> {
        let width = format.width()?;
        if samples.width() != width {
            return Err(Error::validation(
                "SampleCipher::process",
                format!(
                    "sample buffer is {} bytes wide but the format declares {}",
                    samples.width().bytes(),
                    width.bytes()
                ),
            ));
        }
        Ok(self.apply(samples, generator))
    }

    /// Mask raw little-endian PCM bytes described by `format`
    pub fn apply_pcm<G: KeystreamGenerator>(
        &self,
        pcm: &[u8],
        format: &FormatDescriptor,
        generator: &mut G,
    ) -> Result<Vec<u8>> {
        let samples = SampleBuffer::from_pcm(pcm, format.width()?)?;
        Ok(self.apply(&samples, generator).to_pcm())
    }

    fn mask_all<T: PcmSample, G: KeystreamGenerator>(
        &self,
        samples: &[T],
        generator: &mut G,
    ) -> Vec<T> {
        let chunk_size = self.config.chunk_size();
        let mut output = Vec::with_capacity(samples.len());
        let mut chunks = 0usize;

        for chunk in samples.chunks(chunk_size) {
            let keystream = generator.generate(chunk.len());
            output.extend(
                chunk
                    .iter()
                    .zip(keystream)
                    .map(|(&sample, bit)| T::from_i32(mask_sample(sample.to_i32(), bit, T::WIDTH))),
            );
            chunks += 1;
        }

        debug!(
            "masked {} {}-byte samples in {} chunk(s) of up to {}",
            samples.len(),
            T::WIDTH.bytes(),
            chunks,
            chunk_size
        );
        output
    }
}
