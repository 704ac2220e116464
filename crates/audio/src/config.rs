//! Pipeline configuration

use a5cipher_api::error::{validate, Result};
use a5cipher_params::pcm::DEFAULT_CHUNK_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning for [`SampleCipher`](crate::SampleCipher).
///
/// The chunk size bounds how many keystream bits are materialized at once.
/// It never changes the output: the keystream is consumed strictly in order
/// regardless of how the samples are split.
///
/// Deserialization goes through [`PipelineConfig::with_chunk_size`], so a
/// zero chunk size is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct PipelineConfig {
    chunk_size: usize,
}

impl PipelineConfig {
    /// Configuration with the given chunk size; zero is rejected
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self> {
        validate::parameter(chunk_size > 0, "chunk_size", "must be greater than zero")?;
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl TryFrom<usize> for PipelineConfig {
    type Error = a5cipher_api::Error;

    fn try_from(chunk_size: usize) -> Result<Self> {
        Self::with_chunk_size(chunk_size)
    }
}

impl From<PipelineConfig> for usize {
    fn from(config: PipelineConfig) -> Self {
        config.chunk_size
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
