//! Random bit sources for key generation

use a5cipher_api::RandomBitSource;
use rand::RngCore;

/// Adapts any [`RngCore`] into a [`RandomBitSource`].
///
/// Each bit is the low bit of a fresh `u32`, so every key position is an
/// independent uniform draw.
#[derive(Debug, Clone)]
pub struct RngBitSource<R> {
    rng: R,
}

impl<R: RngCore> RngBitSource<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RandomBitSource for RngBitSource<R> {
    #[inline]
    fn next_bit(&mut self) -> u8 {
        (self.rng.next_u32() & 1) as u8
    }
}

/// Replays a fixed bit pattern, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedBitSource {
    bits: Vec<u8>,
    position: usize,
}

impl FixedBitSource {
    /// Create a source cycling through `bits`; an empty pattern yields zeros
    pub fn new(bits: Vec<u8>) -> Self {
        Self { bits, position: 0 }
    }
}

impl RandomBitSource for FixedBitSource {
    fn next_bit(&mut self) -> u8 {
        if self.bits.is_empty() {
            return 0;
        }
        let bit = self.bits[self.position] & 1;
        self.position = (self.position + 1) % self.bits.len();
        bit
    }
}
