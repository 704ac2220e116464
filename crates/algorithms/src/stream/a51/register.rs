//! Fixed-length shift register with tap feedback

use core::fmt;
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// A shift register of exactly `N` bits.
///
/// Index 0 is the head (most recently inserted bit) and index `N - 1` is the
/// tail (the observed output bit). Every entry is 0 or 1.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Register<const N: usize> {
    bits: [u8; N],
}

impl<const N: usize> Register<N> {
    /// Number of bits in the register
    pub const LEN: usize = N;

    /// Create an all-zero register
    pub fn zeroed() -> Self {
        Self { bits: [0u8; N] }
    }

    /// Create a register from explicit bit values
    pub fn from_bits(bits: [u8; N]) -> Result<Self> {
        validate::bits("register bits", &bits)?;
        Ok(Self { bits })
    }

    /// Bit at `index`
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// The head bit (index 0)
    #[inline]
    pub fn head(&self) -> u8 {
        self.bits[0]
    }

    /// The tail bit (index `N - 1`)
    #[inline]
    pub fn tail(&self) -> u8 {
        self.bits[N - 1]
    }

    /// All bits, head first
    pub fn bits(&self) -> &[u8; N] {
        &self.bits
    }

    /// XOR of the bits at `taps`, without mutating the register
    #[inline]
    pub fn feedback(&self, taps: &[usize]) -> u8 {
        taps.iter().fold(0, |acc, &tap| acc ^ self.bits[tap])
    }

    /// Shift one position toward the tail and insert the feedback at the head.
    ///
    /// The feedback is taken from the pre-shift contents; the old tail bit is
    /// discarded.
    #[inline]
    pub fn clock(&mut self, taps: &[usize]) {
        let feedback = self.feedback(taps);
        self.bits.copy_within(0..N - 1, 1);
        self.bits[0] = feedback;
    }

    /// XOR `bit` into the head
    #[inline]
    pub(crate) fn xor_head(&mut self, bit: u8) {
        self.bits[0] ^= bit;
    }
}

impl<const N: usize> Default for Register<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> fmt::Debug for Register<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register<{}>(", N)?;
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        write!(f, ")")
    }
}
