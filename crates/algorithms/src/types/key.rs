//! 64-bit generator key
//!
//! The key is an ordered sequence of 64 bits. Its exchange format is 16 hex
//! characters, each contributing 4 bits most-significant first, so the key
//! `8000000000000000` has only bit 0 set.

use core::fmt;

use a5cipher_api::{RandomBitSource, Result as CoreResult};
use a5cipher_params::a51::{KEY_BITS, KEY_BYTES, KEY_HEX_LEN};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{to_core_result, validate, Error, Result};

/// A 64-bit key, stored one bit per entry and zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bits: [u8; KEY_BITS],
}

impl Key {
    /// Create a key from 64 explicit bits (each 0 or 1)
    pub fn from_bits(bits: [u8; KEY_BITS]) -> CoreResult<Self> {
        to_core_result(Self::try_from_bits(bits), "Key::from_bits")
    }

    fn try_from_bits(bits: [u8; KEY_BITS]) -> Result<Self> {
        validate::bits("key bits", &bits)?;
        Ok(Self { bits })
    }

    /// Create a key from 8 bytes, most-significant bit of byte 0 first
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        let mut bits = [0u8; KEY_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (bytes[i / 8] >> (7 - i % 8)) & 1;
        }
        Self { bits }
    }

    /// Parse the 16-character hexadecimal exchange format.
    ///
    /// Fails with a validation error when the string is not exactly 16
    /// characters long or contains anything other than hex digits.
    pub fn from_hex(hex_key: &str) -> CoreResult<Self> {
        to_core_result(Self::try_from_hex(hex_key), "Key::from_hex")
    }

    fn try_from_hex(hex_key: &str) -> Result<Self> {
        validate::length("hex key", hex_key.chars().count(), KEY_HEX_LEN).map_err(|_| {
            Error::param("key", "key must be 16 hex characters (64 bits)")
        })?;

        let mut bytes = Zeroizing::new([0u8; KEY_BYTES]);
        hex::decode_to_slice(hex_key, &mut bytes[..])
            .map_err(|e| Error::param("key", e.to_string()))?;

        Ok(Self::from_bytes(*bytes))
    }

    /// Generate a key with one bit per position drawn from `source`
    pub fn random<S: RandomBitSource + ?Sized>(source: &mut S) -> Self {
        let mut bits = [0u8; KEY_BITS];
        for bit in bits.iter_mut() {
            *bit = source.next_bit() & 1;
        }
        Self { bits }
    }

    /// Generate a key from the thread-local OS-seeded RNG
    #[cfg(feature = "std")]
    pub fn generate() -> Self {
        let mut source = crate::random::RngBitSource::new(rand::thread_rng());
        Self::random(&mut source)
    }

    /// The 16-character lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(&*self.to_bytes())
    }

    /// Pack the bits into 8 bytes, most-significant bit first
    pub fn to_bytes(&self) -> Zeroizing<[u8; KEY_BYTES]> {
        let mut bytes = Zeroizing::new([0u8; KEY_BYTES]);
        for (i, &bit) in self.bits.iter().enumerate() {
            bytes[i / 8] |= bit << (7 - i % 8);
        }
        bytes
    }

    /// Bit at position `index` (0..64)
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// All 64 bits in order
    pub fn bits(&self) -> &[u8; KEY_BITS] {
        &self.bits
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.bits[..].ct_eq(&other.bits[..]).into()
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key([REDACTED])")
    }
}
