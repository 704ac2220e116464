//! Known-answer vectors and shared helpers for the a5cipher test suites
pub mod vectors;

use a5cipher_algorithms::{Register, RegisterBank};
use rand::Rng;

/// Build a register bank with uniformly random bits from `rng`
pub fn random_bank<R: Rng>(rng: &mut R) -> RegisterBank {
    RegisterBank::new(random_register(rng), random_register(rng), random_register(rng))
}

fn random_register<const N: usize, R: Rng>(rng: &mut R) -> Register<N> {
    let mut bits = [0u8; N];
    for bit in bits.iter_mut() {
        *bit = rng.gen_range(0..=1);
    }
    // every entry is 0 or 1
    Register::from_bits(bits).unwrap_or_else(|_| Register::zeroed())
}

/// Interleaved 16-bit PCM bytes of a ramp spanning the full sample range
pub fn ramp_pcm16(samples: usize) -> Vec<u8> {
    (0..samples)
        .map(|i| (i.wrapping_mul(7919) % 65_536) as u16 as i16)
        .flat_map(i16::to_le_bytes)
        .collect()
}
