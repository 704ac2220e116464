// src/vectors.rs
// Known-answer keystream and masking vectors

/// A keystream known-answer test
#[derive(Debug, Clone, Copy)]
pub struct KeystreamVector {
    pub key_hex: &'static str,
    pub bits: &'static [u8],
}

pub const KEYSTREAM_VECTORS: &[KeystreamVector] = &[
    KeystreamVector {
        key_hex: "ffffffffffffffff",
        bits: &[
            0, 0, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1,
            0, 1, 1, 0,
        ],
    },
    KeystreamVector {
        key_hex: "0123456789abcdef",
        bits: &[
            1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1,
            0, 0, 1, 0,
        ],
    },
    KeystreamVector {
        key_hex: "deadbeefcafef00d",
        bits: &[1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0],
    },
    KeystreamVector {
        key_hex: "0000000000000000",
        bits: &[0; 32],
    },
];

// Under the all-ones key
pub const ONES_KEY_U8_INPUT: [u8; 8] = [128; 8];
pub const ONES_KEY_U8_MASKED: [u8; 8] = [128, 128, 127, 127, 128, 127, 127, 127];

pub const ONES_KEY_I16_INPUT: [i16; 8] = [-32768, 32767, 0, 1000, -1, -1000, 12345, -12345];
pub const ONES_KEY_I16_MASKED: [i16; 8] = [-32768, 32767, 32767, 31767, -1, -31769, 20422, -20424];

/// Popcount of the first 25 000 bits under the all-ones key
pub const ONES_KEY_25000_BIT_WEIGHT: usize = 12_541;
