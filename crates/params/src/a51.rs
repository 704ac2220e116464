//! Constants for the A5/1-style keystream generator

/// Length of register R1 in bits
pub const R1_LEN: usize = 19;

/// Length of register R2 in bits
pub const R2_LEN: usize = 22;

/// Length of register R3 in bits
pub const R3_LEN: usize = 23;

/// Feedback taps of R1
pub const R1_TAPS: [usize; 4] = [13, 16, 17, 18];

/// Feedback taps of R2
pub const R2_TAPS: [usize; 2] = [20, 21];

/// Feedback taps of R3
pub const R3_TAPS: [usize; 4] = [7, 20, 21, 22];

/// Clock-bit index of R1
pub const R1_CLOCK_BIT: usize = 8;

/// Clock-bit index of R2
pub const R2_CLOCK_BIT: usize = 10;

/// Clock-bit index of R3
pub const R3_CLOCK_BIT: usize = 10;

/// Key size in bits
pub const KEY_BITS: usize = 64;

/// Key size in bytes
pub const KEY_BYTES: usize = KEY_BITS / 8;

/// Length of the hexadecimal key representation
pub const KEY_HEX_LEN: usize = KEY_BITS / 4;

/// Number of clock+XOR rounds used to load the key
pub const KEY_LOADING_ROUNDS: usize = KEY_BITS;
