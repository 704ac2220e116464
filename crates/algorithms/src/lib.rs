//! Keystream primitives for the a5cipher library
//!
//! This crate implements an A5/1-style generator: three linear feedback shift
//! registers of 19, 22 and 23 bits, irregularly clocked by a majority vote
//! over one clock bit per register, and loaded from a 64-bit key by 64 rounds
//! of clock-then-XOR.
//!
//! The generator reproduces a simplified variant of the GSM cipher exactly
//! (no frame-number loading, no warm-up discard). It is **not** a secure
//! cipher and must not be used to protect anything of value.
//!
//! # Example
//!
//! ```
//! use a5cipher_algorithms::{A51, Key, KeystreamGenerator};
//!
//! let key = Key::from_hex("ffffffffffffffff").unwrap();
//! let mut cipher = A51::new(key);
//!
//! let first: Vec<u8> = cipher.generate(8).collect();
//! assert_eq!(first, vec![0, 0, 1, 1, 0, 1, 1, 1]);
//!
//! cipher.reset();
//! let again: Vec<u8> = cipher.generate(8).collect();
//! assert_eq!(first, again);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Stream cipher implementations
pub mod stream;
pub use stream::a51::{clock_all, load_key, majority, next_bit, Clocked, Register, RegisterBank, A51};

// Key type
pub mod types;
pub use types::Key;

// Random bit sources for key generation
pub mod random;
pub use random::{FixedBitSource, RngBitSource};

// Keystream and randomness traits from the API crate
pub use a5cipher_api::{Keystream, KeystreamGenerator, RandomBitSource};
