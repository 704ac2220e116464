//! Stream cipher implementations
//!
//! This module provides keystream generators: symmetric constructions that
//! emit a pseudorandom bit sequence determined entirely by a key, which is
//! then combined with the data being protected.
//!
//! # Available Generators
//!
//! - A5/1 (simplified): three majority-clocked LFSRs loaded from a 64-bit key
//!
//! # Security Considerations
//!
//! A5/1-family generators are broken; practical attacks recover the internal
//! state from short keystream segments. The implementation here exists to
//! reproduce a fixed bit-level behavior, not to provide confidentiality.
//! Reusing a key reuses the keystream exactly.

/// A5/1-style generator
pub mod a51;

// Re-export commonly used types
pub use a51::{Clocked, Register, RegisterBank, A51};
