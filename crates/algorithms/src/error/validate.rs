//! Validation utilities for keystream primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that every entry of `bits` is 0 or 1
#[inline(always)]
pub fn bits(name: &'static str, bits: &[u8]) -> Result<()> {
    parameter(bits.iter().all(|&b| b <= 1), name, "bit values must be 0 or 1")
}
