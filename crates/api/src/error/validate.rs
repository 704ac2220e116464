//! Validation utilities for caller input

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::validation(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::validation(
            context,
            format!("invalid length (expected {}, got {})", expected, actual),
        ));
    }
    Ok(())
}

/// Validate that a length is a whole multiple of `unit`
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if unit == 0 || actual % unit != 0 {
        return Err(Error::processing(
            context,
            format!("length {} is not a multiple of {}", actual, unit),
        ));
    }
    Ok(())
}
