//! Randomness interface for key generation

/// A source of uniformly distributed random bits.
///
/// Key generation takes this as an explicit argument so tests can supply a
/// fixed or seeded source instead of a process-global generator.
pub trait RandomBitSource {
    /// Return the next random bit (`0` or `1`)
    fn next_bit(&mut self) -> u8;
}

impl<S: RandomBitSource + ?Sized> RandomBitSource for &mut S {
    fn next_bit(&mut self) -> u8 {
        (**self).next_bit()
    }
}
