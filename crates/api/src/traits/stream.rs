//! Keystream generator interface

use core::iter::FusedIterator;

/// A resettable source of keystream bits.
///
/// Bits are always `0` or `1`. Output is fully determined by the generator's
/// key; [`reset`](KeystreamGenerator::reset) rewinds to the first bit after
/// key loading so that encryption and decryption see the same sequence.
pub trait KeystreamGenerator {
    /// Return the generator to the state immediately after key loading
    fn reset(&mut self);

    /// Advance one step and return the produced bit
    fn next_bit(&mut self) -> u8;

    /// Lazily produce the next `n` bits.
    ///
    /// The returned sequence is finite and cannot be restarted; draining it
    /// advances the generator by exactly `n` steps.
    fn generate(&mut self, n: usize) -> Keystream<'_, Self>
    where
        Self: Sized,
    {
        Keystream::new(self, n)
    }

    /// Fill `output` with consecutive keystream bits
    fn fill(&mut self, output: &mut [u8]) {
        for bit in output.iter_mut() {
            *bit = self.next_bit();
        }
    }
}

/// Finite keystream produced by [`KeystreamGenerator::generate`]
#[derive(Debug)]
pub struct Keystream<'a, G: ?Sized> {
    generator: &'a mut G,
    remaining: usize,
}

impl<'a, G: KeystreamGenerator + ?Sized> Keystream<'a, G> {
    /// Wrap `generator` so that it yields at most `len` bits
    pub fn new(generator: &'a mut G, len: usize) -> Self {
        Self {
            generator,
            remaining: len,
        }
    }
}

impl<G: KeystreamGenerator + ?Sized> Iterator for Keystream<'_, G> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<G: KeystreamGenerator + ?Sized> ExactSizeIterator for Keystream<'_, G> {}

impl<G: KeystreamGenerator + ?Sized> FusedIterator for Keystream<'_, G> {}
