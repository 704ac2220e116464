//! A5/1-style majority-clocked keystream generator
//!
//! The generator state is an explicit [`RegisterBank`] value driven by free
//! step functions ([`majority`], [`clock_all`], [`next_bit`], [`load_key`]),
//! so each register and the combiner can be exercised in isolation.
//! [`A51`] couples a bank with the [`Key`] that loaded it and implements
//! [`KeystreamGenerator`].

use core::fmt;

use a5cipher_api::{KeystreamGenerator, RandomBitSource, Result as CoreResult};
use a5cipher_params::a51::{
    KEY_LOADING_ROUNDS, R1_CLOCK_BIT, R1_LEN, R1_TAPS, R2_CLOCK_BIT, R2_LEN, R2_TAPS,
    R3_CLOCK_BIT, R3_LEN, R3_TAPS,
};
use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::Key;

mod register;
pub use register::Register;

/// The three registers of the generator
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct RegisterBank {
    r1: Register<R1_LEN>,
    r2: Register<R2_LEN>,
    r3: Register<R3_LEN>,
}

impl RegisterBank {
    /// Create a bank from explicit register contents
    pub fn new(r1: Register<R1_LEN>, r2: Register<R2_LEN>, r3: Register<R3_LEN>) -> Self {
        Self { r1, r2, r3 }
    }

    /// A bank with every bit cleared
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Register R1 (19 bits)
    pub fn r1(&self) -> &Register<R1_LEN> {
        &self.r1
    }

    /// Register R2 (22 bits)
    pub fn r2(&self) -> &Register<R2_LEN> {
        &self.r2
    }

    /// Register R3 (23 bits)
    pub fn r3(&self) -> &Register<R3_LEN> {
        &self.r3
    }

    /// Current clock bits of R1, R2 and R3
    pub fn clock_bits(&self) -> [u8; 3] {
        [
            self.r1.bit(R1_CLOCK_BIT),
            self.r2.bit(R2_CLOCK_BIT),
            self.r3.bit(R3_CLOCK_BIT),
        ]
    }

    /// XOR of the three tail bits
    pub fn output(&self) -> u8 {
        self.r1.tail() ^ self.r2.tail() ^ self.r3.tail()
    }
}

/// Which registers advanced during one [`clock_all`] step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clocked {
    /// R1 advanced
    pub r1: bool,
    /// R2 advanced
    pub r2: bool,
    /// R3 advanced
    pub r3: bool,
}

impl Clocked {
    /// Number of registers that advanced
    pub fn count(&self) -> usize {
        usize::from(self.r1) + usize::from(self.r2) + usize::from(self.r3)
    }
}

/// Majority of the three clock bits: 1 if at least two of them are 1
#[inline]
pub fn majority(bank: &RegisterBank) -> u8 {
    let [c1, c2, c3] = bank.clock_bits();
    u8::from(c1 + c2 + c3 >= 2)
}

/// Clock every register whose clock bit agrees with the majority.
///
/// At least two of the three clock bits always equal the majority, so at
/// least two registers advance per step.
pub fn clock_all(bank: &mut RegisterBank) -> Clocked {
    let maj = majority(bank);
    let [c1, c2, c3] = bank.clock_bits();
    let clocked = Clocked {
        r1: c1 == maj,
        r2: c2 == maj,
        r3: c3 == maj,
    };

    if clocked.r1 {
        bank.r1.clock(&R1_TAPS);
    }
    if clocked.r2 {
        bank.r2.clock(&R2_TAPS);
    }
    if clocked.r3 {
        bank.r3.clock(&R3_TAPS);
    }
    clocked
}

/// Advance one step and return the XOR of the post-step tail bits
#[inline]
pub fn next_bit(bank: &mut RegisterBank) -> u8 {
    clock_all(bank);
    bank.output()
}

/// Load `key` into `bank`.
///
/// All registers are cleared, then for each key bit in order: one
/// [`clock_all`] step on the current state, followed by XOR-ing the key bit
/// into the head of all three registers, clocked or not. There is no warm-up
/// phase; the bank is ready to emit immediately.
pub fn load_key(bank: &mut RegisterBank, key: &Key) {
    bank.zeroize();
    for i in 0..KEY_LOADING_ROUNDS {
        clock_all(bank);
        let bit = key.bit(i);
        bank.r1.xor_head(bit);
        bank.r2.xor_head(bit);
        bank.r3.xor_head(bit);
    }
}

/// Cipher state: the register bank plus the key that loaded it.
///
/// The registers can only change by clocking or by re-loading the key, so a
/// [`reset`](KeystreamGenerator::reset) always returns to the same
/// post-key-loading state and replays the same keystream.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct A51 {
    key: Key,
    registers: RegisterBank,
}

impl A51 {
    /// Create a generator loaded with `key`
    pub fn new(key: Key) -> Self {
        let mut cipher = Self {
            key,
            registers: RegisterBank::zeroed(),
        };
        cipher.load();
        cipher
    }

    /// Create a generator with a key drawn from `source`
    pub fn with_random_key<S: RandomBitSource + ?Sized>(source: &mut S) -> Self {
        Self::new(Key::random(source))
    }

    /// Create a generator with a key from the thread-local OS-seeded RNG
    #[cfg(feature = "std")]
    pub fn random() -> Self {
        Self::new(Key::generate())
    }

    /// Create a generator from a 16-character hex key
    pub fn from_hex(hex_key: &str) -> CoreResult<Self> {
        Ok(Self::new(Key::from_hex(hex_key)?))
    }

    /// The key currently loaded
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The loaded key as 16 lowercase hex characters
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    /// Replace the key and re-load the registers
    pub fn set_key(&mut self, key: Key) {
        self.key = key;
        self.load();
        debug!("A5/1 key replaced; registers re-initialized");
    }

    /// Replace the key from its hex form and re-load the registers.
    ///
    /// On error the current key and register state are left untouched.
    pub fn set_key_from_hex(&mut self, hex_key: &str) -> CoreResult<()> {
        let key = Key::from_hex(hex_key)?;
        self.set_key(key);
        Ok(())
    }

    /// Current register contents
    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    fn load(&mut self) {
        load_key(&mut self.registers, &self.key);
        debug!("loaded {} key bits into A5/1 registers", KEY_LOADING_ROUNDS);
    }
}

impl KeystreamGenerator for A51 {
    fn reset(&mut self) {
        self.load();
    }

    #[inline]
    fn next_bit(&mut self) -> u8 {
        next_bit(&mut self.registers)
    }
}

impl fmt::Debug for A51 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("A51")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
