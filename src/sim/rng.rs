//! Immutable seeded generator
//!
//! Linear congruential generator with GCC's constants. Drawing never mutates:
//! callers thread the generator forward with [`Lcg::next`].

use serde::{Deserialize, Serialize};

/// Modulus (2^31)
const M: u64 = 0x8000_0000;
/// Multiplier
const A: u64 = 1_103_515_245;
/// Increment
const C: u64 = 12_345;

/// Pure pseudo-random source wrapping a single seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current seed
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Integer derived from the current seed, in [0, 2^31)
    #[inline]
    pub fn next_int(&self) -> u32 {
        ((A * self.seed as u64 + C) % M) as u32
    }

    /// Float in [0, 1] derived from the current seed
    #[inline]
    pub fn draw(&self) -> f64 {
        self.next_int() as f64 / (M - 1) as f64
    }

    /// Generator for the following draw
    #[must_use]
    #[inline]
    pub fn next(&self) -> Self {
        Self::new(self.next_int())
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(1)
    }
}
