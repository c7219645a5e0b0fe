//! xorshift64* general-purpose generator
//!
//! Used where a cheap, seedable source is enough: scrambling tables from
//! configuration. It is not partitioned into streams and never feeds
//! simulation output directly.
//!
//! # Determinism
//!
//! Same seed → same sequence. Configured tables depend on it, so the
//! algorithm and its output mapping must never change.

use super::UniformSource;

/// Deterministic xorshift64* generator
///
/// # Example
/// ```
/// use nlstream_core_rs::rng::Xorshift64Star;
///
/// let mut rng = Xorshift64Star::new(12345);
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone)]
pub struct Xorshift64Star {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl Xorshift64Star {
    /// Create a generator with the given seed
    ///
    /// A zero seed is replaced by 1 (zero is a fixed point of xorshift).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Next value in [0.0, 1.0) with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl UniformSource for Xorshift64Star {
    fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as f64;
        lo + ((self.next_f64() * span) as usize).min(hi - lo)
    }
}
