//! 48-bit linear congruential generator
//!
//! `x' = (0x5DEECE66D · x + 0xB) mod 2^48`, seeded with
//! `(seed ^ 0x5DEECE66D) mod 2^48`. Doubles are built from 26 + 27 high bits
//! of two successive states.
//!
//! The default nonlinear tables are shuffled by this generator seeded with 0,
//! so its output must never change.

use super::UniformSource;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Seedable 48-bit LCG
///
/// # Example
/// ```
/// use nlstream_core_rs::rng::Lcg48;
///
/// let mut rng = Lcg48::new(0);
/// assert_eq!(rng.next_f64(), 0.730967787376657);
/// ```
#[derive(Debug, Clone)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its `bits` highest bits
    fn next_bits(&mut self, bits: u32) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        self.state >> (48 - bits)
    }

    /// Next value in [0.0, 1.0) with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        let high = self.next_bits(26);
        let low = self.next_bits(27);
        ((high << 27) + low) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Current 48-bit state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl UniformSource for Lcg48 {
    fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as f64;
        lo + ((self.next_f64() * span) as usize).min(hi - lo)
    }
}
