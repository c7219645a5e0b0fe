//! WELL607 linear recurrence
//!
//! Nineteen 32-bit words of state, of which the low bit of the last word is
//! discarded by the recurrence: 607 effective bits, period `2^607 - 1`.
//!
//! # Recurrence
//!
//! With `v[0..19]` the state and `T` the tempering matrices of WELL607a:
//!
//! ```text
//! z0 = (v[18] & UPPER) | (v[17] & LOWER)
//! z1 = M3(19)·v[0]  ^ M3(11)·v[16]
//! z2 = M3(-14)·v[15] ^ v[14]
//! z3 = z1 ^ z2
//! z4 = M3(18)·z0 ^ z1 ^ M3(-5)·z3
//! v' = [z4, z3, v[1], v[2], ..., v[17]]      output z4
//! ```
//!
//! where `M3(t)·x = x ^ (x >> t)` and `M3(-t)·x = x ^ (x << t)`.

use crate::error::RngError;

/// Number of 32-bit words in the state vector
pub const R: usize = 19;

/// Words produced per [`Well607::step`]
pub const BLOCK_LEN: usize = 32;

/// Bits of the last word dropped by the recurrence
const P: u32 = 1;
const MASK_LOWER: u32 = u32::MAX >> (32 - P);
const MASK_UPPER: u32 = !MASK_LOWER;

const M1: usize = 16;
const M2: usize = 15;
const M3: usize = 14;

/// Only the dropped bit set: mapped to the zero vector by one transition
const RESERVED_LAST_WORD: u32 = MASK_LOWER;

/// Package seed used until one is set explicitly
pub const DEFAULT_SEED: [u32; R] = [
    0xD6AF_B71C, 0x82AD_B18E, 0x326E_714E, 0xB1EE_42B6, 0xF1A8_34ED, 0x04AE_5721, 0xC5EA_2843,
    0xFA04_116B, 0x6ACE_14EF, 0xCD57_81A0, 0x6B1F_731C, 0x7E3B_8E3D, 0x8B34_DE2A, 0x74EC_15F5,
    0x84EB_C216, 0x83EA_2C61, 0xE4A8_3B1E, 0xA5D8_2CB9, 0x9E1A_6C89,
];

#[inline]
fn mat3_pos(t: u32, v: u32) -> u32 {
    v ^ (v >> t)
}

#[inline]
fn mat3_neg(t: u32, v: u32) -> u32 {
    v ^ (v << t)
}

/// Applies one transition to `v` in place and returns the output word
///
/// # Panics
/// Panics if `v` does not hold exactly [`R`] words.
pub fn transition(v: &mut [u32]) -> u32 {
    assert_eq!(v.len(), R, "WELL607 state holds {} words", R);

    let z0 = (v[R - 1] & MASK_UPPER) | (v[R - 2] & MASK_LOWER);
    let z1 = mat3_pos(19, v[0]) ^ mat3_pos(11, v[M1]);
    let z2 = mat3_neg(14, v[M2]) ^ v[M3];
    let z3 = z1 ^ z2;
    let z4 = mat3_pos(18, z0) ^ z1 ^ mat3_neg(5, z3);

    v.copy_within(1..R - 1, 2);
    v[1] = z3;
    v[0] = z4;
    z4
}

/// Rejects states from which the recurrence cannot leave zero
///
/// A seed is invalid when every word is zero, or when the first eighteen
/// words are zero and the last word is `0x00000001` (only the dropped bit
/// set).
pub fn verify_seed(seed: &[u32; R]) -> Result<(), RngError> {
    if seed[..R - 1].iter().any(|&w| w != 0) {
        return Ok(());
    }
    match seed[R - 1] {
        0 => Err(RngError::InvalidSeed {
            reason: "at least one word must be non-zero".to_string(),
        }),
        RESERVED_LAST_WORD => Err(RngError::InvalidSeed {
            reason: format!(
                "when only the last word is non-zero it must not equal {:#010x}",
                RESERVED_LAST_WORD
            ),
        }),
        _ => Ok(()),
    }
}

/// Live WELL607 cursor with its output buffer
///
/// Words are produced a block at a time. `cursor` indexes the next unread
/// word of `buffer`; when it reaches [`BLOCK_LEN`] the buffer is exhausted and
/// the next [`next_word`](Self::next_word) refills it.
///
/// # Example
/// ```
/// use nlstream_core_rs::backbone::{Well607, DEFAULT_SEED};
///
/// let mut a = Well607::new(&DEFAULT_SEED).unwrap();
/// let mut b = a.clone();
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Well607 {
    /// State after every buffered word was produced
    state: [u32; R],
    /// State before the first buffered word was produced
    block_start: [u32; R],
    buffer: [u32; BLOCK_LEN],
    cursor: usize,
}

impl Well607 {
    /// Create a cursor positioned at `seed`
    pub fn new(seed: &[u32; R]) -> Result<Self, RngError> {
        verify_seed(seed)?;
        Ok(Self::at(seed))
    }

    /// Cursor at an already validated state, buffer exhausted
    pub(crate) fn at(state: &[u32; R]) -> Self {
        Self {
            state: *state,
            block_start: *state,
            buffer: [0; BLOCK_LEN],
            cursor: BLOCK_LEN,
        }
    }

    /// Moves the cursor to `state` and invalidates the buffer
    pub(crate) fn reset_to(&mut self, state: &[u32; R]) {
        self.state = *state;
        self.block_start = *state;
        self.cursor = BLOCK_LEN;
    }

    /// Refills the output buffer with the next [`BLOCK_LEN`] words
    pub fn step(&mut self) {
        self.block_start = self.state;
        for slot in self.buffer.iter_mut() {
            *slot = transition(&mut self.state);
        }
        self.cursor = 0;
    }

    /// Next output word
    pub fn next_word(&mut self) -> u32 {
        if self.cursor == BLOCK_LEN {
            self.step();
        }
        let word = self.buffer[self.cursor];
        self.cursor += 1;
        word
    }

    /// State vector from which the next output word will be produced
    pub fn state(&self) -> [u32; R] {
        if self.cursor == BLOCK_LEN {
            return self.state;
        }
        let mut s = self.block_start;
        for _ in 0..self.cursor {
            transition(&mut s);
        }
        s
    }

    /// Index of the next unread buffered word
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
