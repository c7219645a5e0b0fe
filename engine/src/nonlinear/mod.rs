//! Nonlinear combiner
//!
//! A small number of components, each a table holding a random permutation
//! of equally spaced fixed-point fractions. Every call moves each component
//! one position forward (circularly) and adds the addressed entries modulo
//! `2^32`, the integer analogue of addition modulo 1.
//!
//! The period of the combiner is the least common multiple of the component
//! lengths, so lengths should be distinct primes. The default set uses 1019,
//! 1021 and 1031.
//!
//! Tables and jump offsets are immutable and shared through [`Arc`]; each
//! generator only owns a [`NonlinearCursor`].
//!
//! [`Arc`]: std::sync::Arc

mod cursor;
mod scramble;

pub use cursor::NonlinearCursor;
pub use scramble::{equally_spaced, scramble};

use crate::backbone::{STREAM_EXTRA_EXPONENT, SUBSTREAM_EXPONENT};
use crate::error::RngError;
use crate::misc::log::targets;
use crate::rng::{Lcg48, UniformSource};
use sha2::{Digest, Sha256};
use std::sync::{Arc, OnceLock};

/// Component lengths of the default data set
pub const DEFAULT_LENGTHS: [usize; 3] = [1019, 1021, 1031];

/// Seed of the [`Lcg48`] source that scrambles the default tables
pub const DEFAULT_SCRAMBLE_SEED: u64 = 0;

/// Index-space jump distances of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOffsets {
    /// `2^w mod length`
    pub substream: usize,
    /// `2^(w+v) mod length`
    pub stream: usize,
}

impl JumpOffsets {
    /// Offsets for a component of `length` entries
    ///
    /// # Example
    /// ```
    /// use nlstream_core_rs::nonlinear::JumpOffsets;
    ///
    /// let offsets = JumpOffsets::compute(7, 3, 2);
    /// assert_eq!(offsets.substream, 1); // 8 mod 7
    /// assert_eq!(offsets.stream, 4); // 32 mod 7
    /// ```
    ///
    /// # Panics
    /// Panics if `length` is 0.
    pub fn compute(length: usize, w: u32, v: u32) -> Self {
        assert!(length > 0, "component length must be positive");
        let substream = double_mod(1 % length, w, length);
        let stream = double_mod(substream, v, length);
        Self { substream, stream }
    }
}

/// `start * 2^times mod modulus` by repeated doubling
fn double_mod(start: usize, times: u32, modulus: usize) -> usize {
    let m = modulus as u64;
    let mut x = start as u64 % m;
    for _ in 0..times {
        x = (2 * x) % m;
    }
    x as usize
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// The component tables and their jump offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonlinearData {
    tables: Vec<Vec<u32>>,
    offsets: Vec<JumpOffsets>,
}

impl NonlinearData {
    /// Uses `tables` as components, one per inner vector
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if there are no tables or a table is
    /// empty.
    pub fn from_tables(tables: Vec<Vec<u32>>) -> Result<Self, RngError> {
        let lengths: Vec<usize> = tables.iter().map(Vec::len).collect();
        validate_lengths(&lengths)?;
        Ok(Self::with_offsets(tables))
    }

    /// Builds equally spaced tables of the given lengths and scrambles each
    /// one `repetitions` times with `source`
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if `lengths` is empty or contains 0.
    pub fn scrambled<S: UniformSource + ?Sized>(
        source: &mut S,
        repetitions: usize,
        lengths: &[usize],
    ) -> Result<Self, RngError> {
        validate_lengths(lengths)?;
        Ok(Self::with_offsets(scramble_tables(source, repetitions, lengths)))
    }

    fn with_offsets(tables: Vec<Vec<u32>>) -> Self {
        let offsets = tables
            .iter()
            .map(|t| JumpOffsets::compute(t.len(), SUBSTREAM_EXPONENT, STREAM_EXTRA_EXPONENT))
            .collect();
        Self { tables, offsets }
    }

    /// The default data set, built once and shared
    pub fn shared_default() -> Arc<NonlinearData> {
        static DEFAULT: OnceLock<Arc<NonlinearData>> = OnceLock::new();
        DEFAULT.get_or_init(|| Arc::new(Self::default())).clone()
    }

    pub fn component_count(&self) -> usize {
        self.tables.len()
    }

    /// Length of component `i`
    pub fn length(&self, i: usize) -> usize {
        self.tables[i].len()
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.tables.iter().map(Vec::len).collect()
    }

    pub fn offsets(&self, i: usize) -> JumpOffsets {
        self.offsets[i]
    }

    pub fn tables(&self) -> &[Vec<u32>] {
        &self.tables
    }

    /// Checks that `seed` holds one in-range index per component
    pub fn validate_seed(&self, seed: &[usize]) -> Result<(), RngError> {
        if seed.len() != self.component_count() {
            return Err(RngError::InvalidArgument(format!(
                "Seed must contain {} values, got {}",
                self.component_count(),
                seed.len()
            )));
        }
        for (i, (&s, table)) in seed.iter().zip(&self.tables).enumerate() {
            if s >= table.len() {
                return Err(RngError::InvalidArgument(format!(
                    "Seed number {} must be between 0 and {}",
                    i,
                    table.len() - 1
                )));
            }
        }
        Ok(())
    }

    /// SHA-256 of the component lengths and table contents, hex encoded
    ///
    /// Two runs with equal fingerprints use identical nonlinear data.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.tables.len() as u64).to_le_bytes());
        for table in &self.tables {
            hasher.update((table.len() as u64).to_le_bytes());
            for word in table {
                hasher.update(word.to_le_bytes());
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Default for NonlinearData {
    /// Three components of lengths 1019, 1021 and 1031, scrambled in turn
    /// by one [`Lcg48`] seeded with [`DEFAULT_SCRAMBLE_SEED`]
    fn default() -> Self {
        let mut source = Lcg48::new(DEFAULT_SCRAMBLE_SEED);
        Self::with_offsets(scramble_tables(&mut source, 1, &DEFAULT_LENGTHS))
    }
}

fn scramble_tables<S: UniformSource + ?Sized>(
    source: &mut S,
    repetitions: usize,
    lengths: &[usize],
) -> Vec<Vec<u32>> {
    lengths
        .iter()
        .map(|&len| {
            let mut table = equally_spaced(len);
            for _ in 0..repetitions {
                scramble(&mut table, source);
            }
            table
        })
        .collect()
}

fn validate_lengths(lengths: &[usize]) -> Result<(), RngError> {
    if lengths.is_empty() {
        return Err(RngError::InvalidArgument(
            "at least one nonlinear component is required".to_string(),
        ));
    }
    if let Some(i) = lengths.iter().position(|&len| len == 0) {
        return Err(RngError::InvalidArgument(format!(
            "component {} must not be empty",
            i
        )));
    }

    for (i, &a) in lengths.iter().enumerate() {
        for &b in &lengths[i + 1..] {
            if gcd(a, b) != 1 {
                log::warn!(
                    target: targets::NONLINEAR,
                    "Component lengths {} and {} are not coprime; the combined period is shortened",
                    a,
                    b
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_small_component() {
        assert_eq!(
            JumpOffsets::compute(7, 3, 2),
            JumpOffsets {
                substream: 1,
                stream: 4
            }
        );
    }

    #[test]
    fn test_offsets_length_one() {
        assert_eq!(
            JumpOffsets::compute(1, 150, 250),
            JumpOffsets {
                substream: 0,
                stream: 0
            }
        );
    }

    #[test]
    #[should_panic(expected = "component length must be positive")]
    fn test_offsets_reject_empty_component() {
        JumpOffsets::compute(0, 3, 2);
    }

    #[test]
    fn test_offsets_match_u128_arithmetic() {
        // 2^100 mod 1019 computed two ways
        let expected = ((1u128 << 100) % 1019) as usize;
        assert_eq!(double_mod(1, 100, 1019), expected);
    }

    #[test]
    fn test_default_data_shape() {
        let data = NonlinearData::default();
        assert_eq!(data.component_count(), 3);
        assert_eq!(data.lengths(), vec![1019, 1021, 1031]);
        for table in data.tables() {
            let mut sorted = table.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, equally_spaced(table.len()));
        }
    }

    #[test]
    fn test_default_tables_known_entries() {
        let data = NonlinearData::default();
        assert_eq!(data.tables()[0][..3], [0xBAE9_A40D, 0x3D8C_F02C, 0xA34C_1F26]);
        assert_eq!(data.tables()[1][..3], [0x7215_902C, 0xEDF2_75D8, 0x6289_E76D]);
        assert_eq!(data.tables()[2][..3], [0x1717_96B8, 0xDFF8_0DE7, 0x660D_6889]);
    }

    #[test]
    fn test_default_data_is_deterministic() {
        assert_eq!(NonlinearData::default(), NonlinearData::default());
        assert_eq!(
            NonlinearData::default().fingerprint(),
            NonlinearData::shared_default().fingerprint()
        );
    }

    #[test]
    fn test_from_tables_rejects_empty() {
        assert!(matches!(
            NonlinearData::from_tables(vec![]),
            Err(RngError::InvalidArgument(_))
        ));
        assert!(matches!(
            NonlinearData::from_tables(vec![vec![1, 2], vec![]]),
            Err(RngError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_seed() {
        let data = NonlinearData::default();
        assert!(data.validate_seed(&[0, 1020, 1030]).is_ok());
        assert!(data.validate_seed(&[0, 1021, 0]).is_err());
        assert!(data.validate_seed(&[0, 0]).is_err());
        assert!(data.validate_seed(&[0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_fingerprint_changes_with_data() {
        let a = NonlinearData::from_tables(vec![vec![1, 2, 3]]).unwrap();
        let b = NonlinearData::from_tables(vec![vec![1, 3, 2]]).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
