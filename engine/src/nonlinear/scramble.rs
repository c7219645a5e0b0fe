//! Construction and shuffling of permutation tables

use crate::rng::UniformSource;

/// Table of `length` equally spaced 32-bit fixed-point fractions
///
/// Entry `j` is `floor(j * 2^32 / length)`, the fixed-point form of
/// `j / length`.
pub fn equally_spaced(length: usize) -> Vec<u32> {
    let n = length as u64;
    (0..n).map(|j| ((j << 32) / n) as u32).collect()
}

/// Fisher–Yates shuffle of `table` driven by `source`
///
/// Position `i` is swapped with a uniform position in `i..len`, for every `i`
/// but the last.
pub fn scramble<S: UniformSource + ?Sized>(table: &mut [u32], source: &mut S) {
    let len = table.len();
    for i in 0..len.saturating_sub(1) {
        let j = source.next_index(i, len - 1);
        table.swap(i, j);
    }
}
