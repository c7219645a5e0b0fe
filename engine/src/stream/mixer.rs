//! Combination of backbone and combiner outputs

/// `1 / (2^32 + 1)`: maps `1..=2^32` strictly inside (0,1)
pub const NORM: f64 = 1.0 / 4_294_967_297.0;

/// Weight of the second value drawn in increased-precision mode (`2^-24`)
pub const PRECISION_FACTOR: f64 = 1.0 / 16_777_216.0;

/// Bitwise XOR of one backbone word and one combiner value
#[inline]
pub fn mix(linear: u32, nonlinear: u32) -> u32 {
    linear ^ nonlinear
}

/// Maps mixed bits into (0,1)
///
/// The bits are read as an unsigned integer with 0 standing for `2^32`, then
/// scaled by [`NORM`].
///
/// # Example
/// ```
/// use nlstream_core_rs::stream::mixer::to_open_unit;
///
/// assert!(to_open_unit(0) < 1.0);
/// assert!(to_open_unit(1) > 0.0);
/// ```
#[inline]
pub fn to_open_unit(bits: u32) -> f64 {
    let value = if bits == 0 { 1u64 << 32 } else { bits as u64 };
    value as f64 * NORM
}
