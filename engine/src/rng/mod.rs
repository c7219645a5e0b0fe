//! Consumer-facing random stream interfaces
//!
//! [`RandomStream`] is what simulation code sees: uniforms in (0,1), integers
//! and the three reset operations. [`UniformSource`] is the narrower
//! interface the table scrambler needs, implemented by the stream generator
//! and by the general-purpose [`Lcg48`] and [`Xorshift64Star`].

mod lcg48;
mod xorshift;

pub use lcg48::Lcg48;
pub use xorshift::Xorshift64Star;

/// Source of uniform indices for shuffling
pub trait UniformSource {
    /// Uniform integer in `lo..=hi`
    fn next_index(&mut self, lo: usize, hi: usize) -> usize;
}

/// A reproducible stream partitioned into substreams
///
/// # Example
/// ```
/// use nlstream_core_rs::{RandomStream, StreamFactory};
///
/// let mut factory = StreamFactory::new();
/// let mut stream = factory.create_stream();
///
/// let first = stream.next_double();
/// stream.next_double();
/// stream.reset_start_substream();
/// assert_eq!(stream.next_double(), first);
/// ```
pub trait RandomStream {
    /// Rewind to the beginning of the stream (its first substream)
    fn reset_start_stream(&mut self);

    /// Rewind to the beginning of the current substream
    fn reset_start_substream(&mut self);

    /// Move to the beginning of the next substream
    fn reset_next_substream(&mut self);

    /// Next uniform value in (0,1)
    fn next_double(&mut self) -> f64;

    /// Uniform integer in `i..=j`
    ///
    /// # Panics
    /// Panics if `i > j`
    fn next_int(&mut self, i: i32, j: i32) -> i32 {
        assert!(i <= j, "lower bound must not exceed upper bound");
        let span = j as f64 - i as f64 + 1.0;
        (i as f64 + (self.next_double() * span).floor()).min(j as f64) as i32
    }

    /// Fills `out` with successive uniforms
    fn next_array_of_double(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.next_double();
        }
    }

    /// Fills `out` with successive integers in `i..=j`
    ///
    /// # Panics
    /// Panics if `i > j`
    fn next_array_of_int(&mut self, i: i32, j: i32, out: &mut [i32]) {
        for slot in out.iter_mut() {
            *slot = self.next_int(i, j);
        }
    }
}
