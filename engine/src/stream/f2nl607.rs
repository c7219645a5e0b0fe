//! Generator instance: WELL607 XOR nonlinear combiner

use super::mixer::{mix, to_open_unit, PRECISION_FACTOR};
use crate::backbone::{self, verify_seed, Well607, R};
use crate::error::RngError;
use crate::misc::log::targets;
use crate::nonlinear::{NonlinearCursor, NonlinearData};
use crate::rng::{RandomStream, UniformSource};
use rand_core::RngCore;
use std::fmt;
use std::sync::Arc;

/// One stream of the combined generator
///
/// Created by [`StreamFactory`](super::StreamFactory). Holds three positions
/// for each sub-generator, moved in lockstep:
///
/// - **stream origin**: where this stream starts
/// - **substream origin**: start of the current substream
/// - **live cursor**: the position read by the next call
///
/// Cloning copies all positions; the nonlinear tables stay shared.
///
/// # Example
/// ```
/// use nlstream_core_rs::{RandomStream, StreamFactory};
///
/// let mut factory = StreamFactory::new();
/// let mut stream = factory.create_named_stream("arrivals");
///
/// let u = stream.next_double();
/// assert!(u > 0.0 && u < 1.0);
///
/// stream.reset_next_substream();
/// let v = stream.next_double();
/// assert_ne!(u, v);
/// ```
#[derive(Debug, Clone)]
pub struct F2nl607 {
    name: Option<String>,
    data: Arc<NonlinearData>,

    linear: Well607,
    linear_stream: [u32; R],
    linear_substream: [u32; R],

    nonlinear: NonlinearCursor,
    nonlinear_stream: NonlinearCursor,
    nonlinear_substream: NonlinearCursor,

    antithetic: bool,
    increased_precision: bool,
}

impl F2nl607 {
    /// Stream starting at the given origins, positioned at its first substream
    pub(crate) fn at_origin(
        name: Option<String>,
        data: Arc<NonlinearData>,
        linear_origin: [u32; R],
        nonlinear_origin: NonlinearCursor,
    ) -> Self {
        let mut stream = Self {
            name,
            data,
            linear: Well607::at(&linear_origin),
            linear_stream: linear_origin,
            linear_substream: linear_origin,
            nonlinear: nonlinear_origin.clone(),
            nonlinear_stream: nonlinear_origin.clone(),
            nonlinear_substream: nonlinear_origin,
            antithetic: false,
            increased_precision: false,
        };
        stream.reset_start_stream();
        stream
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// When on, [`next_double`](RandomStream::next_double) returns `1 - u`
    pub fn set_antithetic(&mut self, antithetic: bool) {
        self.antithetic = antithetic;
    }

    pub fn is_antithetic(&self) -> bool {
        self.antithetic
    }

    /// When on, each uniform consumes two values: `(u1 + u2 * 2^-24) mod 1`
    pub fn increased_precision(&mut self, on: bool) {
        self.increased_precision = on;
    }

    pub fn has_increased_precision(&self) -> bool {
        self.increased_precision
    }

    /// Next mixed 32-bit word
    ///
    /// Advances both sub-generators by one step.
    pub fn next_bits(&mut self) -> u32 {
        self.nonlinear.advance_one(&self.data);
        let nonlinear = self.nonlinear.current_value(&self.data);
        mix(self.linear.next_word(), nonlinear)
    }

    /// Next raw uniform in (0,1), ignoring the antithetic and precision modes
    pub fn next_value(&mut self) -> f64 {
        to_open_unit(self.next_bits())
    }

    /// Restarts this stream from a new linear seed
    ///
    /// The nonlinear part returns to the start of its current stream. The
    /// spacing with other streams is lost for this instance only, so prefer
    /// the reset operations.
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] for the zero vector or the reserved state.
    pub fn set_linear_seed(&mut self, seed: &[u32; R]) -> Result<(), RngError> {
        verify_seed(seed)?;
        self.linear_stream = *seed;
        self.reset_start_stream();
        Ok(())
    }

    /// Restarts this stream from a new nonlinear seed
    ///
    /// The linear part returns to the start of its current stream. Same
    /// caveat as [`set_linear_seed`](Self::set_linear_seed).
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if `seed` does not hold one in-range
    /// index per component.
    pub fn set_nonlinear_seed(&mut self, seed: &[usize]) -> Result<(), RngError> {
        self.data.validate_seed(seed)?;
        self.nonlinear_stream = NonlinearCursor::from_validated(seed);
        self.reset_start_stream();
        Ok(())
    }

    /// Linear state from which the next output is produced
    pub fn linear_state(&self) -> [u32; R] {
        self.linear.state()
    }

    /// Current index in each nonlinear component
    pub fn nonlinear_state(&self) -> Vec<usize> {
        self.nonlinear.indices().to_vec()
    }

    /// Tables this stream reads from
    pub fn nonlinear_data(&self) -> &Arc<NonlinearData> {
        &self.data
    }
}

impl RandomStream for F2nl607 {
    fn reset_start_stream(&mut self) {
        self.linear_substream = self.linear_stream;
        self.nonlinear_substream = self.nonlinear_stream.clone();
        self.reset_start_substream();
    }

    fn reset_start_substream(&mut self) {
        self.linear.reset_to(&self.linear_substream);
        self.nonlinear = self.nonlinear_substream.clone();
    }

    fn reset_next_substream(&mut self) {
        backbone::jump(&mut self.linear_substream, &backbone::jumps().substream);
        self.nonlinear_substream.jump_substream(&self.data);
        log::trace!(
            target: targets::STREAM,
            "{}: next substream, nonlinear origin {:?}",
            self.name.as_deref().unwrap_or("unnamed"),
            self.nonlinear_substream.indices()
        );
        self.reset_start_substream();
    }

    fn next_double(&mut self) -> f64 {
        let mut u = self.next_value();
        if self.increased_precision {
            u = (u + self.next_value() * PRECISION_FACTOR) % 1.0;
        }
        if self.antithetic {
            1.0 - u
        } else {
            u
        }
    }
}

impl UniformSource for F2nl607 {
    fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as f64;
        lo + ((self.next_double() * span) as usize).min(hi - lo)
    }
}

impl RngCore for F2nl607 {
    fn next_u32(&mut self) -> u32 {
        self.next_bits()
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Human-readable dump of the live position
impl fmt::Display for F2nl607 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "The state of {} is :", name)?,
            None => writeln!(f, "The state of this F2NL607 is :")?,
        }

        let linear = self
            .linear_state()
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, " Linear part : {{ {} }}", linear)?;

        write!(f, " Non-linear part : {{ ")?;
        for idx in self.nonlinear.indices() {
            write!(f, "{} ", idx)?;
        }
        write!(f, "}}")
    }
}
