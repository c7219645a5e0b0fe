//! Package-level origin and stream construction

use super::F2nl607;
use crate::backbone::{self, verify_seed, DEFAULT_SEED, R};
use crate::error::RngError;
use crate::misc::log::targets;
use crate::nonlinear::{NonlinearCursor, NonlinearData};
use crate::rng::UniformSource;
use std::sync::Arc;

/// Owner of the "next stream starts here" position
///
/// Every [`create_stream`](Self::create_stream) hands out the current package
/// origin as the new stream's start and then advances the origin by the
/// stream gap (`2^400` backbone steps; the matching index offset, reduced
/// modulo each component length, for the nonlinear part). Streams from one
/// factory therefore never overlap.
///
/// Construction needs `&mut self`. To create streams from several threads,
/// wrap the factory in a `Mutex`.
///
/// # Example
/// ```
/// use nlstream_core_rs::{RandomStream, StreamFactory};
///
/// let mut factory = StreamFactory::new();
/// let seed = factory.package_linear_seed();
///
/// let mut a = factory.create_stream();
/// let mut b = factory.create_stream();
/// assert_ne!(a.next_double(), b.next_double());
///
/// // Same package seeds, same streams
/// let mut replay = StreamFactory::new();
/// replay.set_package_linear_seed(&seed).unwrap();
/// a.reset_start_stream();
/// assert_eq!(replay.create_stream().next_double(), a.next_double());
/// ```
#[derive(Debug)]
pub struct StreamFactory {
    data: Arc<NonlinearData>,
    linear_origin: [u32; R],
    nonlinear_origin: NonlinearCursor,
    streams_created: usize,
}

impl StreamFactory {
    /// Factory with the default seed and the default nonlinear data
    pub fn new() -> Self {
        let data = NonlinearData::shared_default();
        let nonlinear_origin = NonlinearCursor::origin(&data);
        Self {
            data,
            linear_origin: DEFAULT_SEED,
            nonlinear_origin,
            streams_created: 0,
        }
    }

    /// Creates the next stream
    pub fn create_stream(&mut self) -> F2nl607 {
        self.next_stream(None)
    }

    /// Creates the next stream, labelled `name` in its state dump
    pub fn create_named_stream(&mut self, name: impl Into<String>) -> F2nl607 {
        self.next_stream(Some(name.into()))
    }

    fn next_stream(&mut self, name: Option<String>) -> F2nl607 {
        let linear_origin = self.linear_origin;
        let nonlinear_origin = self.nonlinear_origin.clone();

        backbone::jump(&mut self.linear_origin, &backbone::jumps().stream);
        self.nonlinear_origin.jump_stream(&self.data);
        self.streams_created += 1;

        log::debug!(
            target: targets::STREAM,
            "Created stream #{} ({}), nonlinear origin {:?}",
            self.streams_created,
            name.as_deref().unwrap_or("unnamed"),
            nonlinear_origin.indices()
        );

        F2nl607::at_origin(name, Arc::clone(&self.data), linear_origin, nonlinear_origin)
    }

    /// Sets where the next stream's linear part starts
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] for the zero vector or the reserved state.
    pub fn set_package_linear_seed(&mut self, seed: &[u32; R]) -> Result<(), RngError> {
        verify_seed(seed)?;
        self.linear_origin = *seed;
        log::debug!(target: targets::STREAM, "Package linear seed set to {:x?}", seed);
        Ok(())
    }

    /// Sets where the next stream's nonlinear part starts
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] unless `seed` holds exactly one index per
    /// component, each below that component's length.
    pub fn set_package_nonlinear_seed(&mut self, seed: &[usize]) -> Result<(), RngError> {
        self.data.validate_seed(seed)?;
        self.nonlinear_origin = NonlinearCursor::from_validated(seed);
        log::debug!(target: targets::STREAM, "Package nonlinear seed set to {:?}", seed);
        Ok(())
    }

    /// Linear seed the next stream will start from
    pub fn package_linear_seed(&self) -> [u32; R] {
        self.linear_origin
    }

    /// Nonlinear seed the next stream will start from
    pub fn package_nonlinear_seed(&self) -> Vec<usize> {
        self.nonlinear_origin.indices().to_vec()
    }

    /// Replaces the nonlinear components, one per table
    ///
    /// Jump offsets are recomputed and the package nonlinear seed returns to
    /// all zeros.
    ///
    /// # Errors
    /// - [`RngError::IllegalState`] once a stream has been created
    /// - [`RngError::InvalidArgument`] for an empty set or an empty table
    pub fn set_nonlinear_data(&mut self, tables: Vec<Vec<u32>>) -> Result<(), RngError> {
        self.ensure_no_streams("set_nonlinear_data")?;
        self.install(NonlinearData::from_tables(tables)?);
        Ok(())
    }

    /// Replaces the nonlinear components with freshly scrambled tables
    ///
    /// Each table of `lengths[i]` equally spaced values is shuffled
    /// `repetitions` times using `source`.
    ///
    /// # Errors
    /// Same as [`set_nonlinear_data`](Self::set_nonlinear_data).
    pub fn set_scramble_data<S: UniformSource + ?Sized>(
        &mut self,
        source: &mut S,
        repetitions: usize,
        lengths: &[usize],
    ) -> Result<(), RngError> {
        self.ensure_no_streams("set_scramble_data")?;
        self.install(NonlinearData::scrambled(source, repetitions, lengths)?);
        Ok(())
    }

    fn ensure_no_streams(&self, operation: &str) -> Result<(), RngError> {
        if self.streams_created > 0 {
            return Err(RngError::IllegalState(format!(
                "{} can only be called before the creation of any stream ({} created)",
                operation, self.streams_created
            )));
        }
        Ok(())
    }

    pub(crate) fn install(&mut self, data: NonlinearData) {
        log::debug!(
            target: targets::NONLINEAR,
            "Installing nonlinear data: lengths {:?}, fingerprint {}",
            data.lengths(),
            data.fingerprint()
        );
        self.nonlinear_origin = NonlinearCursor::origin(&data);
        self.data = Arc::new(data);
    }

    /// Shared nonlinear data used by streams from this factory
    pub fn nonlinear_data(&self) -> &Arc<NonlinearData> {
        &self.data
    }

    /// Copy of the nonlinear tables
    pub fn nonlinear_tables(&self) -> Vec<Vec<u32>> {
        self.data.tables().to_vec()
    }

    pub fn streams_created(&self) -> usize {
        self.streams_created
    }
}

impl Default for StreamFactory {
    fn default() -> Self {
        Self::new()
    }
}
