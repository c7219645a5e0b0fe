//! nlstream Core - reproducible stream generator
//!
//! Combined random number generator for stochastic simulation: the WELL607
//! linear generator XOR-mixed with a nonlinear combiner of permutation
//! tables. Output is partitioned into streams (`2^400` values apart) and
//! substreams (`2^150` values apart) so that independent replications never
//! share random numbers.
//!
//! # Architecture
//!
//! - **gf2**: bit matrices and jump-ahead operators
//! - **backbone**: the WELL607 recurrence, its output buffer and jump tables
//! - **nonlinear**: permutation tables, cursors and index-space jumps
//! - **stream**: the generator instance, the mixer and the [`StreamFactory`]
//! - **rng**: consumer traits and the LCG and xorshift64* helper sources
//! - **config**: JSON configuration of a factory
//!
//! # Critical Invariants
//!
//! 1. Same package seeds and same nonlinear data → bit-identical streams
//! 2. Successive streams from one factory start exactly one stream gap apart
//! 3. Nonlinear indices never leave `0..length`
//! 4. A failed call mutates nothing
//!
//! # Example
//! ```
//! use nlstream_core_rs::{RandomStream, StreamFactory};
//!
//! let mut factory = StreamFactory::new();
//! let mut arrivals = factory.create_named_stream("arrivals");
//! let mut service = factory.create_named_stream("service");
//!
//! for _replication in 0..3 {
//!     let _a = arrivals.next_double();
//!     let _s = service.next_int(1, 6);
//!     arrivals.reset_next_substream();
//!     service.reset_next_substream();
//! }
//! ```

// Module declarations
pub mod backbone;
pub mod config;
pub mod error;
pub mod gf2;
pub mod misc;
pub mod nonlinear;
pub mod rng;
pub mod stream;

// Re-exports for convenience
pub use config::{ComponentSource, StreamFactoryConfig};
pub use error::RngError;
pub use nonlinear::NonlinearData;
pub use rng::{RandomStream, UniformSource};
pub use stream::{F2nl607, StreamFactory};
