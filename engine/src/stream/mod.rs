//! Streams and substreams of the combined generator
//!
//! Three nested positions, kept in lockstep for the backbone and the
//! nonlinear combiner:
//!
//! ```text
//! StreamFactory origin ──create_stream──▶ stream origin
//!                                           │ reset_start_stream
//!                                           ▼
//!                                      substream origin ◀─ reset_next_substream (+2^150)
//!                                           │ reset_start_substream
//!                                           ▼
//!                                       live cursor ──next_double──▶ (0,1)
//! ```

mod f2nl607;
mod factory;
pub mod mixer;

pub use f2nl607::F2nl607;
pub use factory::StreamFactory;
