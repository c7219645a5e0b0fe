//! Linear backbone: the WELL607 generator and its jump-ahead tables
//!
//! Streams start `2^400` steps apart and substreams `2^150` steps apart.
//! Both jumps are GF(2) matrices obtained by squaring the one-step transition
//! matrix; they are built on first use and shared by every generator in the
//! process.

mod well607;

pub use well607::{transition, verify_seed, Well607, BLOCK_LEN, DEFAULT_SEED, R};

use crate::gf2::{BitMatrix, JumpOperator};
use crate::misc::log::targets;
use std::sync::OnceLock;

/// `w`: substreams are `2^w` steps apart
pub const SUBSTREAM_EXPONENT: u32 = 150;

/// `v`: streams are `2^(w+v)` steps apart
pub const STREAM_EXTRA_EXPONENT: u32 = 250;

/// Jump operators for the substream and stream gaps
#[derive(Debug)]
pub struct BackboneJumps {
    pub substream: JumpOperator,
    pub stream: JumpOperator,
}

static JUMPS: OnceLock<BackboneJumps> = OnceLock::new();

/// Shared jump operators, built on the first call
pub fn jumps() -> &'static BackboneJumps {
    JUMPS.get_or_init(|| {
        log::debug!(
            target: targets::BACKBONE,
            "Building WELL607 jump operators for 2^{} and 2^{}",
            SUBSTREAM_EXPONENT,
            SUBSTREAM_EXPONENT + STREAM_EXTRA_EXPONENT
        );
        let substream = JumpOperator::pow2(&transition_matrix(), SUBSTREAM_EXPONENT);
        let stream = substream.doubled(STREAM_EXTRA_EXPONENT);
        BackboneJumps { substream, stream }
    })
}

/// Matrix of a single WELL607 transition
pub fn transition_matrix() -> BitMatrix {
    BitMatrix::from_linear_map(R, |v| {
        transition(v);
    })
}

/// Replaces `vector` by its image under `operator`
pub fn jump(vector: &mut [u32; R], operator: &JumpOperator) {
    operator.jump(vector);
}
