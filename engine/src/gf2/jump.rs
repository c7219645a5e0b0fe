//! Precomputed jump-ahead operators

use super::BitMatrix;

/// The linear map "apply the recurrence `2^exponent` times"
///
/// Immutable once built; callers hold it behind a shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpOperator {
    exponent: u32,
    matrix: BitMatrix,
}

impl JumpOperator {
    /// Squares `transition` `exponent` times
    pub fn pow2(transition: &BitMatrix, exponent: u32) -> Self {
        let mut matrix = transition.clone();
        for _ in 0..exponent {
            matrix = matrix.square();
        }
        Self { exponent, matrix }
    }

    /// Operator for `2^(exponent + extra)` steps, continuing the squarings
    pub fn doubled(&self, extra: u32) -> Self {
        let mut matrix = self.matrix.clone();
        for _ in 0..extra {
            matrix = matrix.square();
        }
        Self {
            exponent: self.exponent + extra,
            matrix,
        }
    }

    /// Number of doublings this operator represents
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Advances `state` by `2^exponent` steps in place
    pub fn jump(&self, state: &mut [u32]) {
        self.matrix.apply(state);
    }
}
