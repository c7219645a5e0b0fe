//! Linear algebra over GF(2)
//!
//! Square bit matrices acting on state vectors stored as `u32` words. Bit `b`
//! of a vector is bit `b % 32` of word `b / 32`. Rows are packed into `u64`
//! words so that a matrix–vector product is one AND + popcount per row.
//!
//! # Jump-ahead
//!
//! Any linear recurrence over GF(2) is a matrix `A`. Advancing a state by
//! `2^k` steps is the product `A^(2^k) · x`, and `A^(2^k)` is obtained from
//! `A` by `k` squarings. See [`JumpOperator`].

mod jump;

pub use jump::JumpOperator;

/// Rows are combined eight at a time when multiplying (method of four Russians)
const GROUP_BITS: usize = 8;

/// Square matrix over GF(2)
///
/// # Example
/// ```
/// use nlstream_core_rs::gf2::BitMatrix;
///
/// // One step of a 32-bit xorshift is linear over GF(2)
/// let step = |v: &mut [u32]| {
///     v[0] ^= v[0] << 13;
///     v[0] ^= v[0] >> 17;
///     v[0] ^= v[0] << 5;
/// };
/// let a = BitMatrix::from_linear_map(1, step);
///
/// let mut brute = [0xDEAD_BEEFu32];
/// step(&mut brute);
/// step(&mut brute);
///
/// let mut jumped = [0xDEAD_BEEFu32];
/// a.square().apply(&mut jumped);
/// assert_eq!(jumped, brute);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    /// Number of rows and columns (bits in the state vector)
    dim: usize,
    /// `u64` words per packed row
    stride: usize,
    /// Row-major packed bits, `dim * stride` words
    rows: Vec<u64>,
}

impl BitMatrix {
    /// Zero matrix acting on vectors of `words` 32-bit words
    pub fn zero(words: usize) -> Self {
        let dim = words * 32;
        let stride = dim.div_ceil(64);
        Self {
            dim,
            stride,
            rows: vec![0; dim * stride],
        }
    }

    /// Identity matrix acting on vectors of `words` 32-bit words
    pub fn identity(words: usize) -> Self {
        let mut m = Self::zero(words);
        for i in 0..m.dim {
            m.set(i, i);
        }
        m
    }

    /// Builds the matrix of a GF(2)-linear map from its action on unit vectors
    ///
    /// `map` transforms a vector of `words` words in place. It must be linear
    /// over GF(2) (XORs, shifts, masks with constants); otherwise the result
    /// is meaningless.
    pub fn from_linear_map<F>(words: usize, mut map: F) -> Self
    where
        F: FnMut(&mut [u32]),
    {
        let mut m = Self::zero(words);
        let mut column = vec![0u32; words];

        for j in 0..m.dim {
            column.fill(0);
            column[j / 32] = 1 << (j % 32);
            map(&mut column);

            for (word_idx, &word) in column.iter().enumerate() {
                let mut bits = word;
                while bits != 0 {
                    let bit = bits.trailing_zeros() as usize;
                    m.set(word_idx * 32 + bit, j);
                    bits &= bits - 1;
                }
            }
        }
        m
    }

    /// Number of bits in the vectors this matrix acts on
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> bool {
        (self.rows[row * self.stride + col / 64] >> (col % 64)) & 1 == 1
    }

    fn set(&mut self, row: usize, col: usize) {
        self.rows[row * self.stride + col / 64] |= 1 << (col % 64);
    }

    fn row(&self, row: usize) -> &[u64] {
        &self.rows[row * self.stride..(row + 1) * self.stride]
    }

    /// Matrix product `self · rhs`
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn multiply(&self, rhs: &BitMatrix) -> BitMatrix {
        assert_eq!(self.dim, rhs.dim, "matrix dimensions must match");

        let stride = self.stride;
        let mut out = BitMatrix {
            dim: self.dim,
            stride,
            rows: vec![0; self.rows.len()],
        };
        let mut table = vec![0u64; (1 << GROUP_BITS) * stride];

        // Row i of the product is the XOR of the rows of `rhs` selected by
        // row i of `self`. Selections are resolved one byte at a time from a
        // table holding all 256 XOR combinations of eight consecutive rows.
        for group_start in (0..self.dim).step_by(GROUP_BITS) {
            for mask in 1usize..(1 << GROUP_BITS) {
                let low = mask.trailing_zeros() as usize;
                let prev = mask & (mask - 1);
                let src_row = group_start + low;
                for w in 0..stride {
                    let base = table[prev * stride + w];
                    let add = if src_row < rhs.dim {
                        rhs.rows[src_row * stride + w]
                    } else {
                        0
                    };
                    table[mask * stride + w] = base ^ add;
                }
            }

            let word = group_start / 64;
            let shift = group_start % 64;
            for i in 0..self.dim {
                let selector = ((self.rows[i * stride + word] >> shift) & 0xFF) as usize;
                if selector == 0 {
                    continue;
                }
                let dst = &mut out.rows[i * stride..(i + 1) * stride];
                let src = &table[selector * stride..(selector + 1) * stride];
                for (d, s) in dst.iter_mut().zip(src) {
                    *d ^= s;
                }
            }
        }
        out
    }

    /// `self · self`
    pub fn square(&self) -> BitMatrix {
        self.multiply(self)
    }

    /// Replaces `vector` by `self · vector`
    ///
    /// Every output bit is the XOR of the input bits selected by its row.
    ///
    /// # Panics
    /// Panics if `vector` does not hold exactly `dim / 32` words.
    pub fn apply(&self, vector: &mut [u32]) {
        assert_eq!(
            vector.len() * 32,
            self.dim,
            "vector length must match matrix dimension"
        );

        let packed = pack(vector, self.stride);
        vector.fill(0);

        for i in 0..self.dim {
            let parity = self
                .row(i)
                .iter()
                .zip(&packed)
                .map(|(r, x)| (r & x).count_ones())
                .sum::<u32>()
                & 1;
            vector[i / 32] |= parity << (i % 32);
        }
    }
}

/// Packs 32-bit words into 64-bit words, low half first
fn pack(vector: &[u32], stride: usize) -> Vec<u64> {
    let mut packed = vec![0u64; stride];
    for (i, &w) in vector.iter().enumerate() {
        packed[i / 2] |= (w as u64) << (32 * (i % 2));
    }
    packed
}
