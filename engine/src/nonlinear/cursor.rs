//! Per-instance positions in the nonlinear tables

use super::NonlinearData;

/// One index per component, each always within `0..length`
///
/// A cursor is only meaningful together with the [`NonlinearData`] it was
/// created for; every operation takes that data as an argument.
///
/// # Panics
/// Operations panic when given data with a different component count, or
/// [`current_value`](Self::current_value) when an index lies outside the
/// matching table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonlinearCursor {
    indices: Vec<usize>,
}

impl NonlinearCursor {
    /// All components at index 0
    pub fn origin(data: &NonlinearData) -> Self {
        Self {
            indices: vec![0; data.component_count()],
        }
    }

    /// Cursor at `seed`, validated against `data`
    pub(crate) fn from_validated(seed: &[usize]) -> Self {
        Self {
            indices: seed.to_vec(),
        }
    }

    /// Moves every component forward by one position, wrapping to 0
    pub fn advance_one(&mut self, data: &NonlinearData) {
        self.check_pairing(data);
        for (idx, table) in self.indices.iter_mut().zip(data.tables()) {
            if *idx + 1 >= table.len() {
                *idx = 0;
            } else {
                *idx += 1;
            }
        }
    }

    /// Wrapping sum of the addressed table entries
    pub fn current_value(&self, data: &NonlinearData) -> u32 {
        self.check_pairing(data);
        self.indices
            .iter()
            .zip(data.tables())
            .fold(0u32, |acc, (&idx, table)| {
                assert!(
                    idx < table.len(),
                    "cursor index {} outside component of length {}",
                    idx,
                    table.len()
                );
                acc.wrapping_add(table[idx])
            })
    }

    /// Advances every component by its substream offset
    pub fn jump_substream(&mut self, data: &NonlinearData) {
        self.check_pairing(data);
        for (i, idx) in self.indices.iter_mut().enumerate() {
            *idx = (*idx + data.offsets(i).substream) % data.length(i);
        }
    }

    /// Advances every component by its stream offset
    pub fn jump_stream(&mut self, data: &NonlinearData) {
        self.check_pairing(data);
        for (i, idx) in self.indices.iter_mut().enumerate() {
            *idx = (*idx + data.offsets(i).stream) % data.length(i);
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn check_pairing(&self, data: &NonlinearData) {
        assert_eq!(
            self.indices.len(),
            data.component_count(),
            "cursor and nonlinear data disagree on the component count"
        );
    }
}
