use crate::constant::LARGE_TABLE_CELLS;
use tracing::{debug, warn};

/// Longest-common-subsequence length table for two token sequences
///
/// Cell (i, j) holds the LCS length of the first `i` tokens of the original
/// and the first `j` tokens of the updated sequence. Stored row-major in a
/// single buffer of `(m + 1) * (n + 1)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table with the standard LCS recurrence
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let size = rows * cols;

        if size > LARGE_TABLE_CELLS {
            warn!(
                "Word diff table has {} cells ({} x {} tokens); this may be slow",
                size,
                a.len(),
                b.len()
            );
        } else {
            debug!("Building LCS table {} x {}", rows, cols);
        }

        let mut cells = vec![0usize; size];
        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Value of cell (i, j)
    ///
    /// Panics if the coordinates are outside the table.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) out of bounds for {} x {} table",
            i,
            j,
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full sequences
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Table dimensions as (m + 1, n + 1)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borders_are_zero() {
        let a = ["x", "y", "z"];
        let b = ["y", "z"];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.dimensions(), (4, 3));
        for i in 0..4 {
            assert_eq!(table.get(i, 0), 0);
        }
        for j in 0..3 {
            assert_eq!(table.get(0, j), 0);
        }
    }

    #[test]
    fn classic_recurrence_values() {
        let a = ["a", "b", "c"];
        let b = ["a", "c"];
        let table = LcsTable::build(&a, &b);
        // rows: "", a, a b, a b c / cols: "", a, a c
        let expected = [[0, 0, 0], [0, 1, 1], [0, 1, 1], [0, 1, 2]];
        for (i, row) in expected.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                assert_eq!(table.get(i, j), *value, "cell ({}, {})", i, j);
            }
        }
        assert_eq!(table.lcs_len(), 2);
    }

    #[test]
    fn empty_sequences() {
        let empty: [&str; 0] = [];
        let table = LcsTable::build(&empty, &empty);
        assert_eq!(table.dimensions(), (1, 1));
        assert_eq!(table.lcs_len(), 0);

        let table = LcsTable::build(&["a", "b"], &empty);
        assert_eq!(table.lcs_len(), 0);
    }

    #[test]
    fn duplicates_count_once_per_match() {
        let a = ["a", "a", "b", "a"];
        let b = ["b", "a", "a"];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.lcs_len(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_outside_table_panics() {
        let table = LcsTable::build(&["a"], &["a"]);
        table.get(2, 0);
    }
}
