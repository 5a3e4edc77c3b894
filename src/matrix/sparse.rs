//! Coordinate-keyed sparse matrix storage

use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

use crate::error::Shape;

/// Integer types that can be stored in a [`SparseMatrix`]
///
/// Implemented for every signed primitive integer.
pub trait Element:
    PrimInt + Signed + FromStr<Err = ParseIntError> + fmt::Display + fmt::Debug
{
}

impl<T> Element for T where
    T: PrimInt + Signed + FromStr<Err = ParseIntError> + fmt::Display + fmt::Debug
{
}

/// A sparse integer matrix keyed by `(row, col)` coordinates
///
/// Only non-zero values are stored:
/// - writing a zero through [`set_value`](Self::set_value) removes the entry
/// - memory and iteration cost follow the number of non-zeros, not `rows * cols`
///
/// The shape is fixed at construction. Arithmetic never mutates its operands
/// and always returns a freshly owned matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set_value(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Triplets go through [`set_value`](Self::set_value) in order, so zero values
    /// are dropped and a later duplicate coordinate replaces an earlier one.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set_value(row, col, value);
        }
        matrix
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, cols)` pair
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when the matrix holds no non-zero entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when a non-zero entry is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Stores `value` at `(row, col)`, or removes the entry when `value` is zero
    ///
    /// Coordinates are not checked against the matrix shape.
    pub fn set_value(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Returns the value at `(row, col)`, or zero when nothing is stored there
    pub fn get_value(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Iterates over the non-zero entries as `(row, col, value)` in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Returns the non-zero entries sorted by row, then column
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let entries = self.sorted_entries();
        let max_rows_to_print = 5;
        let max_elements = 5;

        if !entries.is_empty() {
            writeln!(f, "  content sample:")?;

            let mut rows = entries.chunk_by(|a, b| a.0 == b.0);
            for row in rows.by_ref().take(max_rows_to_print) {
                write!(f, "    row {}: ", row[0].0)?;
                for &(_, col, value) in row.iter().take(max_elements) {
                    write!(f, "({}, {:?}) ", col, value)?;
                }
                if row.len() > max_elements {
                    write!(f, "... ({} more)", row.len() - max_elements)?;
                }
                writeln!(f)?;
            }

            let remaining = rows.count();
            if remaining > 0 {
                writeln!(f, "    ... ({} more non-empty rows)", remaining)?;
            }
        }

        write!(f, "}}")
    }
}
