//! Addition, subtraction and multiplication of sparse matrices
//!
//! Every operation reads its operands and builds a new result; neither
//! operand is modified.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::sparse::{Element, SparseMatrix};

/// The binary operations supported on sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Command name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Noun used in diagnostics ("addition", ...)
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Applies this operation to `left` and `right`
    pub fn apply<T: Element>(
        &self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => left.addition(right),
            Operation::Subtract => left.subtraction(right),
            Operation::Multiply => left.multiplication(right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operation {:?}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

impl<T: Element> SparseMatrix<T> {
    fn check_same_shape(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise sum `self + other`
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless both shapes are equal.
    /// Coordinates whose values cancel out are absent from the result.
    pub fn addition(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, Operation::Add)?;
        log::trace!("adding {} and {} matrices", self.shape(), other.shape());

        let mut result = Self::new(self.rows(), self.cols());
        for (row, col, value) in self.iter() {
            result.set_value(row, col, value + other.get_value(row, col));
        }
        for (row, col, value) in other.iter() {
            if !self.contains(row, col) {
                result.set_value(row, col, value);
            }
        }
        Ok(result)
    }

    /// Element-wise difference `self - other`
    ///
    /// Same shape contract as [`addition`](Self::addition).
    pub fn subtraction(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, Operation::Subtract)?;
        log::trace!("subtracting {} from {} matrix", other.shape(), self.shape());

        let mut result = Self::new(self.rows(), self.cols());
        for (row, col, value) in self.iter() {
            result.set_value(row, col, value - other.get_value(row, col));
        }
        for (row, col, value) in other.iter() {
            if !self.contains(row, col) {
                result.set_value(row, col, -value);
            }
        }
        Ok(result)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() × other.cols()`.
    ///
    /// Driven by the non-zeros of `self`: the rows of `other` are indexed once,
    /// and each output cell keeps a running sum that is stored only after all
    /// of its terms are added.
    pub fn multiplication(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: self.shape(),
                right: other.shape(),
            });
        }
        log::trace!("multiplying {} by {} matrix", self.shape(), other.shape());

        // Row k of `other` as (col, value) pairs
        let mut other_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (k, j, value) in other.iter() {
            other_rows.entry(k).or_default().push((j, value));
        }

        let mut accum: HashMap<(usize, usize), T> = HashMap::new();
        for (i, k, a_val) in self.iter() {
            if let Some(b_row) = other_rows.get(&k) {
                for &(j, b_val) in b_row {
                    let cell = accum.entry((i, j)).or_insert_with(T::zero);
                    *cell = *cell + a_val * b_val;
                }
            }
        }

        let mut result = Self::new(self.rows(), other.cols());
        for ((i, j), value) in accum {
            result.set_value(i, j, value);
        }
        Ok(result)
    }
}
