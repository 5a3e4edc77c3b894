//! Utilities for converting between our matrix format and external libraries

use ndarray::Array2;
use sprs::CsMat;

use crate::matrix::{Element, SparseMatrix};

// `set_value` is unchecked, so a matrix may hold entries past its shape
fn assert_within_shape<T: Element>(matrix: &SparseMatrix<T>) {
    for (row, col, _) in matrix.iter() {
        assert!(
            row < matrix.rows() && col < matrix.cols(),
            "Entry ({}, {}) out of bounds for {} matrix",
            row,
            col,
            matrix.shape()
        );
    }
}

/// Converts a sparse matrix to sprs CsMat in CSR format
///
/// # Panics
///
/// Panics if any stored entry lies outside the matrix shape.
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Element + Default,
{
    assert_within_shape(matrix);

    let mut row_ptr = Vec::with_capacity(matrix.rows() + 1);
    let mut col_idx = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    row_ptr.push(0);
    let mut entries = matrix.sorted_entries().into_iter().peekable();
    for i in 0..matrix.rows() {
        while let Some((_, col, value)) = entries.next_if(|&(row, _, _)| row == i) {
            col_idx.push(col);
            values.push(value);
        }
        row_ptr.push(col_idx.len());
    }

    CsMat::new((matrix.rows(), matrix.cols()), row_ptr, col_idx, values)
}

/// Converts sprs CsMat (CSR or CSC) to a sparse matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: CsMat<T>) -> SparseMatrix<T>
where
    T: Element + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    let mut result = SparseMatrix::new(n_rows, n_cols);
    for i in 0..n_rows {
        for j in indptr[i]..indptr[i + 1] {
            result.set_value(i, indices[j], data[j]);
        }
    }
    result
}

/// Expands a sparse matrix into a dense array
///
/// # Panics
///
/// Panics if any stored entry lies outside the matrix shape.
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Array2<T> {
    assert_within_shape(matrix);

    let mut dense = Array2::zeros((matrix.rows(), matrix.cols()));
    for (row, col, value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Collects the non-zero cells of a dense array into a sparse matrix
pub fn from_dense<T: Element>(dense: &Array2<T>) -> SparseMatrix<T> {
    let (n_rows, n_cols) = dense.dim();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        dense
            .indexed_iter()
            .map(|((row, col), &value)| (row, col, value)),
    )
}
