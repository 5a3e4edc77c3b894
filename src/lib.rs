//! # sparse-matrix: sparse integer matrices
//!
//! Stores only the non-zero entries of an integer matrix, keyed by
//! `(row, col)`, and supports addition, subtraction and multiplication
//! without ever materializing zeros. Matrices are read from and written to a
//! small plain-text format (see [`format`]).
//!
//! ## Usage
//!
//! ```
//! use sparse_matrix::SparseMatrix;
//!
//! let mut a: SparseMatrix = SparseMatrix::new(2, 2);
//! a.set_value(0, 0, 1);
//! a.set_value(0, 1, 2);
//! a.set_value(1, 1, 3);
//!
//! let identity = SparseMatrix::identity(2);
//! let c = a.multiplication(&identity).unwrap();
//! assert_eq!(c, a);
//!
//! let mut text = Vec::new();
//! c.write_to(&mut text).unwrap();
//! assert_eq!(
//!     String::from_utf8(text).unwrap(),
//!     "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 1, 3)\n"
//! );
//! ```
//!
//! Loading from disk reports every failure as one error kind:
//!
//! ```
//! use sparse_matrix::{MatrixError, SparseMatrix};
//!
//! let err = SparseMatrix::<i64>::create_from_file("does/not/exist.txt").unwrap_err();
//! assert!(matches!(err, MatrixError::Format { .. }));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use config::RunConfig;
pub use error::{FormatCause, MatrixError, Result, Shape};
pub use matrix::{Element, Operation, SparseMatrix, UnknownOperation};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
