//! Error types for sparse matrix loading and arithmetic

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use crate::matrix::Operation;

/// The `(row_count, column_count)` pair describing a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Why a matrix document could not be parsed
///
/// Line numbers are 1-based and count every physical line, blank ones included.
#[derive(Debug)]
pub enum FormatCause {
    /// The file could not be opened or read
    Io(io::Error),
    /// The document ended before the named header line
    MissingHeader(&'static str),
    /// A header line has no `=` separator
    MalformedHeader { line: usize, text: String },
    /// An entry line is not wrapped in parentheses
    MalformedEntry { line: usize, text: String },
    /// An entry line does not hold exactly three fields
    FieldCount { line: usize, found: usize },
    /// A header or entry field is not an integer of the expected kind
    InvalidInteger {
        line: usize,
        field: String,
        source: ParseIntError,
    },
    /// An entry lies outside the declared shape
    OutOfBounds { line: usize, row: usize, col: usize, shape: Shape },
}

impl fmt::Display for FormatCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatCause::Io(_) => write!(f, "failed to read file"),
            FormatCause::MissingHeader(key) => write!(f, "missing `{key}=` header line"),
            FormatCause::MalformedHeader { line, text } => {
                write!(f, "line {line}: malformed header {text:?}")
            }
            FormatCause::MalformedEntry { line, text } => {
                write!(f, "line {line}: incorrect entry format {text:?}")
            }
            FormatCause::FieldCount { line, found } => {
                write!(f, "line {line}: expected 3 comma-separated fields, found {found}")
            }
            FormatCause::InvalidInteger { line, field, .. } => {
                write!(f, "line {line}: invalid integer {field:?}")
            }
            FormatCause::OutOfBounds { line, row, col, shape } => {
                write!(f, "line {line}: entry ({row}, {col}) lies outside a {shape} matrix")
            }
        }
    }
}

impl std::error::Error for FormatCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatCause::Io(e) => Some(e),
            FormatCause::InvalidInteger { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatCause {
    fn from(e: io::Error) -> Self {
        FormatCause::Io(e)
    }
}

/// Errors raised by matrix loading and arithmetic
#[derive(Debug)]
pub enum MatrixError {
    /// A matrix file could not be loaded
    Format { path: PathBuf, cause: FormatCause },
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },
}

impl MatrixError {
    pub(crate) fn format(path: impl Into<PathBuf>, cause: FormatCause) -> Self {
        MatrixError::Format {
            path: path.into(),
            cause,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Format { path, .. } => {
                write!(f, "error while processing file {}", path.display())
            }
            MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left,
                right,
            } => write!(
                f,
                "matrix dimensions must match for multiplication: {} (cols) != {} (rows) ({left} * {right})",
                left.cols, right.rows
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "matrix dimensions must match for {} operation: {left} vs {right}",
                operation.noun()
            ),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::Format { cause, .. } => Some(cause),
            MatrixError::DimensionMismatch { .. } => None,
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
