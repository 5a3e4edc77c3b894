//! Plain-text matrix file format
//!
//! ```text
//! rows=3
//! cols=4
//! (0, 3, 2)
//! (1, 0, 3)
//! (2, 1, 1)
//! ```
//!
//! The first two lines give the shape; the key before `=` is not checked.
//! Every following non-blank line is one `(row, col, value)` entry. Blank
//! lines are skipped and whitespace around fields is ignored. Files are
//! written with entries in row-major order and only non-zero values.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{FormatCause, MatrixError, Result, Shape};
use crate::matrix::{Element, SparseMatrix};

fn parse_int<N>(field: &str, line: usize) -> std::result::Result<N, FormatCause>
where
    N: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let field = field.trim();
    field.parse().map_err(|source| FormatCause::InvalidInteger {
        line,
        field: field.to_string(),
        source,
    })
}

fn parse_header(
    key: &'static str,
    line: Option<(usize, &str)>,
) -> std::result::Result<usize, FormatCause> {
    let (line_no, text) = line.ok_or(FormatCause::MissingHeader(key))?;
    let value = text
        .trim()
        .split('=')
        .nth(1)
        .ok_or_else(|| FormatCause::MalformedHeader {
            line: line_no,
            text: text.to_string(),
        })?;
    parse_int(value, line_no)
}

fn parse_entry<T: Element>(
    line_no: usize,
    text: &str,
) -> std::result::Result<(usize, usize, T), FormatCause> {
    let inner = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| FormatCause::MalformedEntry {
            line: line_no,
            text: text.to_string(),
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return Err(FormatCause::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    Ok((
        parse_int(fields[0], line_no)?,
        parse_int(fields[1], line_no)?,
        parse_int(fields[2], line_no)?,
    ))
}

impl<T: Element> SparseMatrix<T> {
    /// Parses a matrix document held in memory
    ///
    /// Entries outside the declared shape are rejected.
    pub fn from_text(text: &str) -> std::result::Result<Self, FormatCause> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

        let rows = parse_header("rows", lines.next())?;
        let cols = parse_header("cols", lines.next())?;
        let shape = Shape::new(rows, cols);
        let mut matrix = Self::new(rows, cols);

        for (line_no, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (row, col, value) = parse_entry(line_no, line)?;
            if row >= rows || col >= cols {
                return Err(FormatCause::OutOfBounds {
                    line: line_no,
                    row,
                    col,
                    shape,
                });
            }
            matrix.set_value(row, col, value);
        }

        Ok(matrix)
    }

    /// Loads a matrix from a file
    ///
    /// The whole file is read before parsing. Any I/O or parse failure is
    /// reported as [`MatrixError::Format`] carrying `path` and the cause.
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let matrix = fs::read_to_string(path)
            .map_err(FormatCause::from)
            .and_then(|text| Self::from_text(&text))
            .map_err(|cause| MatrixError::format(path, cause))?;

        log::debug!(
            "loaded {} matrix with {} non-zeros from {}",
            matrix.shape(),
            matrix.nnz(),
            path.display()
        );
        Ok(matrix)
    }

    /// Writes the matrix in file format to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "rows={}", self.rows())?;
        writeln!(writer, "cols={}", self.cols())?;
        for (row, col, value) in self.sorted_entries() {
            writeln!(writer, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }

    /// Writes the matrix to `path`, replacing any existing file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        log::debug!(
            "wrote {} matrix with {} non-zeros to {}",
            self.shape(),
            self.nnz(),
            path.display()
        );
        Ok(())
    }
}
