// Matrix data structures and operations

pub mod arithmetic;
pub mod sparse;

pub use arithmetic::{Operation, UnknownOperation};
pub use sparse::{Element, SparseMatrix};
