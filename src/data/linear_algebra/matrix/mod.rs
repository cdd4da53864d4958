//! # Matrix implementations
//!
//! The `Matrix` trait defines the set of operations available for all matrix types defined in this
//! module. The Simplex tableau is written entirely against this trait, so the same pivot logic
//! runs on dense, sparse and block-composed storage.
//!
//! Out-of-range indices and non-conforming dimensions are programming errors; all implementations
//! panic on them rather than returning a recoverable error.
pub mod block;
pub mod dense;
pub mod sparse;

pub use block::{ColumnBlock, RowBlock};
pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;

/// Random access and in-place row operations, the primitives a Simplex pivot is made of.
///
/// Cloning is deep for every implementor; block matrices own their children.
pub trait Matrix: Clone {
    /// The number of rows.
    fn nr_rows(&self) -> usize;

    /// The number of columns.
    fn nr_columns(&self) -> usize;

    /// The value at coordinate (`row`, `column`).
    fn get_value(&self, row: usize, column: usize) -> f64;

    /// Set the value at coordinate (`row`, `column`) to `value`.
    fn set_value(&mut self, row: usize, column: usize, value: f64);

    /// Multiply all values in a row by a constant factor.
    fn multiply_row(&mut self, row: usize, factor: f64);

    /// Add a multiple of one row to another row, in place.
    ///
    /// Computes `row[destination] += factor * row[source]`. Calling this method with `source ==
    /// destination` is valid and equivalent to `multiply_row(destination, 1 + factor)`;
    /// implementations may not assume the two rows occupy distinct buffers.
    fn mul_add_rows(&mut self, source: usize, destination: usize, factor: f64);

    /// The largest absolute value in this matrix, `0` when all entries are zero.
    fn abs_max(&self) -> f64;
}
