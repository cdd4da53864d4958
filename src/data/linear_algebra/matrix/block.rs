//! # Block-composed matrices
//!
//! Two sub-matrices viewed side by side, or stacked on top of each other, as one larger matrix.
//! The composition owns its children and routes every read and mutation to the child holding the
//! addressed entry; wider or taller stacks are built by nesting. No values are copied when a block
//! is assembled or taken apart.
use num_traits::Zero;

use crate::data::linear_algebra::matrix::Matrix;

/// Two matrices with an equal number of rows, the `left` columns before the `right` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBlock<L, R> {
    left: L,
    right: R,
}

/// Two matrices with an equal number of columns, the `top` rows above the `bottom` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock<T, B> {
    top: T,
    bottom: B,
}

impl<L: Matrix, R: Matrix> ColumnBlock<L, R> {
    /// Combine two matrices side by side. The row counts must agree.
    pub fn new(left: L, right: R) -> Self {
        assert_eq!(
            left.nr_rows(),
            right.nr_rows(),
            "row counts don't agree: {} != {}",
            left.nr_rows(),
            right.nr_rows(),
        );

        Self { left, right }
    }

    /// Take the composition apart again, without copying the children.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }

    /// Resolve a column index to a child and the index within that child.
    fn child_column(&self, column: usize) -> (bool, usize) {
        let split = self.left.nr_columns();
        if column < split {
            (true, column)
        } else {
            (false, column - split)
        }
    }
}

impl<L: Matrix, R: Matrix> Matrix for ColumnBlock<L, R> {
    fn nr_rows(&self) -> usize {
        self.left.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.left.nr_columns() + self.right.nr_columns()
    }

    fn get_value(&self, row: usize, column: usize) -> f64 {
        match self.child_column(column) {
            (true, j) => self.left.get_value(row, j),
            (false, j) => self.right.get_value(row, j),
        }
    }

    fn set_value(&mut self, row: usize, column: usize, value: f64) {
        match self.child_column(column) {
            (true, j) => self.left.set_value(row, j, value),
            (false, j) => self.right.set_value(row, j, value),
        }
    }

    fn multiply_row(&mut self, row: usize, factor: f64) {
        self.left.multiply_row(row, factor);
        self.right.multiply_row(row, factor);
    }

    fn mul_add_rows(&mut self, source: usize, destination: usize, factor: f64) {
        self.left.mul_add_rows(source, destination, factor);
        self.right.mul_add_rows(source, destination, factor);
    }

    fn abs_max(&self) -> f64 {
        self.left.abs_max().max(self.right.abs_max())
    }
}

impl<T: Matrix, B: Matrix> RowBlock<T, B> {
    /// Stack two matrices on top of each other. The column counts must agree.
    pub fn new(top: T, bottom: B) -> Self {
        assert_eq!(
            top.nr_columns(),
            bottom.nr_columns(),
            "column counts don't agree: {} != {}",
            top.nr_columns(),
            bottom.nr_columns(),
        );

        Self { top, bottom }
    }

    /// Take the composition apart again, without copying the children.
    pub fn into_parts(self) -> (T, B) {
        (self.top, self.bottom)
    }

    /// Resolve a row index to a child and the index within that child.
    fn child_row(&self, row: usize) -> (bool, usize) {
        let split = self.top.nr_rows();
        if row < split {
            (true, row)
        } else {
            (false, row - split)
        }
    }
}

impl<T: Matrix, B: Matrix> Matrix for RowBlock<T, B> {
    fn nr_rows(&self) -> usize {
        self.top.nr_rows() + self.bottom.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.top.nr_columns()
    }

    fn get_value(&self, row: usize, column: usize) -> f64 {
        match self.child_row(row) {
            (true, i) => self.top.get_value(i, column),
            (false, i) => self.bottom.get_value(i, column),
        }
    }

    fn set_value(&mut self, row: usize, column: usize, value: f64) {
        match self.child_row(row) {
            (true, i) => self.top.set_value(i, column, value),
            (false, i) => self.bottom.set_value(i, column, value),
        }
    }

    fn multiply_row(&mut self, row: usize, factor: f64) {
        match self.child_row(row) {
            (true, i) => self.top.multiply_row(i, factor),
            (false, i) => self.bottom.multiply_row(i, factor),
        }
    }

    fn mul_add_rows(&mut self, source: usize, destination: usize, factor: f64) {
        match (self.child_row(source), self.child_row(destination)) {
            ((true, i), (true, k)) => self.top.mul_add_rows(i, k, factor),
            ((false, i), (false, k)) => self.bottom.mul_add_rows(i, k, factor),
            // The two rows live in different children and can't share a buffer; the source row is
            // read value by value and applied to the destination.
            ((source_in_top, i), (_, k)) => {
                for column in 0..self.nr_columns() {
                    let value = if source_in_top {
                        self.top.get_value(i, column)
                    } else {
                        self.bottom.get_value(i, column)
                    };
                    if value.is_zero() {
                        continue;
                    }

                    if source_in_top {
                        let current = self.bottom.get_value(k, column);
                        self.bottom.set_value(k, column, current + factor * value);
                    } else {
                        let current = self.top.get_value(k, column);
                        self.top.set_value(k, column, current + factor * value);
                    }
                }
            },
        }
    }

    fn abs_max(&self) -> f64 {
        self.top.abs_max().max(self.bottom.abs_max())
    }
}
