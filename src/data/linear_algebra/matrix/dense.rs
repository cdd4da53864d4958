//! # Dense matrix
//!
//! Row-major flat storage; every entry is explicitly in memory.
use crate::data::linear_algebra::matrix::Matrix;

/// A `Matrix` storing all `nr_rows * nr_columns` values contiguously, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    nr_rows: usize,
    nr_columns: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled matrix of the specified dimensions.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            nr_rows,
            nr_columns,
            data: vec![0_f64; nr_rows * nr_columns],
        }
    }

    /// Create a matrix from row-major flat data.
    pub fn from_flat_data(nr_rows: usize, nr_columns: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), nr_rows * nr_columns, "flat data length doesn't match dimensions");

        Self { nr_rows, nr_columns, data }
    }

    /// Create a matrix from a collection of equally long rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == nr_columns), "rows are not of equal length");

        Self {
            nr_rows,
            nr_columns,
            data: rows.into_iter().flatten().collect(),
        }
    }

    fn flat_index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.nr_rows && column < self.nr_columns,
            "index ({}, {}) out of bounds for {} x {} matrix",
            row, column, self.nr_rows, self.nr_columns,
        );

        column + row * self.nr_columns
    }

    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        assert!(row < self.nr_rows, "row {} out of bounds for {} rows", row, self.nr_rows);

        (row * self.nr_columns)..((row + 1) * self.nr_columns)
    }
}

impl Matrix for DenseMatrix {
    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get_value(&self, row: usize, column: usize) -> f64 {
        self.data[self.flat_index(row, column)]
    }

    fn set_value(&mut self, row: usize, column: usize, value: f64) {
        let index = self.flat_index(row, column);
        self.data[index] = value;
    }

    fn multiply_row(&mut self, row: usize, factor: f64) {
        let range = self.row_range(row);
        for value in &mut self.data[range] {
            *value *= factor;
        }
    }

    fn mul_add_rows(&mut self, source: usize, destination: usize, factor: f64) {
        if source == destination {
            self.multiply_row(destination, 1_f64 + factor);
            return;
        }

        let source_range = self.row_range(source);
        let destination_start = self.row_range(destination).start;
        for (offset, source_index) in source_range.enumerate() {
            let value = self.data[source_index];
            self.data[destination_start + offset] += factor * value;
        }
    }

    fn abs_max(&self) -> f64 {
        self.data.iter().fold(0_f64, |max, value| max.max(value.abs()))
    }
}
