//! # Sparse matrix
//!
//! Row-major storage of only the non-zero values, as `(column index, value)` tuples sorted by
//! column index. Setting an entry to zero removes it, so the stored tuples are non-zero at all
//! times.
use num_traits::Zero;

use crate::data::linear_algebra::matrix::Matrix;

/// A `Matrix` that stores per row only the non-zero entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: Vec<Vec<(usize, f64)>>,
    nr_columns: usize,
}

impl SparseMatrix {
    /// Create a matrix of the specified dimensions without any explicit entries.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: vec![Vec::new(); nr_rows],
            nr_columns,
        }
    }

    /// Create a square identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: (0..n).map(|i| vec![(i, 1_f64)]).collect(),
            nr_columns: n,
        }
    }

    /// Create a matrix from a collection of equally long dense rows, dropping zero entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let nr_columns = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == nr_columns), "rows are not of equal length");

        Self {
            rows: rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .enumerate()
                        .filter(|(_, value)| !value.is_zero())
                        .collect()
                })
                .collect(),
            nr_columns,
        }
    }

    /// The number of explicitly stored entries, all of which are non-zero.
    pub fn size(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    fn check_bounds(&self, row: usize, column: usize) {
        assert!(
            row < self.nr_rows() && column < self.nr_columns,
            "index ({}, {}) out of bounds for {} x {} matrix",
            row, column, self.nr_rows(), self.nr_columns,
        );
    }
}

impl Matrix for SparseMatrix {
    fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get_value(&self, row: usize, column: usize) -> f64 {
        self.check_bounds(row, column);

        match self.rows[row].binary_search_by_key(&column, |&(j, _)| j) {
            Ok(index) => self.rows[row][index].1,
            Err(_) => 0_f64,
        }
    }

    fn set_value(&mut self, row: usize, column: usize, value: f64) {
        self.check_bounds(row, column);

        let position = self.rows[row].binary_search_by_key(&column, |&(j, _)| j);
        match (position, value.is_zero()) {
            (Ok(index), true) => { self.rows[row].remove(index); },
            (Ok(index), false) => self.rows[row][index].1 = value,
            (Err(_), true) => {},
            (Err(index), false) => self.rows[row].insert(index, (column, value)),
        }
    }

    fn multiply_row(&mut self, row: usize, factor: f64) {
        assert!(row < self.nr_rows(), "row {} out of bounds for {} rows", row, self.nr_rows());

        if factor.is_zero() {
            self.rows[row].clear();
        } else {
            for (_, value) in &mut self.rows[row] {
                *value *= factor;
            }
        }
    }

    fn mul_add_rows(&mut self, source: usize, destination: usize, factor: f64) {
        if source == destination {
            self.multiply_row(destination, 1_f64 + factor);
            return;
        }
        if factor.is_zero() {
            return;
        }

        // Only the source row's stored entries can change the destination. The row is cloned, the
        // destination row's layout shifts while values are inserted and removed.
        let source_row = self.rows[source].clone();
        for (column, value) in source_row {
            let new_value = self.get_value(destination, column) + factor * value;
            self.set_value(destination, column, new_value);
        }
    }

    fn abs_max(&self) -> f64 {
        self.rows.iter()
            .flat_map(|row| row.iter())
            .fold(0_f64, |max, &(_, value)| max.max(value.abs()))
    }
}
