//! # The Simplex tableau
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//! The tableau is a compact, slightly revised version of the classical one:
//!
//! ```text
//! [ A  b ]
//! [ c  z ]
//! ```
//!
//! where `A` is the working constraint matrix, `b` the column of basic values, `c` the row of
//! relative cost coefficients and `z` the current objective value. During the first phase `A`
//! additionally carries an identity block with the artificial columns.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

use num_traits::Zero;

use crate::algorithm::two_phase::RELATIVE_EPSILON;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::DenseVector;

/// Holds all state of an instance of the simplex algorithm.
///
/// The working matrix is mutated with every pivot, while two maps maintain which variable is basic
/// in which row. The maps are exact inverses of each other, except that a constraint row may be
/// missing from both: such a row was recognized as redundant (all zeros) and is no longer used.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexTableau<M> {
    /// The `(m + 1) x (dim + 1)` working matrix, objective row at the bottom, right-hand side in
    /// the last column.
    matrix: M,
    /// Maps each constraint row to the variable that is basic in it.
    row_to_basic: HashMap<usize, usize>,
    /// Maps each basic variable to its row. A variable absent as a key is non-basic.
    basic_to_row: HashMap<usize, usize>,
}

impl<M: Matrix> SimplexTableau<M> {
    /// Wrap a working matrix and its basis bookkeeping.
    pub(crate) fn new(
        matrix: M,
        row_to_basic: HashMap<usize, usize>,
        basic_to_row: HashMap<usize, usize>,
    ) -> Self {
        debug_assert_eq!(row_to_basic.len(), basic_to_row.len());
        debug_assert!(row_to_basic.iter().all(|(&row, &variable)| basic_to_row.get(&variable) == Some(&row)));

        Self {
            matrix,
            row_to_basic,
            basic_to_row,
        }
    }

    /// Decompose into the working matrix and the two basis maps.
    pub(crate) fn into_parts(self) -> (M, HashMap<usize, usize>, HashMap<usize, usize>) {
        (self.matrix, self.row_to_basic, self.basic_to_row)
    }

    /// The number of variables, structural and (in the first phase) artificial.
    pub fn nr_variables(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    /// The number of constraint rows, including rows that were recognized as redundant.
    pub fn nr_constraint_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    fn objective_row(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    fn rhs_column(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    /// Whether a variable is in the current basis.
    pub fn is_in_basis(&self, variable: usize) -> bool {
        debug_assert!(variable < self.nr_variables());

        self.basic_to_row.contains_key(&variable)
    }

    /// The variable that is basic in a constraint row, or `None` for a redundant row.
    pub fn basic_variable(&self, row: usize) -> Option<usize> {
        debug_assert!(row < self.nr_constraint_rows());

        self.row_to_basic.get(&row).copied()
    }

    /// All variables currently in the basis, in arbitrary order.
    pub fn basic_variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.basic_to_row.keys().copied()
    }

    /// The row in which a variable is basic, or `None` if it is non-basic.
    pub fn basis_row(&self, variable: usize) -> Option<usize> {
        debug_assert!(variable < self.nr_variables());

        self.basic_to_row.get(&variable).copied()
    }

    /// The relative cost coefficient of a variable.
    ///
    /// Positive values indicate improving directions under the maximization convention. Basic
    /// variables have relative cost zero.
    pub fn relative_cost(&self, variable: usize) -> f64 {
        debug_assert!(variable < self.nr_variables());

        self.matrix.get_value(self.objective_row(), variable)
    }

    /// The current value of the objective function.
    pub fn objective_function_value(&self) -> f64 {
        self.matrix.get_value(self.objective_row(), self.rhs_column())
    }

    /// The current value of the right-hand side at a constraint row.
    pub fn constraint_value(&self, row: usize) -> f64 {
        debug_assert!(row < self.nr_constraint_rows());

        self.matrix.get_value(row, self.rhs_column())
    }

    /// A single entry of the working matrix.
    pub fn column_value(&self, row: usize, column: usize) -> f64 {
        self.matrix.get_value(row, column)
    }

    /// The largest absolute value in the working matrix, the scale numerical tolerances are
    /// relative to.
    pub fn abs_max(&self) -> f64 {
        self.matrix.abs_max()
    }

    /// Takes two variables, one basic and one non-basic, and swaps their roles.
    ///
    /// The pivot element, at the leaving variable's row and the entering variable's column, must
    /// be non-zero; the pivot rules guarantee this by only selecting columns with a strictly
    /// positive entry in that row. After this method returns, the entering variable's column is a
    /// unit vector and its relative cost is zero.
    pub fn bring_into_basis(&mut self, leaving: usize, entering: usize) {
        debug_assert!(entering < self.nr_variables());
        debug_assert!(!self.is_in_basis(entering));

        let row = self.basic_to_row[&leaving];
        let pivot = self.matrix.get_value(row, entering);
        debug_assert_ne!(pivot, 0_f64);

        self.matrix.multiply_row(row, 1_f64 / pivot);
        for other_row in 0..self.matrix.nr_rows() {
            if other_row == row {
                continue;
            }
            let factor = -self.matrix.get_value(other_row, entering);
            if !factor.is_zero() {
                self.matrix.mul_add_rows(row, other_row, factor);
            }
        }

        self.row_to_basic.insert(row, entering);
        self.basic_to_row.remove(&leaving);
        self.basic_to_row.insert(entering, row);
    }

    /// Extract the values of the current basic feasible solution.
    ///
    /// Basic variables take the value of the right-hand side at their row, all other variables are
    /// zero. The returned vector has one value per variable of the tableau.
    pub fn current_bfs(&self) -> DenseVector {
        let mut values = DenseVector::zeros(self.nr_variables());
        for (&row, &variable) in &self.row_to_basic {
            values[variable] = self.constraint_value(row);
        }

        values
    }

    /// Overwrite the right-hand side at a constraint row.
    pub(crate) fn set_constraint_value(&mut self, row: usize, value: f64) {
        debug_assert!(row < self.nr_constraint_rows());

        let rhs = self.rhs_column();
        self.matrix.set_value(row, rhs, value);
    }

    /// Declare a constraint row redundant: zero it out and drop it from the basis bookkeeping.
    ///
    /// The solver continues with a rank-deficient but consistent system; the row is skipped by
    /// the pivot rules from here on.
    pub(crate) fn mark_row_redundant(&mut self, row: usize) {
        debug_assert!(row < self.nr_constraint_rows());

        self.matrix.multiply_row(row, 0_f64);
        if let Some(variable) = self.row_to_basic.remove(&row) {
            self.basic_to_row.remove(&variable);
        }
    }
}

/// Whether the tableau invariants hold: every basic variable's column is a unit vector, basic
/// variables have relative cost zero, and the right-hand side is non-negative. All comparisons are
/// relative to the magnitude of the working matrix.
///
/// Used in debug assertions only; a tableau that fails this check indicates a bug in the pivot
/// administration, not a property of the problem being solved.
pub(crate) fn is_in_basic_feasible_solution_state<M: Matrix>(tableau: &SimplexTableau<M>) -> bool {
    let eps = RELATIVE_EPSILON * tableau.abs_max();

    let unit_columns = (0..tableau.nr_constraint_rows())
        .filter_map(|row| tableau.basic_variable(row).map(|variable| (row, variable)))
        .all(|(row, variable)| {
            (0..tableau.nr_constraint_rows() + 1).all(|other_row| {
                let expected = if other_row == row { 1_f64 } else { 0_f64 };
                (tableau.column_value(other_row, variable) - expected).abs() <= eps
            })
        });

    let feasible = (0..tableau.nr_constraint_rows())
        .all(|row| tableau.constraint_value(row) >= -eps);

    unit_columns && feasible
}

impl<M: Matrix> Display for SimplexTableau<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Tableau ({} variables, {} constraint rows):", self.nr_variables(), self.nr_constraint_rows())?;
        for row in 0..self.matrix.nr_rows() {
            for column in 0..self.matrix.nr_columns() {
                write!(f, "{:>12.5}", self.matrix.get_value(row, column))?;
            }
            if row < self.nr_constraint_rows() {
                if let Some(variable) = self.basic_variable(row) {
                    write!(f, "  <- x{}", variable)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use assert_approx_eq::assert_approx_eq;

    use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, SimplexTableau};
    use crate::data::linear_algebra::matrix::dense::DenseMatrix;

    /// A tableau over `x0, x1, x2` with `x2` basic in the only constraint row:
    ///
    ///     [ 2  -1  1  4 ]
    ///     [ 3   1  0  0 ]
    fn get_test_tableau() -> SimplexTableau<DenseMatrix> {
        let matrix = DenseMatrix::from_rows(vec![
            vec![2_f64, -1_f64, 1_f64, 4_f64],
            vec![3_f64, 1_f64, 0_f64, 0_f64],
        ]);
        let row_to_basic: HashMap<_, _> = [(0, 2)].into_iter().collect();
        let basic_to_row: HashMap<_, _> = [(2, 0)].into_iter().collect();

        SimplexTableau::new(matrix, row_to_basic, basic_to_row)
    }

    #[test]
    fn accessors() {
        let tableau = get_test_tableau();

        assert_eq!(tableau.nr_variables(), 3);
        assert_eq!(tableau.nr_constraint_rows(), 1);
        assert!(tableau.is_in_basis(2));
        assert!(!tableau.is_in_basis(0));
        assert_eq!(tableau.basic_variable(0), Some(2));
        assert_approx_eq!(tableau.relative_cost(0), 3_f64);
        assert_approx_eq!(tableau.constraint_value(0), 4_f64);
        assert_approx_eq!(tableau.objective_function_value(), 0_f64);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = get_test_tableau();
        tableau.bring_into_basis(2, 0);

        assert!(tableau.is_in_basis(0));
        assert!(!tableau.is_in_basis(2));
        // The pivot row was scaled to make the pivot 1.
        assert_approx_eq!(tableau.column_value(0, 0), 1_f64);
        assert_approx_eq!(tableau.constraint_value(0), 2_f64);
        // The entering column was eliminated from the objective row.
        assert_approx_eq!(tableau.relative_cost(0), 0_f64);
        assert_approx_eq!(tableau.objective_function_value(), -6_f64);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn pivot_and_pivot_back() {
        let mut tableau = get_test_tableau();
        let original = tableau.clone();

        tableau.bring_into_basis(2, 0);
        tableau.bring_into_basis(0, 2);

        for row in 0..2 {
            for column in 0..4 {
                assert_approx_eq!(
                    tableau.column_value(row, column),
                    original.column_value(row, column)
                );
            }
        }
    }

    #[test]
    fn current_bfs() {
        let solution = get_test_tableau().current_bfs();
        assert_eq!(solution.len(), 3);
        assert_approx_eq!(solution[0], 0_f64);
        assert_approx_eq!(solution[1], 0_f64);
        assert_approx_eq!(solution[2], 4_f64);
    }

    #[test]
    fn mark_row_redundant() {
        let mut tableau = get_test_tableau();
        tableau.mark_row_redundant(0);

        assert_eq!(tableau.basic_variable(0), None);
        assert!(!tableau.is_in_basis(2));
        assert_approx_eq!(tableau.constraint_value(0), 0_f64);
        assert_approx_eq!(tableau.column_value(0, 0), 0_f64);
    }
}
