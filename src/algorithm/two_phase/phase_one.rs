//! # Phase one
//!
//! Finding a basic feasible solution. Each constraint row receives an artificial variable that
//! supplies a trivial initial basis; minimizing the sum of the artificial variables either drives
//! them all to zero, yielding a basic feasible solution of the original problem, or proves that no
//! feasible solution exists.
use std::collections::HashMap;

use itertools::Itertools;
use num_traits::Zero;

use crate::algorithm::two_phase::RELATIVE_EPSILON;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, PivotSelection};
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, SimplexTableau};
use crate::data::linear_algebra::matrix::{ColumnBlock, Matrix, RowBlock, SparseMatrix};
use crate::data::linear_algebra::matrix::dense::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;

/// The phase-1 working matrix: the (sign-normalized) constraint block, the artificial identity
/// block and the right-hand side column, with the artificial objective row at the bottom.
pub(crate) type ArtificialMatrix<M> =
    RowBlock<ColumnBlock<ColumnBlock<M, SparseMatrix>, DenseMatrix>, DenseMatrix>;

/// The phase-2 working matrix: the artificial block is gone, the original objective installed.
pub(crate) type CollapsedMatrix<M> = RowBlock<ColumnBlock<M, DenseMatrix>, DenseMatrix>;

/// After the first phase, either a basic feasible solution is found or the problem is infeasible.
#[derive(Debug)]
pub(crate) enum FeasibilityResult<M> {
    /// A tableau over the original variables, in canonical form, primal feasible.
    Feasible(SimplexTableau<CollapsedMatrix<M>>),
    /// The feasible region is empty.
    Infeasible,
}

/// Reduces the artificial cost of the basic solution to zero, if possible. In doing so, a basic
/// feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `lp`: Problem to find a basic feasible solution for.
/// * `rule`: Pivot rule instance, shared with the second phase.
pub(crate) fn primal<M: Matrix, PR: PivotRule>(
    lp: &StandardForm<M>,
    rule: &mut PR,
) -> FeasibilityResult<M> {
    let mut tableau = create_artificial_tableau(lp);

    let mut nr_iterations = 0_usize;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(&tableau));

        match rule.choose_pivot(&tableau) {
            PivotSelection::Pivot { leaving, entering } => {
                tableau.bring_into_basis(leaving, entering);
                nr_iterations += 1;
            },
            PivotSelection::Optimal => break,
            PivotSelection::Unbounded => {
                // The artificial cost is bounded; an unbounded ray here means the problem data
                // doesn't admit a feasible basis.
                log::debug!("artificial objective reported unbounded, treating the problem as infeasible");
                return FeasibilityResult::Infeasible;
            },
        }
    }

    let eps = RELATIVE_EPSILON * tableau.abs_max();
    let artificial_cost = tableau.objective_function_value();
    if artificial_cost.abs() > eps {
        log::debug!(
            "infeasible: a total artificial value of {} remains after {} pivots",
            artificial_cost, nr_iterations,
        );
        return FeasibilityResult::Infeasible;
    }
    log::debug!("basic feasible solution found after {} pivots", nr_iterations);

    remove_artificial_variables(&mut tableau, lp.nr_variables(), eps);
    FeasibilityResult::Feasible(collapse(tableau, lp))
}

/// Create a Simplex tableau by wrapping a standard form linear program with artificial variables.
///
/// The working matrix is laid out as
///
/// ```text
/// [    [A]       [I]    b ]
/// [ ... 0 ... -1 ... -1 0 ]
/// ```
///
/// after which every constraint row is added into the bottom row once. That elimination step
/// zeroes the objective entries of the artificial columns, making the artificial variables basic
/// at cost zero, and leaves the column sums of `A` as the correct relative costs of the
/// structural columns. Rows with a negative right-hand side are negated first so that the
/// artificial basis is feasible.
pub(crate) fn create_artificial_tableau<M: Matrix>(
    lp: &StandardForm<M>,
) -> SimplexTableau<ArtificialMatrix<M>> {
    let (n, m) = (lp.nr_variables(), lp.nr_constraints());

    let mut constraints = lp.constraint_matrix().clone();
    let mut rhs = lp.constraint_vector().clone();
    for row in 0..m {
        if rhs[row] < 0_f64 {
            constraints.multiply_row(row, -1_f64);
            rhs[row] = -rhs[row];
        }
    }

    let mut objective = DenseVector::zeros(n + m + 1);
    for column in n..(n + m) {
        objective[column] = -1_f64;
    }

    let mut matrix = RowBlock::new(
        ColumnBlock::new(
            ColumnBlock::new(constraints, SparseMatrix::identity(m)),
            rhs.into_column(),
        ),
        objective.into_row(),
    );
    for row in 0..m {
        matrix.mul_add_rows(row, m, 1_f64);
    }

    let row_to_basic: HashMap<_, _> = (0..m).map(|row| (row, n + row)).collect();
    let basic_to_row: HashMap<_, _> = (0..m).map(|row| (n + row, row)).collect();
    SimplexTableau::new(matrix, row_to_basic, basic_to_row)
}

/// Removes all artificial variables from the basis by making basis changes "at zero level",
/// without a change of cost of the current solution.
///
/// Any artificial variable still basic after phase 1 sits in a row whose right-hand side is zero
/// up to `eps`; that value is snapped to exact zero to avoid later drift. If the row has a
/// non-zero entry in some non-basic structural column, pivoting there removes the artificial
/// variable while keeping the solution unchanged. If it has none, the constraint row is a linear
/// combination of the others and is dropped as redundant.
fn remove_artificial_variables<M: Matrix>(
    tableau: &mut SimplexTableau<ArtificialMatrix<M>>,
    nr_structural: usize,
    eps: f64,
) {
    let artificial_variables = tableau.basic_variables()
        .filter(|&variable| variable >= nr_structural)
        .sorted()
        .collect::<Vec<_>>();

    for artificial in artificial_variables {
        let row = match tableau.basis_row(artificial) {
            Some(row) => row,
            None => continue,
        };
        tableau.set_constraint_value(row, 0_f64);

        let pivot_column = (0..nr_structural)
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.column_value(row, column).abs() > eps);
        match pivot_column {
            Some(column) => tableau.bring_into_basis(artificial, column),
            None => {
                log::debug!("constraint row {} is redundant, dropping it", row);
                tableau.mark_row_redundant(row);
            },
        }

        debug_assert!(!tableau.is_in_basis(artificial));
    }
}

/// Rebuild the working matrix without the artificial columns and install the original objective.
///
/// The constraint block and the right-hand side column are moved out of the old composition and
/// into the new one; only the bottom row is newly allocated. Structural variables keep their
/// column indices, so the basis maps carry over unchanged. Finally the objective row is
/// canonicalized: for every basic variable, a multiple of its row is added so that its relative
/// cost becomes zero.
fn collapse<M: Matrix>(
    tableau: SimplexTableau<ArtificialMatrix<M>>,
    lp: &StandardForm<M>,
) -> SimplexTableau<CollapsedMatrix<M>> {
    let n = lp.nr_variables();
    let (matrix, row_to_basic, basic_to_row) = tableau.into_parts();
    let (body, _artificial_objective) = matrix.into_parts();
    let (with_identity, rhs) = body.into_parts();
    let (constraints, _identity) = with_identity.into_parts();

    let mut objective = DenseVector::zeros(n + 1);
    for column in 0..n {
        objective[column] = lp.objective()[column];
    }

    let mut matrix = RowBlock::new(ColumnBlock::new(constraints, rhs), objective.into_row());
    let objective_row = matrix.nr_rows() - 1;
    for row in 0..objective_row {
        if let Some(&variable) = row_to_basic.get(&row) {
            let factor = -matrix.get_value(objective_row, variable);
            if !factor.is_zero() {
                matrix.mul_add_rows(row, objective_row, factor);
            }
        }
    }

    SimplexTableau::new(matrix, row_to_basic, basic_to_row)
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use crate::algorithm::two_phase::phase_one::{create_artificial_tableau, FeasibilityResult, primal};
    use crate::algorithm::two_phase::RELATIVE_EPSILON;
    use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule, PivotSelection};
    use crate::data::linear_algebra::matrix::dense::DenseMatrix;
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::data::linear_program::standard_form::StandardForm;

    /// `x - y = 1` with a negated duplicate row, so that sign normalization is exercised.
    fn get_test_lp() -> StandardForm<DenseMatrix> {
        StandardForm::new(
            DenseVector::new(vec![-4.5, 3.5]),
            DenseMatrix::from_rows(vec![
                vec![1_f64, -1_f64],
                vec![-1_f64, 1_f64],
            ]),
            DenseVector::new(vec![1_f64, -1_f64]),
        )
    }

    #[test]
    fn artificial_tableau_is_canonical() {
        let tableau = create_artificial_tableau(&get_test_lp());

        assert_eq!(tableau.nr_variables(), 2 + 2);
        assert_eq!(tableau.nr_constraint_rows(), 2);
        // Row 1 was negated, so both working rows read [1, -1].
        assert_approx_eq!(tableau.column_value(1, 0), 1_f64);
        assert_approx_eq!(tableau.constraint_value(1), 1_f64);
        // The artificial variables are basic at zero cost.
        assert!(tableau.is_in_basis(2));
        assert!(tableau.is_in_basis(3));
        assert_approx_eq!(tableau.relative_cost(2), 0_f64);
        assert_approx_eq!(tableau.relative_cost(3), 0_f64);
        // The structural costs are the column sums of the normalized constraint block.
        assert_approx_eq!(tableau.relative_cost(0), 2_f64);
        assert_approx_eq!(tableau.relative_cost(1), -2_f64);
        // The objective cell carries the total artificial value.
        assert_approx_eq!(tableau.objective_function_value(), 2_f64);
    }

    #[test]
    fn feasible_problem_collapses_to_canonical_phase_two_tableau() {
        let lp = get_test_lp();
        let result = primal(&lp, &mut Bland::new());
        let tableau = match result {
            FeasibilityResult::Feasible(tableau) => tableau,
            FeasibilityResult::Infeasible => panic!("problem is feasible"),
        };

        // Only the structural variables remain.
        assert_eq!(tableau.nr_variables(), 2);
        // One of the two dependent rows was dropped.
        assert_eq!(tableau.basic_variables().count(), 1);
        // The original objective was installed and canonicalized.
        let eps = RELATIVE_EPSILON * tableau.abs_max();
        for variable in tableau.basic_variables() {
            assert!(tableau.relative_cost(variable).abs() <= eps);
        }
        // The basic feasible solution solves `x - y = 1`.
        let solution = tableau.current_bfs();
        assert_approx_eq!(solution[0] - solution[1], 1_f64);
    }

    #[test]
    fn phase_one_costs_are_nonpositive_at_optimum() {
        let lp = StandardForm::new(
            DenseVector::new(vec![2_f64, 3_f64, 4_f64]),
            DenseMatrix::from_rows(vec![
                vec![3_f64, 2_f64, 1_f64],
                vec![2_f64, 5_f64, 3_f64],
            ]),
            DenseVector::new(vec![10_f64, 15_f64]),
        );
        let mut tableau = create_artificial_tableau(&lp);
        let mut rule = Bland::new();
        loop {
            match rule.choose_pivot(&tableau) {
                PivotSelection::Pivot { leaving, entering } => {
                    tableau.bring_into_basis(leaving, entering);
                },
                _ => break,
            }
        }

        let eps = RELATIVE_EPSILON * tableau.abs_max();
        for variable in 0..3 {
            assert!(tableau.relative_cost(variable) <= eps);
        }
        assert_approx_eq!(tableau.objective_function_value(), 0_f64);
    }

    #[test]
    fn infeasible_problem_is_recognized() {
        let lp = StandardForm::new(
            DenseVector::new(vec![4.5, 3.5]),
            DenseMatrix::from_rows(vec![
                vec![1_f64, -1_f64],
                vec![2_f64, -2_f64],
            ]),
            DenseVector::new(vec![1_f64, 1.5]),
        );
        assert!(matches!(primal(&lp, &mut Bland::new()), FeasibilityResult::Infeasible));
    }
}
