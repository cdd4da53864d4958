//! # Phase two
//!
//! Improving a basic feasible solution until it is optimal, or until an unbounded ray is found.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, PivotSelection};
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, SimplexTableau};
use crate::data::linear_algebra::matrix::Matrix;

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// The tableau must be in canonical form and primal feasible when this method is called; the
/// first phase establishes both. It cannot report infeasibility.
pub(crate) fn primal<M: Matrix, PR: PivotRule>(
    tableau: &mut SimplexTableau<M>,
    rule: &mut PR,
) -> OptimizationResult {
    let mut nr_iterations = 0_usize;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.choose_pivot(tableau) {
            PivotSelection::Pivot { leaving, entering } => {
                tableau.bring_into_basis(leaving, entering);
                nr_iterations += 1;
            },
            PivotSelection::Optimal => {
                log::debug!("optimum reached after {} pivots", nr_iterations);
                break OptimizationResult::FiniteOptimum(tableau.current_bfs());
            },
            PivotSelection::Unbounded => {
                log::debug!("unbounded ray found after {} pivots", nr_iterations);
                break OptimizationResult::Unbounded;
            },
        }
    }
}
