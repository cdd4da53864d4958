//! # The two-phase Simplex method
//!
//! Linear programs in standard form are solved in two phases. The first phase wraps the problem
//! with artificial variables and minimizes their sum: either a basic feasible solution of the
//! original problem appears, or the problem is infeasible. The second phase starts from that
//! solution and maximizes the original objective, ending in an optimum or an unbounded ray.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_program::standard_form::StandardForm;

pub(crate) mod phase_one;
pub(crate) mod phase_two;

pub mod strategy;
pub mod tableau;

/// Tolerances are this fraction of the largest absolute value in the working matrix.
///
/// Used to decide whether a remaining artificial cost means infeasibility, and whether a column
/// entry is distinct enough from zero to pivot on during the phase transition.
pub const RELATIVE_EPSILON: f64 = 1e-8;

/// Solve a linear program with the two-phase Simplex method.
///
/// The pivot rule is chosen through the type parameter; a single instance of it drives both
/// phases. `Bland` guarantees termination, `LargestCoefficient` is usually faster but may cycle
/// on degenerate problems.
///
/// # Arguments
///
/// * `lp`: Problem to solve.
///
/// # Return value
///
/// An optimal solution vector in the problem's variable order, or the determination that the
/// problem is infeasible or unbounded.
pub fn solve<M: Matrix, PR: PivotRule>(lp: &StandardForm<M>) -> OptimizationResult {
    log::info!(
        "solving a linear program with {} variables and {} constraints",
        lp.nr_variables(), lp.nr_constraints(),
    );

    let mut rule = PR::new();
    match phase_one::primal(lp, &mut rule) {
        FeasibilityResult::Feasible(mut tableau) => phase_two::primal(&mut tableau, &mut rule),
        FeasibilityResult::Infeasible => OptimizationResult::Infeasible,
    }
}
