//! # Algorithms
use crate::data::linear_algebra::vector::DenseVector;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResult {
    /// The feasible region is empty.
    Infeasible,
    /// An optimal basic feasible solution, one value per variable of the original problem.
    FiniteOptimum(DenseVector),
    /// The objective can be made arbitrarily large along some feasible ray.
    Unbounded,
}
