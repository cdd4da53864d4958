//! # Standard form
//!
//! A linear program in standard form:
//!
//! ```text
//! maximize c' x  subject to  A x = b, x >= 0
//! ```
//!
//! where `c` is the objective vector, `A` is the constraint matrix and `b` is the constraint
//! vector. Inequality constraints are not represented; callers convert them to equalities with
//! slack or surplus variables before building a `StandardForm`.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::DenseVector;

/// An immutable problem description.
///
/// No value requirements are imposed at construction: all-zero constraint rows and negative
/// entries in `b` are tolerated here and handled by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm<M> {
    /// The maximization objective `c`, one coefficient per variable.
    objective: DenseVector,
    /// The `m x n` constraint matrix `A`.
    constraint_matrix: M,
    /// The right-hand side `b` of length `m`.
    constraint_vector: DenseVector,
}

impl<M: Matrix> StandardForm<M> {
    /// Create a new `StandardForm` from its parts. The dimensions must agree.
    pub fn new(objective: DenseVector, constraint_matrix: M, constraint_vector: DenseVector) -> Self {
        debug_assert_eq!(constraint_matrix.nr_columns(), objective.len());
        debug_assert_eq!(constraint_matrix.nr_rows(), constraint_vector.len());

        Self {
            objective,
            constraint_matrix,
            constraint_vector,
        }
    }

    /// The number of variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// The number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraint_vector.len()
    }

    /// The objective vector `c`.
    pub fn objective(&self) -> &DenseVector {
        &self.objective
    }

    /// The constraint matrix `A`.
    pub fn constraint_matrix(&self) -> &M {
        &self.constraint_matrix
    }

    /// The constraint vector `b`.
    pub fn constraint_vector(&self) -> &DenseVector {
        &self.constraint_vector
    }
}
