//! # A linear program solver.
//!
//! Linear programs in standard form,
//!
//! ```text
//! maximize c' x  subject to  A x = b, x >= 0
//! ```
//!
//! are solved using the two-phase Simplex method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. The constraint matrix may be
//! dense, sparse or composed out of blocks of either; the solver only interacts with it through
//! the `Matrix` trait.
//!
//! ```
//! use linprog::{Bland, DenseMatrix, DenseVector, OptimizationResult, solve, StandardForm};
//!
//! // maximize 2x + 3y + 4z  subject to  3x + 2y + z = 10, 2x + 5y + 3z = 15
//! let lp = StandardForm::new(
//!     DenseVector::new(vec![2.0, 3.0, 4.0]),
//!     DenseMatrix::from_rows(vec![
//!         vec![3.0, 2.0, 1.0],
//!         vec![2.0, 5.0, 3.0],
//!     ]),
//!     DenseVector::new(vec![10.0, 15.0]),
//! );
//! match solve::<_, Bland>(&lp) {
//!     OptimizationResult::FiniteOptimum(solution) => assert!((solution[0] - 15.0 / 7.0).abs() < 1e-10),
//!     _ => unreachable!(),
//! }
//! ```
pub mod algorithm;
pub mod data;

pub use algorithm::OptimizationResult;
pub use algorithm::two_phase::{RELATIVE_EPSILON, solve};
pub use algorithm::two_phase::strategy::pivot_rule::{Bland, LargestCoefficient, PivotRule, PivotSelection};
pub use algorithm::two_phase::tableau::SimplexTableau;
pub use data::linear_algebra::matrix::{ColumnBlock, DenseMatrix, Matrix, RowBlock, SparseMatrix};
pub use data::linear_algebra::vector::DenseVector;
pub use data::linear_program::standard_form::StandardForm;
