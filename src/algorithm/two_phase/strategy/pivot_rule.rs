//! # Pivot rules
//!
//! During the Simplex method, one needs to decide how to move from basic solution to basic
//! solution. The pivot rule describes that behavior: it selects the variable entering the basis
//! and, through the shared minimum-ratio test, the variable leaving it.
use crate::algorithm::two_phase::tableau::SimplexTableau;
use crate::data::linear_algebra::matrix::Matrix;

/// The outcome of a pivot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotSelection {
    /// A legal pivot was found; the algorithm has work left to do.
    Pivot {
        /// The basic variable leaving the basis.
        leaving: usize,
        /// The non-basic variable entering the basis.
        entering: usize,
    },
    /// No non-basic variable has a positive relative cost; the current solution is optimal.
    Optimal,
    /// An improving column exists along which the objective grows without bound.
    Unbounded,
}

/// Deciding how to pivot.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the next pivot, or conclude that the tableau is optimal or unbounded.
    fn choose_pivot<M: Matrix>(&mut self, tableau: &SimplexTableau<M>) -> PivotSelection;
}

/// Bland's anti-cycling rule.
///
/// Both the entering and the leaving variable are the candidates with the smallest index. This
/// makes every pivot sequence finite, even on degenerate problems.
pub struct Bland;

impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn choose_pivot<M: Matrix>(&mut self, tableau: &SimplexTableau<M>) -> PivotSelection {
        let entering = (0..tableau.nr_variables())
            .find(|&variable| !tableau.is_in_basis(variable) && tableau.relative_cost(variable) > 0_f64);
        let entering = match entering {
            Some(variable) => variable,
            None => return PivotSelection::Optimal,
        };

        // Among the rows attaining the minimum ratio, the one whose basic variable has the
        // smallest index preserves the anti-cycling property.
        let leaving = minimum_ratio_rows(tableau, entering)
            .into_iter()
            .filter_map(|row| tableau.basic_variable(row))
            .min();
        match leaving {
            Some(leaving) => PivotSelection::Pivot { leaving, entering },
            None => PivotSelection::Unbounded,
        }
    }
}

/// The greedy largest-coefficient rule.
///
/// Enters the non-basic variable with the largest positive relative cost, breaking ties towards
/// the smallest index; leaves by minimum ratio with ties towards the smallest row index. Usually
/// takes fewer iterations than Bland's rule, but termination is not guaranteed on degenerate
/// problems.
pub struct LargestCoefficient;

impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn choose_pivot<M: Matrix>(&mut self, tableau: &SimplexTableau<M>) -> PivotSelection {
        let mut entering: Option<(usize, f64)> = None;
        for variable in 0..tableau.nr_variables() {
            if tableau.is_in_basis(variable) {
                continue;
            }
            let cost = tableau.relative_cost(variable);
            if cost > 0_f64 && entering.map_or(true, |(_, best)| cost > best) {
                entering = Some((variable, cost));
            }
        }
        let entering = match entering {
            Some((variable, _)) => variable,
            None => return PivotSelection::Optimal,
        };

        let leaving = minimum_ratio_rows(tableau, entering)
            .first()
            .and_then(|&row| tableau.basic_variable(row));
        match leaving {
            Some(leaving) => PivotSelection::Pivot { leaving, entering },
            None => PivotSelection::Unbounded,
        }
    }
}

/// The rows on which the entering column could be pivoted without losing feasibility.
///
/// Visits only rows that hold a basic variable, so rows dropped as redundant are never selected.
/// Returns all rows attaining the minimum of `constraint_value / column_value` over the rows with
/// a strictly positive column value, in ascending row order; empty when no such row exists and
/// the objective is unbounded along this column.
fn minimum_ratio_rows<M: Matrix>(tableau: &SimplexTableau<M>, entering: usize) -> Vec<usize> {
    let mut rows = Vec::new();
    let mut minimum = f64::INFINITY;
    for row in 0..tableau.nr_constraint_rows() {
        if tableau.basic_variable(row).is_none() {
            continue;
        }

        let coefficient = tableau.column_value(row, entering);
        if coefficient > 0_f64 {
            let ratio = tableau.constraint_value(row) / coefficient;
            if ratio < minimum {
                minimum = ratio;
                rows.clear();
                rows.push(row);
            } else if ratio == minimum {
                rows.push(row);
            }
        }
    }

    rows
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::algorithm::two_phase::strategy::pivot_rule::{
        Bland, LargestCoefficient, minimum_ratio_rows, PivotRule, PivotSelection,
    };
    use crate::algorithm::two_phase::tableau::SimplexTableau;
    use crate::data::linear_algebra::matrix::dense::DenseMatrix;

    /// Two constraint rows with `x2` and `x3` basic; `x1` has the largest relative cost, `x0` the
    /// smallest index among the profitable columns.
    ///
    ///     [ 1   2  1  0  4 ]
    ///     [ 3   1  0  1  6 ]
    ///     [ 2   5  0  0  0 ]
    fn get_test_tableau() -> SimplexTableau<DenseMatrix> {
        let matrix = DenseMatrix::from_rows(vec![
            vec![1_f64, 2_f64, 1_f64, 0_f64, 4_f64],
            vec![3_f64, 1_f64, 0_f64, 1_f64, 6_f64],
            vec![2_f64, 5_f64, 0_f64, 0_f64, 0_f64],
        ]);
        let row_to_basic: HashMap<_, _> = [(0, 2), (1, 3)].into_iter().collect();
        let basic_to_row: HashMap<_, _> = [(2, 0), (3, 1)].into_iter().collect();

        SimplexTableau::new(matrix, row_to_basic, basic_to_row)
    }

    #[test]
    fn bland_prefers_smallest_index() {
        let tableau = get_test_tableau();
        let selection = Bland::new().choose_pivot(&tableau);
        // Column 0: ratios 4/1 and 6/3, row 1 wins, where x3 is basic.
        assert_eq!(selection, PivotSelection::Pivot { leaving: 3, entering: 0 });
    }

    #[test]
    fn largest_coefficient_prefers_best_cost() {
        let tableau = get_test_tableau();
        let selection = LargestCoefficient::new().choose_pivot(&tableau);
        // Column 1: ratios 4/2 and 6/1, row 0 wins, where x2 is basic.
        assert_eq!(selection, PivotSelection::Pivot { leaving: 2, entering: 1 });
    }

    #[test]
    fn optimal_when_no_positive_cost() {
        let matrix = DenseMatrix::from_rows(vec![
            vec![1_f64, 2_f64, 1_f64, 0_f64, 4_f64],
            vec![3_f64, 1_f64, 0_f64, 1_f64, 6_f64],
            vec![-2_f64, -5_f64, 0_f64, 0_f64, -7_f64],
        ]);
        let row_to_basic: HashMap<_, _> = [(0, 2), (1, 3)].into_iter().collect();
        let basic_to_row: HashMap<_, _> = [(2, 0), (3, 1)].into_iter().collect();
        let tableau = SimplexTableau::new(matrix, row_to_basic, basic_to_row);

        assert_eq!(Bland::new().choose_pivot(&tableau), PivotSelection::Optimal);
        assert_eq!(LargestCoefficient::new().choose_pivot(&tableau), PivotSelection::Optimal);
    }

    #[test]
    fn unbounded_when_no_positive_column_entry() {
        let matrix = DenseMatrix::from_rows(vec![
            vec![-1_f64, 1_f64, 2_f64],
            vec![3_f64, 0_f64, 0_f64],
        ]);
        let row_to_basic: HashMap<_, _> = [(0, 1)].into_iter().collect();
        let basic_to_row: HashMap<_, _> = [(1, 0)].into_iter().collect();
        let tableau = SimplexTableau::new(matrix, row_to_basic, basic_to_row);

        assert_eq!(Bland::new().choose_pivot(&tableau), PivotSelection::Unbounded);
        assert_eq!(LargestCoefficient::new().choose_pivot(&tableau), PivotSelection::Unbounded);
    }

    #[test]
    fn minimum_ratio_reports_all_tied_rows() {
        let matrix = DenseMatrix::from_rows(vec![
            vec![1_f64, 1_f64, 0_f64, 2_f64],
            vec![2_f64, 0_f64, 1_f64, 4_f64],
            vec![1_f64, 0_f64, 0_f64, 0_f64],
        ]);
        let row_to_basic: HashMap<_, _> = [(0, 1), (1, 2)].into_iter().collect();
        let basic_to_row: HashMap<_, _> = [(1, 0), (2, 1)].into_iter().collect();
        let tableau = SimplexTableau::new(matrix, row_to_basic, basic_to_row);

        assert_eq!(minimum_ratio_rows(&tableau, 0), vec![0, 1]);
    }
}
