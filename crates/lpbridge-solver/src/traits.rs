//! Solver traits for abstraction over different solver backends.

use crate::{SolutionStatus, SolveOptions};
use std::time::Duration;

/// Trait for accessing solution data from a solver.
pub trait SolutionView {
    /// Get the objective value of the solution.
    fn objective_value(&self) -> f64;

    /// Get the terminal status.
    fn status(&self) -> SolutionStatus;

    /// Get the value of the variable at `index`.
    ///
    /// Out-of-range indices yield `f64::MAX` rather than failing.
    fn value(&self, index: usize) -> f64 {
        self.get_value(index).unwrap_or(f64::MAX)
    }

    /// Get the value of the variable at `index`, if present.
    fn get_value(&self, index: usize) -> Option<f64> {
        self.values().get(index).copied()
    }

    /// Get all variable values as a slice.
    fn values(&self) -> &[f64];

    /// Name of the engine that produced the solution.
    fn provider(&self) -> &'static str;

    /// Wall-clock time spent in the solve call.
    fn runtime(&self) -> Duration;

    fn has_values(&self) -> bool {
        self.status().has_values()
    }

    /// Check if the solution is optimal.
    fn is_optimal(&self) -> bool {
        self.status().is_optimal()
    }

    /// Check if the solution is infeasible.
    fn is_infeasible(&self) -> bool {
        self.status().is_infeasible()
    }

    /// Check if the solution is unbounded.
    fn is_unbounded(&self) -> bool {
        self.status().is_unbounded()
    }

    /// Check if the solver stopped on its time limit.
    fn is_time_out(&self) -> bool {
        self.status().is_time_out()
    }

    /// Engines that cannot report a sub-optimal stop keep the default.
    fn is_sub_optimal(&self) -> bool {
        false
    }

    fn is_numerical_failure(&self) -> bool {
        false
    }
}

/// Trait for solver implementations.
///
/// A backend owns whatever it needs to solve one model and hands back a
/// [`SolutionView`].
pub trait Solve {
    /// The solution type returned by this solver.
    type Solution: SolutionView;

    /// The error type returned by this solver.
    type Error: std::error::Error;

    /// Solve with the given options.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the problem class is unsupported, an option
    /// is rejected, or the engine fails to load the model or report results.
    fn solve(&mut self, options: &SolveOptions) -> Result<Self::Solution, Self::Error>;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    struct FixtureSolution {
        status: SolutionStatus,
        values: Vec<f64>,
    }

    impl SolutionView for FixtureSolution {
        fn objective_value(&self) -> f64 {
            0.0
        }

        fn status(&self) -> SolutionStatus {
            self.status
        }

        fn values(&self) -> &[f64] {
            &self.values
        }

        fn provider(&self) -> &'static str {
            "fixture"
        }

        fn runtime(&self) -> Duration {
            Duration::ZERO
        }
    }

    #[test]
    fn test_solution_view_default_predicates() {
        let solution = FixtureSolution {
            status: SolutionStatus::Optimal,
            values: vec![1.5],
        };
        assert!(solution.has_values());
        assert!(solution.is_optimal());
        assert!(!solution.is_infeasible());
        assert!(!solution.is_unbounded());
        assert!(!solution.is_time_out());
        assert!(!solution.is_sub_optimal());
        assert!(!solution.is_numerical_failure());
    }

    #[test]
    fn test_solution_view_unbounded_or_infeasible() {
        let solution = FixtureSolution {
            status: SolutionStatus::UnboundedOrInfeasible,
            values: vec![],
        };
        assert!(solution.is_infeasible());
        assert!(solution.is_unbounded());
        assert!(!solution.has_values());
    }

    #[test]
    fn test_value_out_of_range_is_max() {
        let solution = FixtureSolution {
            status: SolutionStatus::Optimal,
            values: vec![2.0, 3.0],
        };
        assert_eq!(solution.value(1), 3.0);
        assert_eq!(solution.get_value(1), Some(3.0));
        assert_eq!(solution.value(2), f64::MAX);
        assert_eq!(solution.get_value(2), None);
    }
}
