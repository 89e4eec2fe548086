//! Solution type and trait implementations.

use lpbridge_solver::{SolutionStatus, SolutionView};
use std::time::Duration;

/// Provider name reported by HiGHS solutions.
pub const PROVIDER: &str = "HiGHS";

/// Solution from HiGHS solver
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Column values as reported by `Highs_getSolution`
    pub(crate) values: Vec<f64>,
    pub(crate) status: SolutionStatus,
    pub(crate) objective_value: f64,
    /// Wall-clock time from the start of the solve call
    pub(crate) runtime: Duration,
}

impl Solution {
    /// A solution with no values and unknown status.
    pub fn unknown(runtime: Duration) -> Self {
        Solution {
            values: Vec::new(),
            status: SolutionStatus::Unknown,
            objective_value: 0.0,
            runtime,
        }
    }

    /// The trivially optimal solution of a model without variables.
    pub(crate) fn empty_optimal(runtime: Duration) -> Self {
        Solution {
            status: SolutionStatus::Optimal,
            ..Solution::unknown(runtime)
        }
    }
}

impl SolutionView for Solution {
    fn objective_value(&self) -> f64 {
        self.objective_value
    }

    fn status(&self) -> SolutionStatus {
        self.status
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn runtime(&self) -> Duration {
        self.runtime
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_status_helpers() {
        let solution = Solution {
            values: vec![1.0, 2.0],
            status: SolutionStatus::Optimal,
            objective_value: 10.0,
            runtime: Duration::from_millis(100),
        };

        assert!(solution.is_optimal());
        assert!(solution.has_values());
        assert!(!solution.is_infeasible());
        assert!(!solution.is_unbounded());
        assert!(!solution.is_time_out());
        assert_eq!(solution.objective_value(), 10.0);
        assert_eq!(solution.provider(), "HiGHS");
    }

    #[test]
    fn test_solution_value_lookup() {
        let solution = Solution {
            values: vec![1.0, 2.0, 3.0],
            status: SolutionStatus::Optimal,
            objective_value: 6.0,
            runtime: Duration::ZERO,
        };

        assert_eq!(solution.value(0), 1.0);
        assert_eq!(solution.value(2), 3.0);
        assert_eq!(solution.value(3), f64::MAX);
        assert_eq!(solution.get_value(3), None);
    }

    #[test]
    fn test_unknown_solution() {
        let solution = Solution::unknown(Duration::from_millis(5));
        assert_eq!(solution.status(), SolutionStatus::Unknown);
        assert!(!solution.has_values());
        assert!(solution.values().is_empty());
        assert_eq!(solution.runtime(), Duration::from_millis(5));
    }

    #[test]
    fn test_empty_optimal_solution() {
        let solution = Solution::empty_optimal(Duration::ZERO);
        assert!(solution.is_optimal());
        assert!(solution.values().is_empty());
        assert_eq!(solution.value(0), f64::MAX);
    }
}
