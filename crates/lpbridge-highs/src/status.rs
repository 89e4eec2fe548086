//! Model status conversion for HiGHS integration.

use highs_sys::{
    HighsInt, kHighsModelStatusInfeasible, kHighsModelStatusOptimal,
    kHighsModelStatusTimeLimit, kHighsModelStatusUnbounded,
    kHighsModelStatusUnboundedOrInfeasible,
};
use lpbridge_solver::SolutionStatus;

/// Map a `Highs_getModelStatus` code to a solution status.
///
/// Every code outside the recognized set becomes `Unknown`.
pub(crate) fn solution_status(code: HighsInt) -> SolutionStatus {
    match code {
        kHighsModelStatusOptimal => SolutionStatus::Optimal,
        kHighsModelStatusInfeasible => SolutionStatus::Infeasible,
        kHighsModelStatusUnboundedOrInfeasible => SolutionStatus::UnboundedOrInfeasible,
        kHighsModelStatusUnbounded => SolutionStatus::Unbounded,
        kHighsModelStatusTimeLimit => SolutionStatus::TimeLimit,
        _ => SolutionStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(solution_status(7), SolutionStatus::Optimal);
        assert_eq!(solution_status(8), SolutionStatus::Infeasible);
        assert_eq!(solution_status(9), SolutionStatus::UnboundedOrInfeasible);
        assert_eq!(solution_status(10), SolutionStatus::Unbounded);
        assert_eq!(solution_status(13), SolutionStatus::TimeLimit);
    }

    #[test]
    fn test_other_codes_are_unknown() {
        for code in [0, 1, 2, 11, 12, 14, 15, 16, -1] {
            assert_eq!(solution_status(code), SolutionStatus::Unknown);
        }
    }
}
