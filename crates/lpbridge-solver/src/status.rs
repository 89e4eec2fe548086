//! Solution status types.

/// Terminal classification of a solve attempt.
///
/// `Unknown` covers every path that produced no usable answer: the engine was
/// unavailable, rejected the model, failed to run, or reported a status
/// outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionStatus {
    /// Optimal solution found.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Problem is unbounded or infeasible; the engine could not tell which.
    UnboundedOrInfeasible,
    /// Solver reached its time limit.
    TimeLimit,
    /// Status is unknown or the solver did not complete.
    Unknown,
}

impl SolutionStatus {
    /// Primal values are only reported for optimal solutions.
    pub fn has_values(self) -> bool {
        matches!(self, SolutionStatus::Optimal)
    }

    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolutionStatus::Optimal)
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(
            self,
            SolutionStatus::Infeasible | SolutionStatus::UnboundedOrInfeasible
        )
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(
            self,
            SolutionStatus::Unbounded | SolutionStatus::UnboundedOrInfeasible
        )
    }

    /// Check if the solver stopped on its time limit.
    pub fn is_time_out(self) -> bool {
        matches!(self, SolutionStatus::TimeLimit)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolutionStatus::Optimal => "optimal",
            SolutionStatus::Infeasible => "infeasible",
            SolutionStatus::Unbounded => "unbounded",
            SolutionStatus::UnboundedOrInfeasible => "unbounded_or_infeasible",
            SolutionStatus::TimeLimit => "time_limit",
            SolutionStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SolutionStatus; 6] = [
        SolutionStatus::Optimal,
        SolutionStatus::Infeasible,
        SolutionStatus::Unbounded,
        SolutionStatus::UnboundedOrInfeasible,
        SolutionStatus::TimeLimit,
        SolutionStatus::Unknown,
    ];

    #[test]
    fn test_only_optimal_has_values() {
        for status in ALL {
            assert_eq!(status.has_values(), status == SolutionStatus::Optimal);
        }
    }

    #[test]
    fn test_unbounded_or_infeasible_sets_both_predicates() {
        for status in ALL {
            let both = status.is_infeasible() && status.is_unbounded();
            assert_eq!(both, status == SolutionStatus::UnboundedOrInfeasible);
        }
    }

    #[test]
    fn test_unknown_sets_no_predicate() {
        let status = SolutionStatus::Unknown;
        assert!(!status.has_values());
        assert!(!status.is_optimal());
        assert!(!status.is_infeasible());
        assert!(!status.is_unbounded());
        assert!(!status.is_time_out());
    }

    #[test]
    fn test_time_limit_is_only_time_out() {
        assert!(SolutionStatus::TimeLimit.is_time_out());
        assert!(!SolutionStatus::TimeLimit.has_values());
        assert!(!SolutionStatus::Optimal.is_time_out());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", SolutionStatus::Optimal), "optimal");
        assert_eq!(
            SolutionStatus::UnboundedOrInfeasible.to_string(),
            "unbounded_or_infeasible"
        );
    }
}
