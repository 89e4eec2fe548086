//! Errors returned by the HiGHS backend.

use crate::solution::Solution;
use lpbridge_solver::OptionKind;
use std::fmt;

/// Error type for HiGHS solve operations.
///
/// Load and retrieval failures carry the unknown-status solution that the
/// solve produced, recoverable with [`SolveError::into_solution`].
#[derive(Debug, Clone)]
pub enum SolveError {
    /// Quadratic objective combined with integer variables.
    MixedIntegerQuadratic,
    /// HiGHS refused a named option (unknown name or wrong type).
    OptionRejected {
        option: String,
        value: String,
        kind: OptionKind,
    },
    /// `Highs_passModel` refused the assembled arrays.
    ModelLoadRejected { solution: Box<Solution> },
    /// `Highs_getSolution` failed after a successful run.
    SolutionRetrievalFailed { solution: Box<Solution> },
    /// A NaN or infinite value would have been written to an engine buffer.
    InvalidInputValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
    /// A dimension does not fit in a `HighsInt`.
    ModelTooLarge {
        dimension: &'static str,
        count: usize,
    },
}

impl SolveError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::MixedIntegerQuadratic => "HIGHS_MIQP_UNSUPPORTED",
            SolveError::OptionRejected { .. } => "HIGHS_OPTION_REJECTED",
            SolveError::ModelLoadRejected { .. } => "HIGHS_MODEL_LOAD_FAILED",
            SolveError::SolutionRetrievalFailed { .. } => "HIGHS_SOLUTION_RETRIEVAL_FAILED",
            SolveError::InvalidInputValue { .. } => "HIGHS_INVALID_INPUT_VALUE",
            SolveError::ModelTooLarge { .. } => "HIGHS_MODEL_TOO_LARGE",
        }
    }

    /// Take the unknown-status solution attached to load and retrieval
    /// failures.
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveError::ModelLoadRejected { solution }
            | SolveError::SolutionRetrievalFailed { solution } => Some(*solution),
            _ => None,
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::MixedIntegerQuadratic => write!(
                f,
                "[{}] HiGHS does not support mixed integer quadratic programs",
                self.code()
            ),
            SolveError::OptionRejected {
                option,
                value,
                kind,
            } => write!(
                f,
                "[{}] HiGHS failed setting {} option {} to value {}",
                self.code(),
                kind.as_str(),
                option,
                value
            ),
            SolveError::ModelLoadRejected { .. } => {
                write!(f, "[{}] HiGHS failed passing the model", self.code())
            }
            SolveError::SolutionRetrievalFailed { .. } => {
                write!(f, "[{}] HiGHS failed getting the solution", self.code())
            }
            SolveError::InvalidInputValue {
                field,
                index,
                value,
            } => write!(
                f,
                "[{}] Invalid {} at index {}: {}",
                self.code(),
                field,
                index,
                value
            ),
            SolveError::ModelTooLarge { dimension, count } => write!(
                f,
                "[{}] Number of {} ({}) exceeds the HiGHS index range",
                self.code(),
                dimension,
                count
            ),
        }
    }
}

impl std::error::Error for SolveError {}
