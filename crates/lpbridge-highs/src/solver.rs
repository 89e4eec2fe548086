//! HiGHS solver implementation.

use crate::engine::Engine;
use crate::error::SolveError;
use crate::ffi::{HighsHandle, highs_version};
use crate::input::HighsInput;
use crate::options::apply_options;
use crate::solution::Solution;
use crate::status::solution_status;
use highs_sys::{kHighsStatusOk, kHighsStatusWarning};
use lpbridge_core::Model;
use lpbridge_solver::{Solve, SolveOptions};
use std::time::Instant;
use tracing::{debug, warn};

/// Solves a [`Model`] with HiGHS.
#[derive(Debug, Clone)]
pub struct Solver {
    model: Model,
}

impl Solver {
    /// Create a new solver from a Model.
    pub fn new(model: Model) -> Self {
        debug!(
            component = "solver",
            operation = "init",
            status = "success",
            variables = model.num_variables() as u64,
            constraints = model.num_constraints() as u64,
            "Creating solver from model"
        );
        Solver { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Solve the model once with `options`.
    ///
    /// # Errors
    ///
    /// See [`solve_model`].
    pub fn solve_with(&self, options: &SolveOptions) -> Result<Solution, SolveError> {
        solve_model(&self.model, options)
    }
}

impl Solve for Solver {
    type Solution = Solution;
    type Error = SolveError;

    fn solve(&mut self, options: &SolveOptions) -> Result<Self::Solution, Self::Error> {
        self.solve_with(options)
    }
}

/// Solve `model` with a fresh HiGHS instance.
///
/// A model without variables is optimal without touching HiGHS. An
/// unavailable engine, or a run that ends in neither OK nor warning, yields an
/// unknown-status solution rather than an error.
///
/// # Errors
///
/// Returns `MixedIntegerQuadratic` before any engine call for quadratic
/// objectives over integer variables, `OptionRejected` when HiGHS refuses an
/// option, and `ModelLoadRejected` or `SolutionRetrievalFailed` (carrying an
/// unknown-status solution) when loading or reading back fails.
pub fn solve_model(model: &Model, options: &SolveOptions) -> Result<Solution, SolveError> {
    solve_model_with(model, options, HighsHandle::create)
}

/// Solve `model` on the engine returned by `create`.
///
/// `create` is only called once the model has variables and passes the
/// MIQP check. The engine is dropped before this returns on every path.
///
/// # Errors
///
/// Same as [`solve_model`].
pub fn solve_model_with<E, F>(
    model: &Model,
    options: &SolveOptions,
    create: F,
) -> Result<Solution, SolveError>
where
    E: Engine,
    F: FnOnce() -> Option<E>,
{
    let start = Instant::now();

    if model.num_variables() == 0 {
        debug!(
            component = "solver",
            operation = "solve",
            status = "success",
            "Model has no variables; returning empty optimal solution"
        );
        return Ok(Solution::empty_optimal(start.elapsed()));
    }

    if model.objective().is_quadratic() && model.has_integer_variables() {
        warn!(
            component = "solver",
            operation = "solve",
            status = "error",
            "Mixed integer quadratic programs are not supported"
        );
        return Err(SolveError::MixedIntegerQuadratic);
    }

    let Some(mut handle) = create() else {
        warn!(
            component = "solver",
            operation = "create_handle",
            status = "error",
            "HiGHS engine unavailable"
        );
        return Ok(Solution::unknown(start.elapsed()));
    };

    debug!(
        component = "solver",
        operation = "solve",
        status = "started",
        highs_version = highs_version().as_deref().unwrap_or("unknown"),
        variables = model.num_variables() as u64,
        constraints = model.num_constraints() as u64,
        "Starting HiGHS solve"
    );

    let input = HighsInput::assemble(model, handle.infinity())?;
    apply_options(&mut handle, options, input.is_integer())?;

    let pass_status = handle.pass_model(&input);
    if pass_status != kHighsStatusOk {
        warn!(
            component = "solver",
            operation = "pass_model",
            status = "error",
            status_code = pass_status,
            "HiGHS rejected the model"
        );
        return Err(SolveError::ModelLoadRejected {
            solution: Box::new(Solution::unknown(start.elapsed())),
        });
    }

    let run_status = handle.run();
    if run_status != kHighsStatusOk && run_status != kHighsStatusWarning {
        warn!(
            component = "solver",
            operation = "run",
            status = "error",
            status_code = run_status,
            "HiGHS run did not succeed"
        );
        return Ok(Solution::unknown(start.elapsed()));
    }

    let model_status = handle.model_status();
    let snapshot = match handle.solution(input.num_columns(), input.num_rows()) {
        Ok(snapshot) => snapshot,
        Err(status_code) => {
            warn!(
                component = "solver",
                operation = "get_solution",
                status = "error",
                status_code,
                "HiGHS failed to report the solution"
            );
            return Err(SolveError::SolutionRetrievalFailed {
                solution: Box::new(Solution::unknown(start.elapsed())),
            });
        }
    };
    let objective_value = handle.objective_value();
    drop(handle);

    let solution = Solution {
        values: snapshot.into_col_values(),
        status: solution_status(model_status),
        objective_value,
        runtime: start.elapsed(),
    };
    debug!(
        component = "solver",
        operation = "solve",
        status = "success",
        solution_status = solution.status.as_str(),
        model_status_code = model_status,
        objective_value,
        runtime_ms = solution.runtime.as_secs_f64() * 1000.0,
        "HiGHS solve finished"
    );
    Ok(solution)
}
