//! Assembled input for a single `Highs_passModel` call.

use crate::columns::ColumnArrays;
use crate::error::SolveError;
use crate::hessian::HessianArrays;
use crate::rows::RowArrays;
use highs_sys::HighsInt;
use lpbridge_core::{Model, Sense};
use tracing::debug;

/// Every buffer HiGHS reads when a model is passed.
///
/// Built fresh for each solve and kept alive until the last engine call that
/// refers to it has returned.
#[derive(Debug, Clone, PartialEq)]
pub struct HighsInput {
    pub columns: ColumnArrays,
    pub rows: RowArrays,
    pub hessian: HessianArrays,
    pub sense: Sense,
}

impl HighsInput {
    /// Assemble the arrays for `model`.
    ///
    /// `infinity` must be the value reported by `Highs_getInfinity`.
    ///
    /// # Errors
    ///
    /// Returns `ModelTooLarge` when a dimension exceeds the `HighsInt` range
    /// and `InvalidInputValue` when a NaN, or an infinite coefficient, would
    /// reach an engine buffer.
    pub fn assemble(model: &Model, infinity: f64) -> Result<Self, SolveError> {
        ensure_index_range("columns", model.num_variables())?;
        let num_nonzeros: usize = model
            .constraints()
            .map(|(_, constraint)| constraint.terms.len())
            .sum();
        ensure_index_range("constraint nonzeros", num_nonzeros)?;
        ensure_index_range("quadratic terms", model.objective().quadratic_terms.len())?;

        let input = HighsInput {
            columns: ColumnArrays::build(model),
            rows: RowArrays::build(model, infinity),
            hessian: HessianArrays::build(model.num_variables(), &model.objective().quadratic_terms),
            sense: model.objective().sense,
        };
        input.validate()?;

        debug!(
            component = "highs",
            operation = "assemble_input",
            status = "success",
            num_columns = input.num_columns(),
            num_rows = input.num_rows(),
            num_nonzeros = input.rows.num_nonzeros(),
            num_quadratic_nonzeros = input.hessian.num_nonzeros(),
            is_integer = input.is_integer(),
            is_quadratic = input.is_quadratic(),
            "Assembled HiGHS input"
        );
        Ok(input)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_integer(&self) -> bool {
        self.columns.is_integer()
    }

    pub fn is_quadratic(&self) -> bool {
        self.hessian.is_quadratic()
    }

    fn validate(&self) -> Result<(), SolveError> {
        ensure_finite("objective coefficient", &self.columns.cost)?;
        ensure_not_nan("column lower bound", &self.columns.lower)?;
        ensure_not_nan("column upper bound", &self.columns.upper)?;
        ensure_not_nan("row lower bound", &self.rows.lower)?;
        ensure_not_nan("row upper bound", &self.rows.upper)?;
        ensure_finite("constraint coefficient", &self.rows.value)?;
        ensure_finite("quadratic coefficient", &self.hessian.value)?;
        Ok(())
    }
}

fn ensure_index_range(dimension: &'static str, count: usize) -> Result<(), SolveError> {
    if HighsInt::try_from(count).is_err() {
        return Err(SolveError::ModelTooLarge { dimension, count });
    }
    Ok(())
}

fn ensure_not_nan(field: &'static str, values: &[f64]) -> Result<(), SolveError> {
    match values.iter().position(|value| value.is_nan()) {
        Some(index) => Err(SolveError::InvalidInputValue {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn ensure_finite(field: &'static str, values: &[f64]) -> Result<(), SolveError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(SolveError::InvalidInputValue {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
