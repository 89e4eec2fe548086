//! Per-column arrays: cost, bounds and integrality.

use highs_sys::{HighsInt, kHighsVarTypeContinuous, kHighsVarTypeInteger};
use lpbridge_core::Model;
use tracing::trace;

/// Column data in the layout `Highs_passModel` reads.
///
/// All four vectors have one entry per model variable, indexed by the
/// variable's dense index.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnArrays {
    pub cost: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub integrality: Vec<HighsInt>,
}

impl ColumnArrays {
    /// Build column arrays from the model's variables and linear objective.
    ///
    /// Bounds are copied verbatim, infinities included. A variable with
    /// several objective terms keeps the last one.
    pub fn build(model: &Model) -> Self {
        let num_columns = model.num_variables();
        let mut columns = ColumnArrays {
            cost: vec![0.0; num_columns],
            lower: Vec::with_capacity(num_columns),
            upper: Vec::with_capacity(num_columns),
            integrality: Vec::with_capacity(num_columns),
        };

        for (_, variable) in model.variables() {
            columns.lower.push(variable.bounds.lower);
            columns.upper.push(variable.bounds.upper);
            columns.integrality.push(if variable.is_integral() {
                kHighsVarTypeInteger
            } else {
                kHighsVarTypeContinuous
            });
        }

        for term in &model.objective().terms {
            if let Some(slot) = columns.cost.get_mut(term.variable.index()) {
                *slot = term.coefficient;
            }
        }

        trace!(
            component = "highs",
            operation = "build_columns",
            status = "success",
            num_columns,
            is_integer = columns.is_integer(),
            "Built column arrays"
        );
        columns
    }

    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }

    /// True when at least one column is integer.
    pub fn is_integer(&self) -> bool {
        self.integrality.contains(&kHighsVarTypeInteger)
    }
}
