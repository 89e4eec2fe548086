//! Constraint matrix in compressed sparse row (CSR) form.

use highs_sys::HighsInt;
use lpbridge_core::{ConstraintSense, Model};
use tracing::trace;

/// Row bounds plus the CSR triple for the constraint matrix.
///
/// `start` has one entry per row. Constraints without terms contribute no
/// row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowArrays {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub start: Vec<HighsInt>,
    pub index: Vec<HighsInt>,
    pub value: Vec<f64>,
}

impl RowArrays {
    /// Build rows from the model's constraints in insertion order.
    ///
    /// `infinity` is the engine's sentinel and closes the open side of
    /// inequality rows. Callers must have checked that the nonzero count and
    /// the variable count fit in a `HighsInt`.
    pub fn build(model: &Model, infinity: f64) -> Self {
        let constraints: Vec<_> = model
            .constraints()
            .map(|(_, constraint)| constraint)
            .filter(|constraint| !constraint.terms.is_empty())
            .collect();
        let num_nonzeros: usize = constraints.iter().map(|c| c.terms.len()).sum();

        let mut rows = RowArrays {
            lower: Vec::with_capacity(constraints.len()),
            upper: Vec::with_capacity(constraints.len()),
            start: Vec::with_capacity(constraints.len()),
            index: Vec::with_capacity(num_nonzeros),
            value: Vec::with_capacity(num_nonzeros),
        };

        let mut cursor: HighsInt = 0;
        for constraint in constraints {
            rows.start.push(cursor);
            let (lower, upper) = row_bounds(constraint.sense, constraint.rhs, infinity);
            rows.lower.push(lower);
            rows.upper.push(upper);
            for term in &constraint.terms {
                rows.index.push(term.variable.index() as HighsInt);
                rows.value.push(term.coefficient);
                cursor += 1;
            }
        }

        trace!(
            component = "highs",
            operation = "build_rows",
            status = "success",
            num_rows = rows.len(),
            num_nonzeros,
            "Built constraint matrix"
        );
        rows
    }

    /// Number of rows, i.e. constraints with at least one term.
    pub fn len(&self) -> usize {
        self.start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    pub fn num_nonzeros(&self) -> usize {
        self.value.len()
    }
}

/// Row bound pair for `terms <sense> rhs`.
pub fn row_bounds(sense: ConstraintSense, rhs: f64, infinity: f64) -> (f64, f64) {
    match sense {
        ConstraintSense::LessThanOrEqual => (-infinity, rhs),
        ConstraintSense::Equal => (rhs, rhs),
        ConstraintSense::GreaterThanOrEqual => (rhs, infinity),
    }
}
