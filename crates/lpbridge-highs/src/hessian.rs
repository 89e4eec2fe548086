//! Triangular Hessian in compressed sparse column (CSC) form.
//!
//! Quadratic terms read as `coefficient * x_i * x_j`. HiGHS minimizes
//! `0.5 * x'Qx`, so diagonal entries are doubled on the way in.

use highs_sys::HighsInt;
use lpbridge_core::QuadraticTerm;
use std::collections::BTreeMap;
use tracing::trace;

/// CSC triple for the Hessian.
///
/// `start` has `num_columns + 1` entries; the last one equals the number of
/// stored entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HessianArrays {
    pub start: Vec<HighsInt>,
    pub index: Vec<HighsInt>,
    pub value: Vec<f64>,
}

impl HessianArrays {
    /// Build the Hessian for `num_columns` variables.
    ///
    /// A term's first variable selects the column and its second variable
    /// the row. Terms on the same (column, row) pair are summed; `(i, j)` and
    /// `(j, i)` stay separate entries.
    pub fn build(num_columns: usize, terms: &[QuadraticTerm]) -> Self {
        let mut grouped: BTreeMap<usize, BTreeMap<usize, f64>> = BTreeMap::new();
        for term in terms {
            *grouped
                .entry(term.first.index())
                .or_default()
                .entry(term.second.index())
                .or_insert(0.0) += term.coefficient;
        }

        let mut hessian = HessianArrays {
            start: Vec::with_capacity(num_columns + 1),
            index: Vec::new(),
            value: Vec::new(),
        };
        for column in 0..num_columns {
            hessian.start.push(hessian.index.len() as HighsInt);
            let Some(entries) = grouped.get(&column) else {
                continue;
            };
            // BTreeMap iteration keeps rows ascending within the column.
            for (&row, &coefficient) in entries {
                hessian.index.push(row as HighsInt);
                hessian.value.push(if row == column {
                    2.0 * coefficient
                } else {
                    coefficient
                });
            }
        }
        hessian.start.push(hessian.index.len() as HighsInt);

        trace!(
            component = "highs",
            operation = "build_hessian",
            status = "success",
            num_columns,
            num_terms = terms.len(),
            num_nonzeros = hessian.num_nonzeros(),
            "Built Hessian"
        );
        hessian
    }

    pub fn num_nonzeros(&self) -> usize {
        self.value.len()
    }

    /// True when the Hessian has at least one stored entry.
    pub fn is_quadratic(&self) -> bool {
        !self.value.is_empty()
    }
}
