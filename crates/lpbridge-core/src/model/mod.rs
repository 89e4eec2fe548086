//! Model module for building optimization models.
//!
//! - [`error`]: Model error types
//! - `builder`: Methods for adding variables, constraints, and objective terms
//! - `storage`: Read-only accessors consumed by solver backends

mod builder;
mod error;
mod storage;

use crate::types::{Constraint, Objective, Variable};

pub use error::ModelError;

/// A linear or quadratic mixed-integer program.
///
/// Variables get dense zero-based indices in creation order. Constraints keep
/// their terms in insertion order; constraints without terms are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub(crate) variables: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Objective,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::ids::{ConstraintId, VariableId};
    use crate::types::{Bounds, ConstraintSense, Sense, Term, VariableKind};

    mod objective;
    mod support;

    #[test]
    fn test_new_model_is_empty() {
        let model = Model::new();
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.num_constraints(), 0);
        assert_eq!(model.objective().sense, Sense::Minimize);
    }

    #[test]
    fn test_variable_indices_are_dense() {
        let mut model = Model::new();
        let x = model.new_float(0.0, 1.0).unwrap();
        let y = model.new_int(-3, 3).unwrap();
        let z = model.new_bool().unwrap();

        assert_eq!((x.index(), y.index(), z.index()), (0, 1, 2));
        let indices: Vec<usize> = model.variables().map(|(id, _)| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_variable_kinds() {
        let mut model = Model::new();
        let x = model.new_float(0.5, 1.5).unwrap();
        let y = model.new_int(-1, 1).unwrap();
        let z = model.new_bool().unwrap();

        assert_eq!(model.variable(x).unwrap().kind, VariableKind::Continuous);
        assert_eq!(model.variable(y).unwrap().bounds, Bounds::new(-1.0, 1.0));
        assert_eq!(model.variable(z).unwrap().bounds, Bounds::new(0.0, 1.0));
        assert!(model.variable(z).unwrap().is_integral());
        assert!(model.has_integer_variables());
    }

    #[test]
    fn test_continuous_model_has_no_integer_variables() {
        let mut model = Model::new();
        model.new_float(0.0, f64::INFINITY).unwrap();
        assert!(!model.has_integer_variables());
    }

    #[test]
    fn test_nan_lower_bound_rejected() {
        let mut model = Model::new();
        let result = model.new_float(f64::NAN, 0.0);
        assert!(matches!(
            result,
            Err(ModelError::InvalidVariableBounds { .. })
        ));
        assert_eq!(model.num_variables(), 0);
    }

    #[test]
    fn test_nan_upper_bound_rejected() {
        let mut model = Model::new();
        let result = model.new_float(0.0, f64::NAN);
        assert!(matches!(
            result,
            Err(ModelError::InvalidVariableBounds { .. })
        ));
    }

    #[test]
    fn test_crossed_bounds_rejected() {
        let mut model = Model::new();
        let result = model.new_float(5.0, 1.0);
        assert_eq!(
            result,
            Err(ModelError::InvalidVariableBounds {
                lower: 5.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn test_infinite_bounds_accepted() {
        let mut model = Model::new();
        let x = model.add_variable(support::free_variable()).unwrap();
        let bounds = model.variable(x).unwrap().bounds;
        assert!(bounds.lower.is_infinite() && bounds.upper.is_infinite());
    }

    #[test]
    fn test_constraint_terms_keep_order_and_zeros() {
        let mut model = Model::new();
        let x = model.new_float(0.0, 1.0).unwrap();
        let y = model.new_float(0.0, 1.0).unwrap();
        let c = model.add_constraint(ConstraintSense::LessThanOrEqual, 4.0).unwrap();
        model.add_term(c, y, 2.0).unwrap();
        model.add_term(c, x, 0.0).unwrap();
        model.add_term(c, y, 1.0).unwrap();

        let stored = model.constraint(c).unwrap();
        assert_eq!(
            stored.terms,
            vec![Term::new(y, 2.0), Term::new(x, 0.0), Term::new(y, 1.0)]
        );
        assert_eq!(stored.rhs, 4.0);
        assert_eq!(stored.sense, ConstraintSense::LessThanOrEqual);
    }

    #[test]
    fn test_constraint_without_terms_is_kept() {
        let mut model = Model::new();
        model.new_bool().unwrap();
        model.add_constraint(ConstraintSense::Equal, 1.0).unwrap();
        assert_eq!(model.num_constraints(), 1);
        assert!(model.constraints().all(|(_, c)| c.terms.is_empty()));
    }

    #[test]
    fn test_nan_constraint_coefficient_rejected() {
        let mut model = support::single_variable_model();
        let c = model.add_constraint(ConstraintSense::LessThanOrEqual, 100.0).unwrap();
        let result = model.add_term(c, VariableId::new(0), f64::NAN);
        assert!(matches!(result, Err(ModelError::InvalidValue { .. })));
        assert!(model.constraint(c).unwrap().terms.is_empty());
    }

    #[test]
    fn test_nan_rhs_rejected() {
        let mut model = Model::new();
        let result = model.add_constraint(ConstraintSense::Equal, f64::NAN);
        assert!(matches!(result, Err(ModelError::InvalidValue { .. })));
    }

    #[test]
    fn test_add_term_with_invalid_ids_fails() {
        let mut model = support::single_variable_model();
        let c = model.add_constraint(ConstraintSense::Equal, 0.0).unwrap();

        let bad_var = VariableId::new(42);
        assert_eq!(
            model.add_term(c, bad_var, 1.0),
            Err(ModelError::InvalidVariableId(bad_var))
        );

        let bad_constraint = ConstraintId::new(9);
        assert_eq!(
            model.add_term(bad_constraint, VariableId::new(0), 1.0),
            Err(ModelError::InvalidConstraintId(bad_constraint))
        );
    }

    #[test]
    fn test_error_codes_in_display() {
        let err = ModelError::InvalidValue {
            field: "objective coefficient",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("MODEL_INVALID_VALUE"));
        assert!(msg.contains("objective coefficient"));

        let err = ModelError::InvalidVariableId(VariableId::new(3));
        assert!(err.to_string().contains("VARIABLE_INVALID_ID"));
        assert!(err.to_string().contains('3'));
    }
}
