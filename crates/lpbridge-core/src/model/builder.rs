//! Model builder methods for adding variables, constraints, and objectives.

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Bounds, Constraint, ConstraintSense, QuadraticTerm, Sense, Term, Variable};

use super::Model;
use super::error::ModelError;

impl Model {
    /// Add a variable to the model.
    ///
    /// Bounds may be infinite but must not be NaN, and lower must not exceed
    /// upper.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        let Bounds { lower, upper } = variable.bounds;
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ModelError::InvalidVariableBounds { lower, upper });
        }

        let id = VariableId::new(self.variables.len() as u32);
        self.variables.push(variable);

        tracing::trace!(
            component = "model",
            operation = "add_variable",
            status = "success",
            var_id = id.inner(),
            lower,
            upper,
            kind = ?variable.kind,
            "Added variable"
        );
        Ok(id)
    }

    /// Add a continuous variable.
    pub fn new_float(&mut self, lower: f64, upper: f64) -> Result<VariableId, ModelError> {
        self.add_variable(Variable::continuous(Bounds::new(lower, upper)))
    }

    /// Add an integer variable.
    pub fn new_int(&mut self, lower: i64, upper: i64) -> Result<VariableId, ModelError> {
        self.add_variable(Variable::integer(Bounds::new(lower as f64, upper as f64)))
    }

    /// Add a boolean variable with bounds [0, 1].
    pub fn new_bool(&mut self) -> Result<VariableId, ModelError> {
        self.add_variable(Variable::binary())
    }

    /// Add an empty constraint `<terms> <sense> rhs`.
    ///
    /// Terms are attached afterwards with [`Model::add_term`].
    pub fn add_constraint(
        &mut self,
        sense: ConstraintSense,
        rhs: f64,
    ) -> Result<ConstraintId, ModelError> {
        if rhs.is_nan() {
            return Err(ModelError::InvalidValue {
                field: "right-hand side",
                value: rhs,
            });
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        self.constraints.push(Constraint::new(sense, rhs));
        Ok(id)
    }

    /// Append `coefficient * variable` to a constraint.
    ///
    /// Terms keep insertion order. Zero coefficients are stored.
    pub fn add_term(
        &mut self,
        constraint_id: ConstraintId,
        var_id: VariableId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        ensure_number("constraint coefficient", coefficient)?;
        self.ensure_variable_exists(var_id)?;
        let constraint = self
            .constraints
            .get_mut(constraint_id.index())
            .ok_or(ModelError::InvalidConstraintId(constraint_id))?;
        constraint.terms.push(Term::new(var_id, coefficient));
        Ok(())
    }

    /// Set the objective sense.
    pub fn set_sense(&mut self, sense: Sense) {
        self.objective.sense = sense;
        tracing::debug!(
            component = "model",
            operation = "set_objective_sense",
            status = "success",
            sense = sense.as_str(),
            "Set objective sense"
        );
    }

    pub fn set_minimize(&mut self) {
        self.set_sense(Sense::Minimize);
    }

    pub fn set_maximize(&mut self) {
        self.set_sense(Sense::Maximize);
    }

    /// Add `coefficient * variable` to the objective.
    ///
    /// A variable that already has an objective term accumulates into it, so
    /// the objective holds at most one linear term per variable.
    pub fn add_objective_term(
        &mut self,
        var_id: VariableId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        ensure_number("objective coefficient", coefficient)?;
        self.ensure_variable_exists(var_id)?;
        match self
            .objective
            .terms
            .iter_mut()
            .find(|term| term.variable == var_id)
        {
            Some(term) => term.coefficient += coefficient,
            None => self.objective.terms.push(Term::new(var_id, coefficient)),
        }
        Ok(())
    }

    /// Add `coefficient * first * second` to the objective.
    pub fn add_quadratic_term(
        &mut self,
        first: VariableId,
        second: VariableId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        ensure_number("quadratic coefficient", coefficient)?;
        self.ensure_variable_exists(first)?;
        self.ensure_variable_exists(second)?;
        self.objective.quadratic_terms.push(QuadraticTerm {
            first,
            second,
            coefficient,
        });
        Ok(())
    }
}

fn ensure_number(field: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_nan() {
        return Err(ModelError::InvalidValue { field, value });
    }
    Ok(())
}
