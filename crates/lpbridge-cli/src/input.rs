//! JSON model documents.
//!
//! Terms reference variables by their zero-based position in `variables`.
//! Missing bounds are unbounded in that direction. Boolean variables are
//! always `[0, 1]` and must not carry bounds.

use lpbridge_core::{Bounds, ConstraintSense, Model, ModelError, Sense, Variable, VariableId};
use serde::Deserialize;
use std::fmt;

/// Errors turning a document into a [`Model`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// `lower` or `upper` given on a boolean variable
    BooleanBounds { index: usize },
    Model(ModelError),
}

impl DocumentError {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::BooleanBounds { .. } => "DOCUMENT_BOOLEAN_BOUNDS",
            DocumentError::Model(err) => err.code(),
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::BooleanBounds { index } => write!(
                f,
                "[{}] Boolean variable {} must not set lower or upper",
                self.code(),
                index
            ),
            DocumentError::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<ModelError> for DocumentError {
    fn from(err: ModelError) -> Self {
        DocumentError::Model(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindSpec {
    Continuous,
    Integer,
    Boolean,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableSpec {
    pub kind: KindSpec,
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenseSpec {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConstraintSenseSpec {
    #[serde(rename = "<=", alias = "le")]
    LessThanOrEqual,
    #[serde(rename = "==", alias = "eq")]
    Equal,
    #[serde(rename = ">=", alias = "ge")]
    GreaterThanOrEqual,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermSpec {
    pub variable: u32,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuadraticTermSpec {
    pub first: u32,
    pub second: u32,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectiveSpec {
    pub sense: SenseSpec,
    #[serde(default)]
    pub terms: Vec<TermSpec>,
    #[serde(default)]
    pub quadratic_terms: Vec<QuadraticTermSpec>,
}

impl Default for ObjectiveSpec {
    fn default() -> Self {
        ObjectiveSpec {
            sense: SenseSpec::Minimize,
            terms: Vec::new(),
            quadratic_terms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintSpec {
    pub sense: ConstraintSenseSpec,
    pub rhs: f64,
    #[serde(default)]
    pub terms: Vec<TermSpec>,
}

/// Top-level model document.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
    #[serde(default)]
    pub objective: ObjectiveSpec,
    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
}

impl ModelDocument {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Build a [`Model`] from the document.
    ///
    /// # Errors
    ///
    /// Rejects bounds on boolean variables, then propagates the first
    /// [`ModelError`]: bad bounds, NaN values or a term that references a
    /// variable past the end of `variables`.
    pub fn to_model(&self) -> Result<Model, DocumentError> {
        let mut model = Model::new();
        for (index, spec) in self.variables.iter().enumerate() {
            if spec.kind == KindSpec::Boolean && (spec.lower.is_some() || spec.upper.is_some()) {
                return Err(DocumentError::BooleanBounds { index });
            }
            let bounds = Bounds::new(
                spec.lower.unwrap_or(f64::NEG_INFINITY),
                spec.upper.unwrap_or(f64::INFINITY),
            );
            let variable = match spec.kind {
                KindSpec::Continuous => Variable::continuous(bounds),
                KindSpec::Integer => Variable::integer(bounds),
                KindSpec::Boolean => Variable::binary(),
            };
            model.add_variable(variable)?;
        }

        model.set_sense(match self.objective.sense {
            SenseSpec::Minimize => Sense::Minimize,
            SenseSpec::Maximize => Sense::Maximize,
        });
        for term in &self.objective.terms {
            model.add_objective_term(VariableId::new(term.variable), term.coefficient)?;
        }
        for term in &self.objective.quadratic_terms {
            model.add_quadratic_term(
                VariableId::new(term.first),
                VariableId::new(term.second),
                term.coefficient,
            )?;
        }

        for spec in &self.constraints {
            let sense = match spec.sense {
                ConstraintSenseSpec::LessThanOrEqual => ConstraintSense::LessThanOrEqual,
                ConstraintSenseSpec::Equal => ConstraintSense::Equal,
                ConstraintSenseSpec::GreaterThanOrEqual => ConstraintSense::GreaterThanOrEqual,
            };
            let constraint = model.add_constraint(sense, spec.rhs)?;
            for term in &spec.terms {
                model.add_term(constraint, VariableId::new(term.variable), term.coefficient)?;
            }
        }
        Ok(model)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use lpbridge_core::{ConstraintId, VariableKind};

    const KNAPSACK: &str = r#"{
        "variables": [
            {"kind": "boolean"},
            {"kind": "integer", "lower": 0, "upper": 4},
            {"kind": "continuous", "lower": -1.5}
        ],
        "objective": {
            "sense": "maximize",
            "terms": [{"variable": 0, "coefficient": 3.0}, {"variable": 1, "coefficient": 1.0}],
            "quadratic_terms": [{"first": 2, "second": 2, "coefficient": 0.5}]
        },
        "constraints": [
            {"sense": "<=", "rhs": 4.0, "terms": [{"variable": 0, "coefficient": 2.0}]},
            {"sense": "ge", "rhs": 1.0}
        ]
    }"#;

    #[test]
    fn test_document_to_model() {
        let model = ModelDocument::from_json(KNAPSACK).unwrap().to_model().unwrap();
        assert_eq!(model.num_variables(), 3);
        assert_eq!(model.num_constraints(), 2);
        assert!(model.objective().is_maximize());
        assert!(model.objective().is_quadratic());
        assert!(model.has_integer_variables());

        let boolean = model.variable(VariableId::new(0)).unwrap();
        assert_eq!(boolean.kind, VariableKind::Boolean);
        let free_above = model.variable(VariableId::new(2)).unwrap();
        assert_eq!(free_above.bounds.lower, -1.5);
        assert_eq!(free_above.bounds.upper, f64::INFINITY);

        let first = model.constraint(ConstraintId::new(0)).unwrap();
        assert_eq!(first.sense, ConstraintSense::LessThanOrEqual);
        assert_eq!(first.terms.len(), 1);
        let second = model.constraint(ConstraintId::new(1)).unwrap();
        assert_eq!(second.sense, ConstraintSense::GreaterThanOrEqual);
        assert!(second.terms.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let model = ModelDocument::from_json("{}").unwrap().to_model().unwrap();
        assert_eq!(model.num_variables(), 0);
        assert!(!model.objective().is_maximize());
    }

    #[test]
    fn test_unknown_variable_reference() {
        let raw = r#"{
            "variables": [{"kind": "continuous"}],
            "objective": {"sense": "minimize", "terms": [{"variable": 3, "coefficient": 1.0}]}
        }"#;
        let err = ModelDocument::from_json(raw).unwrap().to_model().unwrap_err();
        assert_eq!(
            err,
            DocumentError::Model(ModelError::InvalidVariableId(VariableId::new(3)))
        );
        assert_eq!(err.code(), "VARIABLE_INVALID_ID");
    }

    #[test]
    fn test_boolean_bounds_rejected() {
        let raw = r#"{"variables": [{"kind": "continuous"}, {"kind": "boolean", "upper": 5}]}"#;
        let err = ModelDocument::from_json(raw).unwrap().to_model().unwrap_err();
        assert_eq!(err, DocumentError::BooleanBounds { index: 1 });
        assert!(err.to_string().starts_with("[DOCUMENT_BOOLEAN_BOUNDS]"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let raw = r#"{"variables": [{"kind": "semicontinuous"}]}"#;
        assert!(ModelDocument::from_json(raw).is_err());
    }
}
