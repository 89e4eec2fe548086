use crate::ids::VariableId;

/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// `terms <= rhs`
    LessThanOrEqual,
    /// `terms == rhs`
    Equal,
    /// `terms >= rhs`
    GreaterThanOrEqual,
}

impl ConstraintSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintSense::LessThanOrEqual => "<=",
            ConstraintSense::Equal => "==",
            ConstraintSense::GreaterThanOrEqual => ">=",
        }
    }
}

/// Bounds for a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Bounds spanning the whole real line.
    pub fn free() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }
}

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Continuous,
    Integer,
    /// Integer restricted to `[0, 1]`.
    Boolean,
}

/// A decision variable with bounds and a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub bounds: Bounds,
    pub kind: VariableKind,
}

impl Variable {
    /// Create a binary variable with bounds [0, 1].
    pub fn binary() -> Self {
        Self {
            bounds: Bounds::new(0.0, 1.0),
            kind: VariableKind::Boolean,
        }
    }

    /// Create a continuous variable with specified bounds.
    pub fn continuous(bounds: Bounds) -> Self {
        Self {
            bounds,
            kind: VariableKind::Continuous,
        }
    }

    /// Create an integer variable with specified bounds.
    pub fn integer(bounds: Bounds) -> Self {
        Self {
            bounds,
            kind: VariableKind::Integer,
        }
    }

    /// True for integer and boolean variables.
    pub fn is_integral(&self) -> bool {
        matches!(self.kind, VariableKind::Integer | VariableKind::Boolean)
    }
}

/// A linear term `coefficient * variable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub variable: VariableId,
    pub coefficient: f64,
}

impl Term {
    pub fn new(variable: VariableId, coefficient: f64) -> Self {
        Self {
            variable,
            coefficient,
        }
    }
}

/// A quadratic term `coefficient * first * second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticTerm {
    pub first: VariableId,
    pub second: VariableId,
    pub coefficient: f64,
}

/// A linear constraint `terms <sense> rhs`.
///
/// Terms keep insertion order; repeated variables and zero coefficients are
/// stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub sense: ConstraintSense,
    pub rhs: f64,
    pub terms: Vec<Term>,
}

impl Constraint {
    pub fn new(sense: ConstraintSense, rhs: f64) -> Self {
        Self {
            sense,
            rhs,
            terms: Vec::new(),
        }
    }
}

/// Objective function with a sense, linear terms and quadratic terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub terms: Vec<Term>,
    pub quadratic_terms: Vec<QuadraticTerm>,
}

impl Objective {
    /// Create a new empty minimization objective.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_maximize(&self) -> bool {
        self.sense == Sense::Maximize
    }

    /// True when at least one quadratic term is present.
    pub fn is_quadratic(&self) -> bool {
        !self.quadratic_terms.is_empty()
    }
}
