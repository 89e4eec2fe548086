//! Model accessor for lpbridge.
//!
//! Holds variables, linear constraints and a linear/quadratic objective with
//! dense, zero-based variable indices. Solver backends consume a [`Model`]
//! through its read-only accessors.

pub mod ids;
pub mod model;
pub mod types;

pub use ids::{ConstraintId, VariableId};
pub use model::{Model, ModelError};
pub use types::{
    Bounds, Constraint, ConstraintSense, Objective, QuadraticTerm, Sense, Term, Variable,
    VariableKind,
};
