//! HiGHS backend for lpbridge models.
//!
//! A solve builds flat column, row (CSR) and Hessian (CSC) arrays from a
//! `lpbridge_core::Model`, passes them to HiGHS through `highs-sys`, and maps
//! the terminal model status back onto a [`Solution`].

pub mod columns;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod hessian;
pub mod input;
pub mod options;
pub mod rows;
pub mod solution;
pub mod solver;
mod status;

pub use columns::ColumnArrays;
pub use engine::Engine;
pub use error::SolveError;
pub use ffi::{HighsHandle, SolutionSnapshot, highs_version};
pub use hessian::HessianArrays;
pub use input::HighsInput;
pub use options::{OptionSetter, apply_options};
pub use rows::{RowArrays, row_bounds};
pub use solution::{PROVIDER, Solution};
pub use solver::{Solver, solve_model, solve_model_with};
