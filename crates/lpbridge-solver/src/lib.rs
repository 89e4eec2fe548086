//! Shared solver abstractions for lpbridge.
//!
//! Backends (like `lpbridge-highs`) take their configuration from this crate
//! and report results through its traits.
//!
//! # Overview
//!
//! - [`SolveOptions`]: Time budget, verbosity, MIP gaps and control options
//! - [`SolutionStatus`]: Terminal status shared by all backends
//! - [`ConfigError`]: Errors from parsing textual configuration
//! - [`Solve`]: Trait for solver implementations
//! - [`SolutionView`]: Trait for accessing solution data

mod config;
mod error;
mod status;
mod traits;

pub use config::{
    ControlOptions, GapOptions, MipOptions, NamedOption, OptionKind, SolveOptions, Verbosity,
};
pub use error::ConfigError;
pub use status::SolutionStatus;
pub use traits::{SolutionView, Solve};
