//! Solve configuration types.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// How much output the solver produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl Verbosity {
    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Off => "off",
            Verbosity::Low => "low",
            Verbosity::Medium => "medium",
            Verbosity::High => "high",
        }
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Verbosity::Off),
            "low" => Ok(Verbosity::Low),
            "medium" => Ok(Verbosity::Medium),
            "high" => Ok(Verbosity::High),
            _ => Err(ConfigError::InvalidVerbosity(value.to_string())),
        }
    }
}

/// Termination gaps for mixed-integer problems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapOptions {
    /// Absolute gap between incumbent and bound.
    pub absolute: f64,
    /// Relative gap between incumbent and bound.
    pub relative: f64,
}

impl Default for GapOptions {
    fn default() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-4,
        }
    }
}

/// Options that only apply to problems with integer variables.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MipOptions {
    pub gap: GapOptions,
}

/// Value type of a named control option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Float,
    Int,
    Str,
}

impl OptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Float => "float",
            OptionKind::Int => "int",
            OptionKind::Str => "string",
        }
    }
}

/// A solver-specific option passed through by name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedOption<T> {
    pub name: String,
    pub value: T,
}

impl<T> NamedOption<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Solver-specific options grouped by value type.
///
/// Backends apply them in the order bools, floats, ints, strings, each list
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlOptions {
    pub bools: Vec<NamedOption<bool>>,
    pub floats: Vec<NamedOption<f64>>,
    pub ints: Vec<NamedOption<i64>>,
    pub strings: Vec<NamedOption<String>>,
}

impl ControlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.bools.push(NamedOption::new(name, value));
        self
    }

    pub fn with_float(mut self, name: impl Into<String>, value: f64) -> Self {
        self.floats.push(NamedOption::new(name, value));
        self
    }

    pub fn with_int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.ints.push(NamedOption::new(name, value));
        self
    }

    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.push(NamedOption::new(name, value.into()));
        self
    }

    /// Parse a comma-separated `name=value` list as options of one kind.
    ///
    /// Empty entries are skipped. Whitespace around names and values is
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry without `=` or with a value
    /// that does not parse as `kind`.
    pub fn extend_from_str(&mut self, kind: OptionKind, raw: &str) -> Result<(), ConfigError> {
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .map(|(name, value)| (name.trim(), value.trim()))
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ConfigError::MalformedControlOption(entry.to_string()))?;
            let invalid = || ConfigError::InvalidControlValue {
                name: name.to_string(),
                value: value.to_string(),
                kind,
            };
            match kind {
                OptionKind::Bool => {
                    let parsed = parse_bool(value).ok_or_else(invalid)?;
                    self.bools.push(NamedOption::new(name, parsed));
                }
                OptionKind::Float => {
                    let parsed = value.parse::<f64>().map_err(|_| invalid())?;
                    self.floats.push(NamedOption::new(name, parsed));
                }
                OptionKind::Int => {
                    let parsed = value.parse::<i64>().map_err(|_| invalid())?;
                    self.ints.push(NamedOption::new(name, parsed));
                }
                OptionKind::Str => {
                    self.strings.push(NamedOption::new(name, value.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Total number of options across all kinds.
    pub fn len(&self) -> usize {
        self.bools.len() + self.floats.len() + self.ints.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "on" => Some(true),
        "false" | "f" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration for a single solve.
///
/// The default runs without a time limit, with output off and the HiGHS
/// default MIP gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOptions {
    /// Wall-clock budget handed to the solver.
    pub duration: Duration,
    pub verbosity: Verbosity,
    pub mip: MipOptions,
    pub control: ControlOptions,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            duration: Duration::MAX,
            verbosity: Verbosity::Off,
            mip: MipOptions::default(),
            control: ControlOptions::default(),
        }
    }
}

impl SolveOptions {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time budget.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the absolute MIP gap.
    pub fn with_mip_gap_absolute(mut self, gap: f64) -> Self {
        self.mip.gap.absolute = gap;
        self
    }

    /// Set the relative MIP gap.
    pub fn with_mip_gap_relative(mut self, gap: f64) -> Self {
        self.mip.gap.relative = gap;
        self
    }

    /// Replace the solver-specific control options.
    pub fn with_control(mut self, control: ControlOptions) -> Self {
        self.control = control;
        self
    }
}
