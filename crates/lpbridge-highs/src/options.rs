//! Translation of [`SolveOptions`] into HiGHS option calls.

use crate::error::SolveError;
use highs_sys::{HighsInt, kHighsStatusOk};
use lpbridge_solver::{OptionKind, SolveOptions, Verbosity};
use tracing::{debug, trace};

/// Typed option setters, each returning the HiGHS status code.
pub trait OptionSetter {
    fn set_bool_option(&mut self, name: &str, value: bool) -> HighsInt;
    fn set_int_option(&mut self, name: &str, value: HighsInt) -> HighsInt;
    fn set_float_option(&mut self, name: &str, value: f64) -> HighsInt;
    fn set_string_option(&mut self, name: &str, value: &str) -> HighsInt;
}

/// `output_flag` and `log_dev_level` values for a verbosity level.
pub(crate) fn verbosity_settings(verbosity: Verbosity) -> (bool, HighsInt) {
    match verbosity {
        Verbosity::Off => (false, 0),
        Verbosity::Low => (true, 0),
        Verbosity::Medium => (true, 1),
        Verbosity::High => (true, 2),
    }
}

/// Apply `options` in order: verbosity, time limit, MIP gaps (integer
/// problems only), then control options as bools, floats, ints, strings.
///
/// # Errors
///
/// Stops at the first option HiGHS rejects and returns
/// [`SolveError::OptionRejected`] for it.
pub fn apply_options<S: OptionSetter>(
    setter: &mut S,
    options: &SolveOptions,
    is_integer: bool,
) -> Result<(), SolveError> {
    let (output_flag, log_dev_level) = verbosity_settings(options.verbosity);
    set_bool(setter, "output_flag", output_flag)?;
    set_int(setter, "log_dev_level", log_dev_level)?;

    set_float(setter, "time_limit", options.duration.as_secs_f64())?;

    if is_integer {
        set_float(setter, "mip_abs_gap", options.mip.gap.absolute)?;
        set_float(setter, "mip_rel_gap", options.mip.gap.relative)?;
    }

    let control = &options.control;
    for option in &control.bools {
        set_bool(setter, &option.name, option.value)?;
    }
    for option in &control.floats {
        set_float(setter, &option.name, option.value)?;
    }
    for option in &control.ints {
        let value = HighsInt::try_from(option.value)
            .map_err(|_| rejected(&option.name, option.value, OptionKind::Int))?;
        set_int(setter, &option.name, value)?;
    }
    for option in &control.strings {
        if setter.set_string_option(&option.name, &option.value) != kHighsStatusOk {
            return Err(rejected(&option.name, &option.value, OptionKind::Str));
        }
        trace!(
            component = "highs",
            operation = "set_option",
            status = "success",
            option = option.name.as_str(),
            value = option.value.as_str(),
            "Set string option"
        );
    }

    debug!(
        component = "highs",
        operation = "apply_options",
        status = "success",
        verbosity = options.verbosity.as_str(),
        time_limit = options.duration.as_secs_f64(),
        mip_gaps = is_integer,
        control_options = control.len(),
        "Applied solve options"
    );
    Ok(())
}

fn set_bool<S: OptionSetter>(setter: &mut S, name: &str, value: bool) -> Result<(), SolveError> {
    if setter.set_bool_option(name, value) != kHighsStatusOk {
        return Err(rejected(name, value, OptionKind::Bool));
    }
    trace!(
        component = "highs",
        operation = "set_option",
        status = "success",
        option = name,
        value,
        "Set bool option"
    );
    Ok(())
}

fn set_int<S: OptionSetter>(setter: &mut S, name: &str, value: HighsInt) -> Result<(), SolveError> {
    if setter.set_int_option(name, value) != kHighsStatusOk {
        return Err(rejected(name, value, OptionKind::Int));
    }
    trace!(
        component = "highs",
        operation = "set_option",
        status = "success",
        option = name,
        value,
        "Set int option"
    );
    Ok(())
}

fn set_float<S: OptionSetter>(setter: &mut S, name: &str, value: f64) -> Result<(), SolveError> {
    if setter.set_float_option(name, value) != kHighsStatusOk {
        return Err(rejected(name, value, OptionKind::Float));
    }
    trace!(
        component = "highs",
        operation = "set_option",
        status = "success",
        option = name,
        value,
        "Set float option"
    );
    Ok(())
}

fn rejected(name: &str, value: impl ToString, kind: OptionKind) -> SolveError {
    SolveError::OptionRejected {
        option: name.to_string(),
        value: value.to_string(),
        kind,
    }
}
