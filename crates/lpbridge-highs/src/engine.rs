//! Engine calls made by a solve, behind a trait so the invoker can run
//! against something other than a live HiGHS instance.

use crate::ffi::SolutionSnapshot;
use crate::input::HighsInput;
use crate::options::OptionSetter;
use highs_sys::HighsInt;

/// One engine instance for one solve. Dropping it releases the instance.
///
/// Methods returning `HighsInt` return the raw HiGHS status code.
pub trait Engine: OptionSetter {
    /// The value the engine treats as infinite in bounds.
    fn infinity(&self) -> f64;
    fn pass_model(&mut self, input: &HighsInput) -> HighsInt;
    fn run(&mut self) -> HighsInt;
    /// Terminal model status code of the last run.
    fn model_status(&self) -> HighsInt;
    /// Column and row values and duals of the last run.
    ///
    /// # Errors
    ///
    /// Returns the engine status code when it is not OK.
    fn solution(
        &self,
        num_columns: usize,
        num_rows: usize,
    ) -> Result<SolutionSnapshot, HighsInt>;
    fn objective_value(&self) -> f64;
}
