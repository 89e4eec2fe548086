//! FFI bindings to HiGHS solver library.
//!
//! This module contains unsafe code for interacting with the C library.
#![allow(unsafe_code)]

use crate::engine::Engine;
use crate::input::HighsInput;
use crate::options::OptionSetter;
use highs_sys::{
    HighsInt, kHighsHessianFormatTriangular, kHighsMatrixFormatRowwise,
    kHighsObjSenseMaximize, kHighsObjSenseMinimize, kHighsStatusError, kHighsStatusOk,
};
use lpbridge_core::Sense;
use std::ffi::{CStr, CString, c_void};
use std::fmt;
use std::ptr::{self, NonNull};
use tracing::{debug, trace};

/// Column and row values returned by `Highs_getSolution`.
#[derive(Debug, Clone, Default)]
pub struct SolutionSnapshot {
    col_values: Vec<f64>,
    col_duals: Vec<f64>,
    row_values: Vec<f64>,
    row_duals: Vec<f64>,
}

impl SolutionSnapshot {
    /// Primal values for variables.
    pub fn col_values(&self) -> &[f64] {
        &self.col_values
    }

    /// Dual values for variables (reduced costs).
    pub fn col_duals(&self) -> &[f64] {
        &self.col_duals
    }

    /// Primal values for constraints.
    pub fn row_values(&self) -> &[f64] {
        &self.row_values
    }

    /// Dual values for constraints (shadow prices).
    pub fn row_duals(&self) -> &[f64] {
        &self.row_duals
    }

    /// All-zero buffers sized for `num_columns` and `num_rows`.
    pub(crate) fn zeroed(num_columns: usize, num_rows: usize) -> Self {
        SolutionSnapshot {
            col_values: vec![0.0; num_columns],
            col_duals: vec![0.0; num_columns],
            row_values: vec![0.0; num_rows],
            row_duals: vec![0.0; num_rows],
        }
    }

    pub(crate) fn into_col_values(self) -> Vec<f64> {
        self.col_values
    }
}

/// Owned HiGHS instance. Dropping it calls `Highs_destroy`.
pub struct HighsHandle {
    ptr: NonNull<c_void>,
}

impl HighsHandle {
    /// Allocate a new HiGHS instance, or `None` if the library returns null.
    pub fn create() -> Option<Self> {
        let ptr = NonNull::new(unsafe { highs_sys::Highs_create() })?;
        debug!(
            component = "highs",
            operation = "create_handle",
            status = "success",
            "Created HiGHS instance"
        );
        Some(HighsHandle { ptr })
    }
}

impl Engine for HighsHandle {
    /// The value HiGHS treats as infinite in bounds.
    fn infinity(&self) -> f64 {
        unsafe { highs_sys::Highs_getInfinity(self.ptr.as_ptr()) }
    }

    /// Pass the assembled model with `Highs_passModel`.
    ///
    /// The Hessian pointers are null unless the input is quadratic and the
    /// integrality pointer is null unless it is integer. Empty row buffers are
    /// passed as null.
    fn pass_model(&mut self, input: &HighsInput) -> HighsInt {
        let columns = &input.columns;
        let rows = &input.rows;
        let hessian = &input.hessian;

        let (q_start, q_index, q_value) = if input.is_quadratic() {
            (
                ptr_or_null(&hessian.start),
                ptr_or_null(&hessian.index),
                ptr_or_null(&hessian.value),
            )
        } else {
            (ptr::null(), ptr::null(), ptr::null())
        };
        let integrality = if input.is_integer() {
            ptr_or_null(&columns.integrality)
        } else {
            ptr::null()
        };
        let sense = match input.sense {
            Sense::Minimize => kHighsObjSenseMinimize,
            Sense::Maximize => kHighsObjSenseMaximize,
        };

        // Dimensions were range-checked when the input was assembled.
        let status = unsafe {
            highs_sys::Highs_passModel(
                self.ptr.as_ptr(),
                columns.len() as HighsInt,
                rows.len() as HighsInt,
                rows.num_nonzeros() as HighsInt,
                hessian.num_nonzeros() as HighsInt,
                kHighsMatrixFormatRowwise,
                kHighsHessianFormatTriangular,
                sense,
                0.0,
                ptr_or_null(&columns.cost),
                ptr_or_null(&columns.lower),
                ptr_or_null(&columns.upper),
                ptr_or_null(&rows.lower),
                ptr_or_null(&rows.upper),
                ptr_or_null(&rows.start),
                ptr_or_null(&rows.index),
                ptr_or_null(&rows.value),
                q_start,
                q_index,
                q_value,
                integrality,
            )
        };
        trace!(
            component = "highs",
            operation = "pass_model",
            status_code = status,
            "Passed model to HiGHS"
        );
        status
    }

    /// Run the solver. Blocks until HiGHS returns.
    fn run(&mut self) -> HighsInt {
        unsafe { highs_sys::Highs_run(self.ptr.as_ptr()) }
    }

    /// The terminal model status code of the last run.
    fn model_status(&self) -> HighsInt {
        unsafe { highs_sys::Highs_getModelStatus(self.ptr.as_ptr()) }
    }

    /// Fetch column and row values and duals in one call.
    ///
    /// # Errors
    ///
    /// Returns the HiGHS status code when it is not OK.
    fn solution(
        &self,
        num_columns: usize,
        num_rows: usize,
    ) -> Result<SolutionSnapshot, HighsInt> {
        let mut snapshot = SolutionSnapshot::zeroed(num_columns, num_rows);
        let status = unsafe {
            highs_sys::Highs_getSolution(
                self.ptr.as_ptr(),
                ptr_or_null_mut(&mut snapshot.col_values),
                ptr_or_null_mut(&mut snapshot.col_duals),
                ptr_or_null_mut(&mut snapshot.row_values),
                ptr_or_null_mut(&mut snapshot.row_duals),
            )
        };
        if status != kHighsStatusOk {
            return Err(status);
        }
        Ok(snapshot)
    }

    /// Objective value of the last run.
    fn objective_value(&self) -> f64 {
        unsafe { highs_sys::Highs_getObjectiveValue(self.ptr.as_ptr()) }
    }
}

impl OptionSetter for HighsHandle {
    fn set_bool_option(&mut self, name: &str, value: bool) -> HighsInt {
        let Ok(name) = CString::new(name) else {
            return kHighsStatusError;
        };
        unsafe {
            highs_sys::Highs_setBoolOptionValue(
                self.ptr.as_ptr(),
                name.as_ptr(),
                HighsInt::from(value),
            )
        }
    }

    fn set_int_option(&mut self, name: &str, value: HighsInt) -> HighsInt {
        let Ok(name) = CString::new(name) else {
            return kHighsStatusError;
        };
        unsafe { highs_sys::Highs_setIntOptionValue(self.ptr.as_ptr(), name.as_ptr(), value) }
    }

    fn set_float_option(&mut self, name: &str, value: f64) -> HighsInt {
        let Ok(name) = CString::new(name) else {
            return kHighsStatusError;
        };
        unsafe { highs_sys::Highs_setDoubleOptionValue(self.ptr.as_ptr(), name.as_ptr(), value) }
    }

    fn set_string_option(&mut self, name: &str, value: &str) -> HighsInt {
        let (Ok(name), Ok(value)) = (CString::new(name), CString::new(value)) else {
            return kHighsStatusError;
        };
        unsafe {
            highs_sys::Highs_setStringOptionValue(self.ptr.as_ptr(), name.as_ptr(), value.as_ptr())
        }
    }
}

impl Drop for HighsHandle {
    fn drop(&mut self) {
        unsafe { highs_sys::Highs_destroy(self.ptr.as_ptr()) };
        trace!(
            component = "highs",
            operation = "destroy_handle",
            status = "success",
            "Destroyed HiGHS instance"
        );
    }
}

impl fmt::Debug for HighsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighsHandle")
            .field("ptr", &self.ptr)
            .finish()
    }
}

/// Pointer to the first element, or null for an empty slice.
fn ptr_or_null<T>(values: &[T]) -> *const T {
    if values.is_empty() {
        ptr::null()
    } else {
        values.as_ptr()
    }
}

fn ptr_or_null_mut<T>(values: &mut [T]) -> *mut T {
    if values.is_empty() {
        ptr::null_mut()
    } else {
        values.as_mut_ptr()
    }
}

/// Return the HiGHS solver version string, if available.
pub fn highs_version() -> Option<String> {
    unsafe {
        let ptr = highs_sys::Highs_version();
        if ptr.is_null() {
            None
        } else {
            CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
        }
    }
}
