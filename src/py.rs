use crate::cast::{self, Unpacked};
use crate::NarrowFloat;
use pyo3::prelude::*;
use std::format;
use std::string::String;
use std::string::ToString;

/// A value in the narrow E9S12 encoding.
///
/// Instances are produced by `decompose`; the accessors expose the
/// encoded fields and the classification of the value.
#[pyclass]
struct PyNarrowFloat {
    inner: NarrowFloat,
}

#[pymethods]
impl PyNarrowFloat {
    /// Returns the sign bit, 1 for negative.
    fn get_sign(&self) -> u8 {
        self.inner.get_sign() as u8
    }
    /// Returns the biased exponent field.
    fn get_exponent(&self) -> u16 {
        self.inner.biased_exponent()
    }
    /// Returns the significand field.
    fn get_significand(&self) -> u16 {
        self.inner.significand()
    }
    /// Returns true if the value is +-0.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if the value is +-Inf.
    fn is_inf(&self) -> bool {
        self.inner.is_inf()
    }
    /// Returns true if the value is a NaN.
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }
    /// Evaluate the value as a Python float.
    fn to_float(&self) -> f64 {
        self.inner.as_f64()
    }
    fn __str__(&self) -> String {
        self.inner.to_string()
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }
}

/// Decompose a binary32 value into its high and low narrow parts.
///
/// Args:
///     value: The value to decompose, rounded to binary32 first
#[pyfunction]
fn decompose(value: f32) -> PyResult<(PyNarrowFloat, PyNarrowFloat)> {
    let (high, low) = cast::decompose(value);
    Ok((
        PyNarrowFloat { inner: high },
        PyNarrowFloat { inner: low },
    ))
}

/// Unpack a binary32 value into its raw fields.
///
/// Args:
///     value: The value to unpack, rounded to binary32 first
///
/// Returns:
///     A (sign, biased exponent, significand, class name) tuple.
#[pyfunction]
fn unpack(value: f32) -> PyResult<(u8, u32, u32, String)> {
    let u = Unpacked::from_f32(value);
    Ok((
        u.sign as u8,
        u.biased_exp,
        u.significand,
        format!("{:?}", u.class),
    ))
}

#[pymodule]
fn _splitfp(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNarrowFloat>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(decompose, m)?)?;
    m.add_function(wrap_pyfunction!(unpack, m)?)?;
    Ok(())
}
