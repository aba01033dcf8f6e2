//! Sphere test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Sphere function - unimodal, symmetric
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Sphere.check_dimension(x.len())?;
    Ok(x.iter().map(|&xi| xi.powi(2)).sum::<f64>())
}
