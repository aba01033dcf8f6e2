//! Tenth power test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Tenth power function - unimodal, symmetric, very flat near the origin
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn tenth_power(x: &Array1<f64>) -> Result<f64> {
    FunctionId::TenthPower.check_dimension(x.len())?;
    Ok(x.iter().map(|&xi| xi.powi(10)).sum::<f64>())
}
