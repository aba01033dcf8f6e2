//! Absolute value test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Absolute value function - unimodal, not differentiable at the origin
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn absolute(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Absolute.check_dimension(x.len())?;
    Ok(x.iter().map(|xi| xi.abs()).sum::<f64>())
}
