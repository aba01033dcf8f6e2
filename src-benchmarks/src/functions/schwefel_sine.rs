//! Schwefel sine test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Schwefel sine function (Schwefel 2.26) - multimodal, deceptive
/// f(x) = -sum x_i sin(sqrt(|x_i|))
/// Global minimum: f(x) = -418.9829 n at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel_sine(x: &Array1<f64>) -> Result<f64> {
    FunctionId::SchwefelSine.check_dimension(x.len())?;
    Ok(-x
        .iter()
        .map(|&xi| xi * xi.abs().sqrt().sin())
        .sum::<f64>())
}
