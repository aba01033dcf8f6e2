//! Rastrigin test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::registry::FunctionId;

/// Rastrigin function - highly multimodal, symmetric
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Rastrigin.check_dimension(x.len())?;
    let n = x.len() as f64;
    Ok(10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>())
}
