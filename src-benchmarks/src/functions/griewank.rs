//! Griewank test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Griewank.check_dimension(x.len())?;
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    Ok(1.0 + sum_squares / 4000.0 - product_cos)
}
