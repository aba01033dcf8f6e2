//! Schwefel double sum test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Schwefel double sum (Schwefel 1.2) - unimodal, non-separable
/// f(x) = sum_i (sum_{j<=i} x_j)^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-65.536, 65.536]
pub fn schwefel_double_sum(x: &Array1<f64>) -> Result<f64> {
    FunctionId::SchwefelDoubleSum.check_dimension(x.len())?;
    // running prefix sum, same addition order as the nested form
    let mut prefix = 0.0;
    Ok(x.iter()
        .map(|&xi| {
            prefix += xi;
            prefix.powi(2)
        })
        .sum::<f64>())
}
