//! Rosenbrock test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Rosenbrock function - N-dimensional banana valley, needs n >= 2
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Rosenbrock.check_dimension(x.len())?;
    Ok(x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xj)| 100.0 * (xj - xi.powi(2)).powi(2) + (xi - 1.0).powi(2))
        .sum::<f64>())
}
