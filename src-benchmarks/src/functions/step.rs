//! Step test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Step function - discontinuous, plateaus everywhere
/// Global minimum: f(x) = 0 for every x_i in [-0.5, 0.5)
/// Bounds: x_i in [-100, 100]
pub fn step(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Step.check_dimension(x.len())?;
    Ok(x.iter().map(|&xi| (xi + 0.5).floor().powi(2)).sum::<f64>())
}
