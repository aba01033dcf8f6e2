//! Quartic test function

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::FunctionId;

/// Parameters of the quartic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarticParams {
    /// Exponent applied to every component
    pub power: i32,
}

impl Default for QuarticParams {
    fn default() -> Self {
        Self { power: 4 }
    }
}

/// Quartic function - weighted power sum, noise free
/// f(x) = sum (i + 1) x_i^power
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0) for even powers
/// Bounds: x_i in [-1.28, 1.28]
pub fn quartic(x: &Array1<f64>, params: &QuarticParams) -> Result<f64> {
    FunctionId::Quartic.check_dimension(x.len())?;
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| (i as f64 + 1.0) * xi.powi(params.power))
        .sum::<f64>())
}
