//! Michalewicz test function

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{BenchmarkError, Result};
use crate::registry::FunctionId;

/// Parameters of the Michalewicz function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MichalewiczParams {
    /// Steepness; the inner sine is raised to `2m`
    pub m: i32,
}

impl Default for MichalewiczParams {
    fn default() -> Self {
        Self { m: 2 }
    }
}

impl MichalewiczParams {
    /// `m` must be positive and `2m` must fit in an `i32`.
    pub(crate) fn validate(&self) -> Result<()> {
        if !(1..=i32::MAX / 2).contains(&self.m) {
            return Err(BenchmarkError::InvalidParameter {
                name: "michalewicz.m",
                reason: format!("must be in 1..={}, got {}", i32::MAX / 2, self.m),
            });
        }
        Ok(())
    }
}

/// Michalewicz function - N-dimensional multimodal with steep valleys
/// f(x) = -sum sin(x_i) sin^(2m)((i + 1) x_i^2 / pi)
/// Bounds: x_i in [0, pi]
pub fn michalewicz(x: &Array1<f64>, params: &MichalewiczParams) -> Result<f64> {
    FunctionId::Michalewicz.check_dimension(x.len())?;
    params.validate()?;
    Ok(-x
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            xi.sin()
                * ((i as f64 + 1.0) * xi.powi(2) / PI)
                    .sin()
                    .powi(2 * params.m)
        })
        .sum::<f64>())
}
