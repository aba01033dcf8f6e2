//! Ackley test function

use ndarray::Array1;
use std::f64::consts::{E, PI};

use crate::error::Result;
use crate::registry::FunctionId;

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
///
/// At the origin `20 + e` cancels the two exponential terms, so the computed
/// value is zero only up to rounding.
pub fn ackley(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Ackley.check_dimension(x.len())?;
    let n = x.len() as f64;
    let mean_sq = x.iter().map(|&xi| xi.powi(2)).sum::<f64>() / n;
    let mean_cos = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;
    Ok(-20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp() + 20.0 + E)
}
