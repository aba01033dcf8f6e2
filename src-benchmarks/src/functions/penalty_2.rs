//! Penalized function 2

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::functions::penalty::{PenaltyParams, total_penalty};
use crate::registry::FunctionId;

/// Generalized penalized function 2
///
/// `0.1 [sin^2(3 pi x_0) + sum_i ((x_i - 1)^2 (1 + sin^2(3 pi x_{i+1})) + (x_{n-1} - 1)^2 (1 + sin^2(2 pi x_{n-1})))] + sum u(x_i)`
///
/// The last-component term sits inside the pair sum and is therefore counted
/// `n - 1` times.
///
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-50, 50]
pub fn penalty_2(x: &Array1<f64>, params: &PenaltyParams) -> Result<f64> {
    FunctionId::Penalty2.check_dimension(x.len())?;
    let last = x[x.len() - 1];
    let tail = (last - 1.0).powi(2) * (1.0 + (2.0 * PI * last).sin().powi(2));

    let head = (3.0 * PI * x[0]).sin().powi(2);
    let body: f64 = x
        .iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xj)| (xi - 1.0).powi(2) * (1.0 + (3.0 * PI * xj).sin().powi(2)) + tail)
        .sum();

    Ok(0.1 * (head + body) + total_penalty(x, params))
}
