//! Penalized function 1

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::functions::penalty::{PenaltyParams, total_penalty};
use crate::registry::FunctionId;

/// Generalized penalized function 1
///
/// `(pi/n) [10 sin^2(pi y_0) + sum_i (y_i - 1)^2 (1 + 10 sin^2(pi y_{i+1})) + (y_{n-1} - 1)^2] + sum u(x_i)`
/// with `y_i = 1 + (x_i + 1) / 4`.
///
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-50, 50]
pub fn penalty_1(x: &Array1<f64>, params: &PenaltyParams) -> Result<f64> {
    FunctionId::Penalty1.check_dimension(x.len())?;
    let n = x.len();
    let y = x.mapv(|xi| 1.0 + 0.25 * (xi + 1.0));

    let head = 10.0 * (PI * y[0]).sin().powi(2);
    let body: f64 = y
        .iter()
        .zip(y.iter().skip(1))
        .map(|(&yi, &yj)| (yi - 1.0).powi(2) * (1.0 + 10.0 * (PI * yj).sin().powi(2)))
        .sum();
    let tail = (y[n - 1] - 1.0).powi(2);

    Ok(PI / n as f64 * (head + body + tail) + total_penalty(x, params))
}
