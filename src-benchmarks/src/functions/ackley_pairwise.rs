//! Pairwise Ackley variant

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Pairwise Ackley variant - multimodal, needs n >= 2
///
/// `sum_i 3 (cos 2x_i + sin 2x_{i+1}) + exp(-0.2 sqrt(x_i^2 * x_{i+1}^2))`
///
/// Unlike the textbook pairwise Ackley form, the two squares under the root are
/// multiplied rather than added, so the exponential reads
/// `exp(-0.2 |x_i x_{i+1}|)`. Results are not comparable with tables
/// published for the textbook form.
///
/// Bounds: x_i in [-30, 30]
pub fn ackley_pairwise(x: &Array1<f64>) -> Result<f64> {
    FunctionId::AckleyPairwise.check_dimension(x.len())?;
    Ok(x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xj)| {
            let oscillation = 3.0 * ((2.0 * xi).cos() + (2.0 * xj).sin());
            let envelope = (-0.2 * (xi.powi(2) * xj.powi(2)).sqrt()).exp();
            oscillation + envelope
        })
        .sum::<f64>())
}
