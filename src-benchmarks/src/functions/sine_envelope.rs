//! Sine envelope test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Sine envelope function - multimodal ripples damped with distance, needs n >= 2
/// f(x) = 0.5 + sum_i (sin(sqrt(r_i)) - 0.5) / (1 + 0.001 r_i)^2, r_i = x_i^2 + x_{i+1}^2
/// Bounds: x_i in [-100, 100]
pub fn sine_envelope(x: &Array1<f64>) -> Result<f64> {
    FunctionId::SineEnvelope.check_dimension(x.len())?;
    let ripples: f64 = x
        .iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xj)| {
            let r = xi.powi(2) + xj.powi(2);
            (r.sqrt().sin() - 0.5) / (1.0 + 0.001 * r).powi(2)
        })
        .sum();
    Ok(0.5 + ripples)
}
