//! Schwefel max test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Schwefel max (Schwefel 2.21) - largest absolute component
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// A NaN component makes the result NaN.
pub fn schwefel_max(x: &Array1<f64>) -> Result<f64> {
    FunctionId::SchwefelMax.check_dimension(x.len())?;
    Ok(x.iter().map(|xi| xi.abs()).fold(f64::NEG_INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    }))
}
