//! Eggholder test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Eggholder function - N-dimensional chained form, needs n >= 2
///
/// `sum_i (x_{i+1} + 47) sin(sqrt(|x_{i+1} + x_i/2 + 47|)) + x_i sin(sqrt(|x_i - x_{i+1} - 47|))`
///
/// Both terms enter with a positive sign, so in 2D this is the negation of the
/// usual Eggholder: the point (512, 404.2319) evaluates to about +959.6407.
///
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> Result<f64> {
    FunctionId::Eggholder.check_dimension(x.len())?;
    Ok(x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xj)| {
            (xj + 47.0) * (xj + xi / 2.0 + 47.0).abs().sqrt().sin()
                + xi * (xi - xj - 47.0).abs().sqrt().sin()
        })
        .sum::<f64>())
}
