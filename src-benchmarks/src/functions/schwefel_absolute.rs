//! Schwefel absolute sum test function

use ndarray::Array1;

use crate::error::Result;
use crate::registry::FunctionId;

/// Schwefel absolute sum and product (Schwefel 2.22)
/// f(x) = sum |x_i| + prod |x_i|
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn schwefel_absolute(x: &Array1<f64>) -> Result<f64> {
    FunctionId::SchwefelAbsolute.check_dimension(x.len())?;
    let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
    let product: f64 = x.iter().map(|xi| xi.abs()).product();
    Ok(sum + product)
}
