//! Shekel's foxholes test function

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{BenchmarkError, Result};
use crate::registry::FunctionId;

/// Largest accepted `num_holes`.
pub const MAX_HOLES: usize = 1024;

/// Parameters of Shekel's foxholes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShekelFoxholeParams {
    /// Holes per axis, at most [`MAX_HOLES`]; the grid has `num_holes^2` holes
    pub num_holes: usize,
}

impl Default for ShekelFoxholeParams {
    fn default() -> Self {
        Self { num_holes: 5 }
    }
}

impl ShekelFoxholeParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(1..=MAX_HOLES).contains(&self.num_holes) {
            return Err(BenchmarkError::InvalidParameter {
                name: "shekel_foxhole.num_holes",
                reason: format!("must be in 1..={}, got {}", MAX_HOLES, self.num_holes),
            });
        }
        Ok(())
    }
}

/// Hole coordinates as a `2 x num_holes^2` matrix.
///
/// Holes are 16 apart starting at -32. Row 0 cycles fastest, so for 5 holes
/// row 0 is `-32,-16,0,16,32` repeated five times and row 1 holds each of
/// those values five times in a row.
pub fn foxhole_grid(num_holes: usize) -> Array2<f64> {
    let offset = |k: usize| 16.0 * k as f64 - 32.0;
    Array2::from_shape_fn((2, num_holes * num_holes), |(row, j)| {
        if row == 0 {
            offset(j % num_holes)
        } else {
            offset(j / num_holes)
        }
    })
}

/// Shekel's foxholes (De Jong F5) - 2D, many sharp wells
/// f(x) = [0.002 + sum_j 1 / (j + sum_i (x_i - a_ij)^6)]^-1, j counted from 0
///
/// With `j` starting at 0 the first hole, (-32, -32), has a singular term: the
/// function evaluates to exactly 0 there.
///
/// Bounds: x_i in [-65.536, 65.536]
pub fn shekel_foxhole(x: &Array1<f64>, params: &ShekelFoxholeParams) -> Result<f64> {
    FunctionId::ShekelFoxhole.check_dimension(x.len())?;
    params.validate()?;

    let grid = foxhole_grid(params.num_holes);
    let wells: f64 = grid
        .axis_iter(Axis(1))
        .enumerate()
        .map(|(j, hole)| {
            let spread: f64 = x
                .iter()
                .zip(hole.iter())
                .map(|(&xi, &aij)| (xi - aij).powi(6))
                .sum();
            1.0 / (j as f64 + spread)
        })
        .sum();
    Ok(1.0 / (0.002 + wells))
}
