//! Penalty term shared by the two penalized benchmark functions

use ndarray::Array1;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters of the boundary penalty `u(z, a, k, m)`.
///
/// Inside the closed band `[-a, a]` the penalty is zero; outside it grows as
/// `k (|z| - a)^m`.
///
/// Deserialized on its own, missing fields take the Penalty-1 values.
/// Inside [`crate::FunctionParams`] each block falls back to the defaults of
/// its own function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyParams {
    /// Penalty scale
    pub k: f64,
    /// Half-width of the penalty-free band
    pub a: f64,
    /// Penalty exponent
    pub m: i32,
}

impl PenaltyParams {
    /// Defaults for Penalty-1: `k=100, a=10, m=4`.
    pub fn penalty_1() -> Self {
        Self { k: 100.0, a: 10.0, m: 4 }
    }

    /// Defaults for Penalty-2: `k=100, a=5, m=4`.
    pub fn penalty_2() -> Self {
        Self { k: 100.0, a: 5.0, m: 4 }
    }
}

impl Default for PenaltyParams {
    fn default() -> Self {
        Self::penalty_1()
    }
}

/// Fields present in a partial penalty block.
#[derive(Deserialize)]
struct PenaltyOverrides {
    k: Option<f64>,
    a: Option<f64>,
    m: Option<i32>,
}

impl PenaltyOverrides {
    fn apply(self, base: PenaltyParams) -> PenaltyParams {
        PenaltyParams {
            k: self.k.unwrap_or(base.k),
            a: self.a.unwrap_or(base.a),
            m: self.m.unwrap_or(base.m),
        }
    }
}

pub(crate) fn deserialize_penalty_1<'de, D>(deserializer: D) -> Result<PenaltyParams, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PenaltyOverrides::deserialize(deserializer)?.apply(PenaltyParams::penalty_1()))
}

pub(crate) fn deserialize_penalty_2<'de, D>(deserializer: D) -> Result<PenaltyParams, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PenaltyOverrides::deserialize(deserializer)?.apply(PenaltyParams::penalty_2()))
}

/// Boundary penalty for a single component.
pub fn penalty_u(z: f64, params: &PenaltyParams) -> f64 {
    let PenaltyParams { k, a, m } = *params;
    if z > a {
        k * (z - a).powi(m)
    } else if z < -a {
        k * (-z - a).powi(m)
    } else {
        0.0
    }
}

/// Sum of `u` over all components, computed on a fresh vector.
pub(crate) fn total_penalty(x: &Array1<f64>, params: &PenaltyParams) -> f64 {
    x.mapv(|z| penalty_u(z, params)).sum()
}
