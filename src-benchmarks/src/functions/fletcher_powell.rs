//! Fletcher-Powell test function
//!
//! The function is defined by two random `n x n` matrices and a phase vector.
//! They are drawn once in [`FletcherPowellCoefficients::generate`] and then
//! passed to every evaluation, so the same instance always returns the same
//! value for the same input.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{BenchmarkError, DimensionRequirement, Result};
use crate::registry::FunctionId;

/// Lower and upper limit of the uniform distribution for `a` and `b`.
const COEFFICIENT_RANGE: (f64, f64) = (-100.0, 100.0);

/// Fixed coefficients of one Fletcher-Powell instance.
///
/// The target vector `A` depends only on the coefficients; it is computed
/// on construction and rebuilt on deserialization, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoefficientsRepr", into = "CoefficientsRepr")]
pub struct FletcherPowellCoefficients {
    a: Array2<f64>,
    b: Array2<f64>,
    alpha: Array1<f64>,
    target: Array1<f64>,
}

/// Serialized form: the three drawn arrays only.
#[derive(Serialize, Deserialize)]
struct CoefficientsRepr {
    a: Array2<f64>,
    b: Array2<f64>,
    alpha: Array1<f64>,
}

impl TryFrom<CoefficientsRepr> for FletcherPowellCoefficients {
    type Error = BenchmarkError;

    fn try_from(repr: CoefficientsRepr) -> Result<Self> {
        Self::new(repr.a, repr.b, repr.alpha)
    }
}

impl From<FletcherPowellCoefficients> for CoefficientsRepr {
    fn from(c: FletcherPowellCoefficients) -> Self {
        Self {
            a: c.a,
            b: c.b,
            alpha: c.alpha,
        }
    }
}

impl FletcherPowellCoefficients {
    /// Build from explicit matrices; `a` and `b` must be `n x n` and `alpha`
    /// of length `n`.
    pub fn new(a: Array2<f64>, b: Array2<f64>, alpha: Array1<f64>) -> Result<Self> {
        let n = alpha.len();
        let mut coefficients = Self {
            a,
            b,
            alpha,
            target: Array1::zeros(n),
        };
        coefficients.check_order(n)?;
        coefficients.target = coefficients.project(&coefficients.alpha);
        Ok(coefficients)
    }

    /// Draw `a, b ~ U(-100, 100)` and set `alpha = linspace(-pi, pi, n)`.
    ///
    /// With `Some(seed)` the result is reproducible; with `None` the generator
    /// is seeded from the thread RNG.
    pub fn generate(n: usize, seed: Option<u64>) -> Result<Self> {
        FunctionId::FletcherPowell.check_dimension(n)?;
        let mut rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };
        let (lo, hi) = COEFFICIENT_RANGE;
        let a = Array2::from_shape_fn((n, n), |_| rng.random_range(lo..hi));
        let b = Array2::from_shape_fn((n, n), |_| rng.random_range(lo..hi));
        let alpha = Array1::linspace(-PI, PI, n);
        log::debug!(
            "generated Fletcher-Powell coefficients: n={}, seed={:?}",
            n,
            seed
        );
        Self::new(a, b, alpha)
    }

    /// Problem dimension `n`.
    pub fn order(&self) -> usize {
        self.alpha.len()
    }

    /// Matrix multiplying the sines.
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }

    /// Matrix multiplying the cosines.
    pub fn b(&self) -> &Array2<f64> {
        &self.b
    }

    /// Phase vector; the global minimum (0) sits at `x = alpha`.
    pub fn alpha(&self) -> &Array1<f64> {
        &self.alpha
    }

    /// `A = a sin(alpha) + b cos(alpha)`, fixed for the instance.
    pub fn target(&self) -> &Array1<f64> {
        &self.target
    }

    /// Fails unless every coefficient has the shape required for order `n`.
    pub(crate) fn check_order(&self, n: usize) -> Result<()> {
        let consistent = self.a.dim() == (n, n) && self.b.dim() == (n, n) && self.alpha.len() == n;
        if consistent {
            Ok(())
        } else if self.a.dim() == self.b.dim()
            && self.a.nrows() == self.a.ncols()
            && self.alpha.len() == self.a.nrows()
        {
            // well-formed instance, wrong input length
            Err(BenchmarkError::InvalidDimension {
                function: FunctionId::FletcherPowell,
                requirement: DimensionRequirement::Exactly(self.order()),
                actual: n,
            })
        } else {
            Err(BenchmarkError::InvalidParameter {
                name: "fletcher_powell",
                reason: format!(
                    "inconsistent shapes: a {:?}, b {:?}, alpha {}",
                    self.a.dim(),
                    self.b.dim(),
                    self.alpha.len()
                ),
            })
        }
    }

    /// `sum_j a_ij sin(v_j) + b_ij cos(v_j)` for every row `i`.
    fn project(&self, v: &Array1<f64>) -> Array1<f64> {
        self.a.dot(&v.mapv(f64::sin)) + self.b.dot(&v.mapv(f64::cos))
    }
}

/// Fletcher-Powell function - multimodal, periodic, non-separable
///
/// `f(x) = sum_i (A_i - B_i)^2` with `A = a sin(alpha) + b cos(alpha)` and
/// `B = a sin(x) + b cos(x)`.
///
/// Global minimum: f(x) = 0 at x = alpha
/// Bounds: x_i in [-pi, pi]
pub fn fletcher_powell(x: &Array1<f64>, coefficients: &FletcherPowellCoefficients) -> Result<f64> {
    FunctionId::FletcherPowell.check_dimension(x.len())?;
    coefficients.check_order(x.len())?;
    let actual = coefficients.project(x);
    Ok((coefficients.target() - &actual).mapv(|d| d.powi(2)).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let c1 = FletcherPowellCoefficients::generate(4, Some(42)).unwrap();
        let c2 = FletcherPowellCoefficients::generate(4, Some(42)).unwrap();
        let c3 = FletcherPowellCoefficients::generate(4, Some(43)).unwrap();
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
        assert!(c1.a().iter().all(|&v| (-100.0..100.0).contains(&v)));
        assert!((c1.alpha()[0] + PI).abs() < 1e-12);
        assert!((c1.alpha()[3] - PI).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_at_alpha() {
        let c = FletcherPowellCoefficients::generate(5, Some(7)).unwrap();
        let x = c.alpha().clone();
        assert_eq!(fletcher_powell(&x, &c).unwrap(), 0.0);

        let shifted = x.mapv(|v| v + 0.3);
        assert!(fletcher_powell(&shifted, &c).unwrap() > 0.0);
    }

    #[test]
    fn test_known_small_instance() {
        // n = 1: alpha = [-pi], f(x) = (a sin(-pi) + b cos(-pi) - a sin x - b cos x)^2
        let c = FletcherPowellCoefficients::new(
            Array2::from_elem((1, 1), 2.0),
            Array2::from_elem((1, 1), 3.0),
            Array1::from_vec(vec![-PI]),
        )
        .unwrap();
        let x = Array1::from_vec(vec![0.0]);
        let expected = (2.0 * (-PI).sin() + 3.0 * (-PI).cos() - 3.0f64).powi(2);
        assert!((fletcher_powell(&x, &c).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_target_survives_serialization() {
        let c = FletcherPowellCoefficients::generate(3, Some(11)).unwrap();
        let expected = c.a().dot(&c.alpha().mapv(f64::sin)) + c.b().dot(&c.alpha().mapv(f64::cos));
        assert_eq!(c.target(), &expected);

        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("target"));
        let restored: FletcherPowellCoefficients = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, c);

        let x = Array1::from_vec(vec![0.5, -1.0, 2.0]);
        assert_eq!(
            fletcher_powell(&x, &restored).unwrap(),
            fletcher_powell(&x, &c).unwrap()
        );
    }

    #[test]
    fn test_inconsistent_shapes_rejected_on_deserialization() {
        let json = r#"{"a":{"v":1,"dim":[1,1],"data":[1.0]},"b":{"v":1,"dim":[2,2],"data":[1.0,2.0,3.0,4.0]},"alpha":{"v":1,"dim":[1],"data":[0.0]}}"#;
        assert!(serde_json::from_str::<FletcherPowellCoefficients>(json).is_err());
    }

    #[test]
    fn test_shape_checks() {
        let bad = FletcherPowellCoefficients::new(
            Array2::zeros((2, 2)),
            Array2::zeros((3, 3)),
            Array1::zeros(2),
        );
        assert!(matches!(bad, Err(BenchmarkError::InvalidParameter { .. })));

        let c = FletcherPowellCoefficients::generate(3, Some(1)).unwrap();
        let err = fletcher_powell(&Array1::zeros(2), &c).unwrap_err();
        assert!(err.is_dimension_error());
    }
}
