//! Function identifiers, dispatch by identifier and bound benchmark instances.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{BenchmarkError, DimensionRequirement, Result};
use crate::functions::*;
use crate::params::FunctionParams;

/// Identifier of a benchmark function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionId {
    Sphere,
    Ackley,
    AckleyPairwise,
    Rosenbrock,
    FletcherPowell,
    Griewank,
    #[serde(rename = "penalty_1")]
    Penalty1,
    #[serde(rename = "penalty_2")]
    Penalty2,
    Quartic,
    TenthPower,
    Rastrigin,
    SchwefelDoubleSum,
    SchwefelMax,
    SchwefelAbsolute,
    SchwefelSine,
    Step,
    Absolute,
    ShekelFoxhole,
    Michalewicz,
    SineEnvelope,
    Eggholder,
}

impl FunctionId {
    /// Every function in the suite.
    pub const ALL: [FunctionId; 21] = [
        FunctionId::Sphere,
        FunctionId::Ackley,
        FunctionId::AckleyPairwise,
        FunctionId::Rosenbrock,
        FunctionId::FletcherPowell,
        FunctionId::Griewank,
        FunctionId::Penalty1,
        FunctionId::Penalty2,
        FunctionId::Quartic,
        FunctionId::TenthPower,
        FunctionId::Rastrigin,
        FunctionId::SchwefelDoubleSum,
        FunctionId::SchwefelMax,
        FunctionId::SchwefelAbsolute,
        FunctionId::SchwefelSine,
        FunctionId::Step,
        FunctionId::Absolute,
        FunctionId::ShekelFoxhole,
        FunctionId::Michalewicz,
        FunctionId::SineEnvelope,
        FunctionId::Eggholder,
    ];

    /// Snake-case name, identical to the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionId::Sphere => "sphere",
            FunctionId::Ackley => "ackley",
            FunctionId::AckleyPairwise => "ackley_pairwise",
            FunctionId::Rosenbrock => "rosenbrock",
            FunctionId::FletcherPowell => "fletcher_powell",
            FunctionId::Griewank => "griewank",
            FunctionId::Penalty1 => "penalty_1",
            FunctionId::Penalty2 => "penalty_2",
            FunctionId::Quartic => "quartic",
            FunctionId::TenthPower => "tenth_power",
            FunctionId::Rastrigin => "rastrigin",
            FunctionId::SchwefelDoubleSum => "schwefel_double_sum",
            FunctionId::SchwefelMax => "schwefel_max",
            FunctionId::SchwefelAbsolute => "schwefel_absolute",
            FunctionId::SchwefelSine => "schwefel_sine",
            FunctionId::Step => "step",
            FunctionId::Absolute => "absolute",
            FunctionId::ShekelFoxhole => "shekel_foxhole",
            FunctionId::Michalewicz => "michalewicz",
            FunctionId::SineEnvelope => "sine_envelope",
            FunctionId::Eggholder => "eggholder",
        }
    }

    /// Input lengths the function accepts.
    ///
    /// Formulas that pair `x[i]` with `x[i + 1]` need two components. Shekel's
    /// foxholes is defined on the plane only.
    pub fn dimension_requirement(&self) -> DimensionRequirement {
        match self {
            FunctionId::AckleyPairwise
            | FunctionId::Rosenbrock
            | FunctionId::SineEnvelope
            | FunctionId::Eggholder => DimensionRequirement::AtLeast(2),
            FunctionId::ShekelFoxhole => DimensionRequirement::Exactly(2),
            _ => DimensionRequirement::AtLeast(1),
        }
    }

    /// Fails with [`BenchmarkError::InvalidDimension`] unless `n` is accepted.
    pub fn check_dimension(&self, n: usize) -> Result<()> {
        let requirement = self.dimension_requirement();
        if requirement.is_satisfied_by(n) {
            Ok(())
        } else {
            Err(BenchmarkError::InvalidDimension {
                function: *self,
                requirement,
                actual: n,
            })
        }
    }

    /// Whether any permutation of the input leaves the value unchanged.
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            FunctionId::Sphere
                | FunctionId::TenthPower
                | FunctionId::Absolute
                | FunctionId::Rastrigin
                | FunctionId::SchwefelMax
                | FunctionId::SchwefelAbsolute
        )
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionId {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        FunctionId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| BenchmarkError::UnknownFunction(s.to_string()))
    }
}

/// Evaluate the function `id` at `x` with the given hyperparameters.
///
/// Only the fields of `params` relevant to `id` are read.
///
/// # Errors
///
/// - [`BenchmarkError::InvalidDimension`] if `x` has a length `id` does not accept
/// - [`BenchmarkError::MissingCoefficients`] for Fletcher-Powell without coefficients
/// - [`BenchmarkError::InvalidParameter`] for out-of-range hyperparameters
///
/// # Example
///
/// ```rust
/// use ndarray::Array1;
/// use optim_benchmarks::{evaluate, FunctionId, FunctionParams};
///
/// let x = Array1::from_vec(vec![1.0, 2.0]);
/// let value = evaluate(FunctionId::Quartic, &x, &FunctionParams::default())?;
/// assert_eq!(value, 33.0);
/// # Ok::<(), optim_benchmarks::BenchmarkError>(())
/// ```
pub fn evaluate(id: FunctionId, x: &Array1<f64>, params: &FunctionParams) -> Result<f64> {
    log::trace!("evaluate {} with n={}", id, x.len());
    match id {
        FunctionId::Sphere => sphere(x),
        FunctionId::Ackley => ackley(x),
        FunctionId::AckleyPairwise => ackley_pairwise(x),
        FunctionId::Rosenbrock => rosenbrock(x),
        FunctionId::FletcherPowell => {
            let coefficients = params
                .fletcher_powell
                .as_ref()
                .ok_or(BenchmarkError::MissingCoefficients { function: id })?;
            fletcher_powell(x, coefficients)
        }
        FunctionId::Griewank => griewank(x),
        FunctionId::Penalty1 => penalty_1(x, &params.penalty_1),
        FunctionId::Penalty2 => penalty_2(x, &params.penalty_2),
        FunctionId::Quartic => quartic(x, &params.quartic),
        FunctionId::TenthPower => tenth_power(x),
        FunctionId::Rastrigin => rastrigin(x),
        FunctionId::SchwefelDoubleSum => schwefel_double_sum(x),
        FunctionId::SchwefelMax => schwefel_max(x),
        FunctionId::SchwefelAbsolute => schwefel_absolute(x),
        FunctionId::SchwefelSine => schwefel_sine(x),
        FunctionId::Step => step(x),
        FunctionId::Absolute => absolute(x),
        FunctionId::ShekelFoxhole => shekel_foxhole(x, &params.shekel_foxhole),
        FunctionId::Michalewicz => michalewicz(x, &params.michalewicz),
        FunctionId::SineEnvelope => sine_envelope(x),
        FunctionId::Eggholder => eggholder(x),
    }
}

/// A benchmark function bound to fixed hyperparameters.
///
/// Construction is the only place where anything is chosen (for
/// Fletcher-Powell, the random coefficients). Evaluation is a pure function
/// of the input afterwards, so an instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkInstance {
    /// Which function to evaluate
    pub id: FunctionId,
    /// Hyperparameters used on every call
    #[serde(default)]
    pub params: FunctionParams,
}

impl BenchmarkInstance {
    /// Instance with default hyperparameters.
    ///
    /// Fletcher-Powell instances built this way have no coefficients and
    /// fail on evaluation; use [`BenchmarkInstance::fletcher_powell`].
    pub fn new(id: FunctionId) -> Self {
        Self {
            id,
            params: FunctionParams::default(),
        }
    }

    /// Instance with explicit hyperparameters, validated up front.
    pub fn with_params(id: FunctionId, params: FunctionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { id, params })
    }

    /// Fletcher-Powell instance of order `n` with freshly drawn coefficients.
    ///
    /// The same `seed` always yields the same instance.
    pub fn fletcher_powell(n: usize, seed: Option<u64>) -> Result<Self> {
        let coefficients = FletcherPowellCoefficients::generate(n, seed)?;
        Ok(Self {
            id: FunctionId::FletcherPowell,
            params: FunctionParams::default().with_fletcher_powell(coefficients),
        })
    }

    /// Evaluate the instance at `x`.
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        evaluate(self.id, x, &self.params)
    }

    /// Fails unless vectors of length `n` can be evaluated by this instance.
    pub fn check_dimension(&self, n: usize) -> Result<()> {
        self.id.check_dimension(n)?;
        if self.id == FunctionId::FletcherPowell {
            let coefficients = self
                .params
                .fletcher_powell
                .as_ref()
                .ok_or(BenchmarkError::MissingCoefficients { function: self.id })?;
            coefficients.check_order(n)?;
        }
        Ok(())
    }

    /// Plain objective closure for optimizers working on `n`-vectors.
    ///
    /// The dimension is checked once here. A later call with a vector of
    /// another length logs a warning and returns NaN.
    pub fn objective(&self, n: usize) -> Result<impl Fn(&Array1<f64>) -> f64 + Send + Sync + '_> {
        self.check_dimension(n)?;
        Ok(move |x: &Array1<f64>| match self.evaluate(x) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{}: objective returned NaN: {}", self.id, e);
                f64::NAN
            }
        })
    }
}
