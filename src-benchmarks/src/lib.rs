//! Optimization benchmark functions library
//!
//! This library provides the classic test functions used to benchmark
//! evolutionary, swarm and other gradient-free optimizers. Every function maps
//! an n-dimensional input to a scalar cost and is pure: no state, no
//! randomness at evaluation time, no mutation of the input.
//!
//! - **Unimodal**: sphere, rosenbrock, quartic, tenth power, Schwefel variants, absolute
//! - **Multimodal**: ackley, rastrigin, griewank, michalewicz, eggholder, sine envelope, ...
//! - **Penalized**: the two generalized penalty functions
//! - **Instance based**: Fletcher-Powell, whose random coefficients are drawn once
//!
//! Functions can be called directly, or by identifier through [`evaluate`]
//! with a [`FunctionParams`] configuration.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use optim_benchmarks::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x)?, 0.0);
//!
//! // Dimension problems are reported, not computed around
//! let short = Array1::from_vec(vec![1.0]);
//! assert!(rosenbrock(&short).unwrap_err().is_dimension_error());
//!
//! // Fletcher-Powell needs a fixed instance
//! let fp = BenchmarkInstance::fletcher_powell(3, Some(42))?;
//! let y = Array1::from_vec(vec![0.5, 0.5, 0.5]);
//! assert_eq!(fp.evaluate(&y)?, fp.evaluate(&y)?);
//!
//! // Get function metadata
//! let metadata = get_function_metadata();
//! let bounds = get_function_bounds("sphere");
//! # Ok::<(), BenchmarkError>(())
//! ```

use ndarray::Array2;
use std::collections::HashMap;
use std::f64::consts::PI;

pub mod error;
pub mod functions;
pub mod parallel_eval;
pub mod params;
pub mod registry;

pub use error::{BenchmarkError, DimensionRequirement, Result};
pub use functions::*;
pub use parallel_eval::{ParallelConfig, evaluate_population};
pub use params::FunctionParams;
pub use registry::{BenchmarkInstance, FunctionId, evaluate};

/// Metadata for a test function including bounds, known minima and other properties
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function identifier
    pub id: FunctionId,
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values, with default parameters
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Accepted input lengths
    pub requirement: DimensionRequirement,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

fn insert_metadata(
    metadata: &mut HashMap<String, FunctionMetadata>,
    id: FunctionId,
    bound: (f64, f64),
    global_minima: Vec<(Vec<f64>, f64)>,
    description: &str,
    multimodal: bool,
    dimensions: Vec<usize>,
) {
    let name = id.name().to_string();
    metadata.insert(
        name.clone(),
        FunctionMetadata {
            id,
            name,
            bounds: vec![bound; 2], // Default 2D, scalable unless `requirement` says otherwise
            global_minima,
            description: description.to_string(),
            multimodal,
            requirement: id.dimension_requirement(),
            dimensions,
        },
    );
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();
    let origin = vec![(vec![0.0, 0.0], 0.0)];

    insert_metadata(
        &mut metadata,
        FunctionId::Sphere,
        (-5.12, 5.12),
        origin.clone(),
        "N-dimensional quadratic bowl",
        false,
        vec![2, 5, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Ackley,
        (-32.768, 32.768),
        origin.clone(),
        "N-dimensional multimodal function with a deep central funnel",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::AckleyPairwise,
        (-30.0, 30.0),
        vec![],
        "Pairwise Ackley variant with the product of squares under the root",
        true,
        vec![2, 10],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Rosenbrock,
        (-2.048, 2.048),
        vec![(vec![1.0, 1.0], 0.0)],
        "N-dimensional banana valley",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::FletcherPowell,
        (-PI, PI),
        vec![], // at alpha, instance specific
        "Periodic function defined by random coefficient matrices fixed per instance",
        true,
        vec![2, 5, 10, 20],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Griewank,
        (-600.0, 600.0),
        origin.clone(),
        "N-dimensional multimodal function, nearly flat far from the origin",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Penalty1,
        (-50.0, 50.0),
        vec![(vec![-1.0, -1.0], 0.0)],
        "Generalized penalized function 1 (k=100, a=10, m=4)",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Penalty2,
        (-50.0, 50.0),
        vec![(vec![1.0, 1.0], 0.0)],
        "Generalized penalized function 2 (k=100, a=5, m=4)",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Quartic,
        (-1.28, 1.28),
        origin.clone(),
        "Weighted quartic without noise",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::TenthPower,
        (-5.12, 5.12),
        origin.clone(),
        "Sum of tenth powers, very flat bottom",
        false,
        vec![2, 10],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Rastrigin,
        (-5.12, 5.12),
        origin.clone(),
        "N-dimensional highly multimodal function",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::SchwefelDoubleSum,
        (-65.536, 65.536),
        origin.clone(),
        "Schwefel 1.2, sum of squared prefix sums",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::SchwefelMax,
        (-100.0, 100.0),
        origin.clone(),
        "Schwefel 2.21, largest absolute component",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::SchwefelAbsolute,
        (-10.0, 10.0),
        origin.clone(),
        "Schwefel 2.22, sum plus product of absolute values",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::SchwefelSine,
        (-500.0, 500.0),
        vec![(vec![420.9687, 420.9687], -837.9658)],
        "Schwefel 2.26, deceptive with the best basin far from the next best",
        true,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Step,
        (-100.0, 100.0),
        origin.clone(),
        "Discontinuous plateaus, zero on [-0.5, 0.5)^n",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Absolute,
        (-100.0, 100.0),
        origin.clone(),
        "Sum of absolute values",
        false,
        vec![2, 10, 30],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::ShekelFoxhole,
        (-65.536, 65.536),
        vec![(vec![-32.0, -32.0], 0.0)], // singular first well
        "Shekel's foxholes, 25 sharp wells on a 5x5 grid",
        true,
        vec![2],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Michalewicz,
        (0.0, PI),
        vec![],
        "Multimodal with steep ridges and valleys (m=2)",
        true,
        vec![2, 5, 10],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::SineEnvelope,
        (-100.0, 100.0),
        vec![],
        "Sine envelope, damped concentric ripples",
        true,
        vec![2, 10],
    );
    insert_metadata(
        &mut metadata,
        FunctionId::Eggholder,
        (-512.0, 512.0),
        vec![],
        "Chained Eggholder with positive terms",
        true,
        vec![2, 10],
    );

    metadata
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds for `n` dimensions
/// Returns default bounds if function is not found
pub fn get_function_bounds_vec(
    function_name: &str,
    n: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if !bounds.is_empty() => vec![bounds[0]; n],
        _ => vec![default_bounds; n],
    }
}
