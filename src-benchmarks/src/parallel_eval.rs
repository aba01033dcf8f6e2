use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::error::Result;
use crate::registry::BenchmarkInstance;

/// Parallel evaluation configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None, // Use rayon's default (typically num_cpus)
        }
    }
}

/// Evaluate every row of a population with one benchmark instance
///
/// # Arguments
/// * `instance` - Benchmark to evaluate
/// * `population` - 2D array where each row is an individual
/// * `config` - Parallel configuration
///
/// # Returns
/// Fitness values in row order. The column count is checked against the
/// instance once, before any row is evaluated.
pub fn evaluate_population(
    instance: &BenchmarkInstance,
    population: &Array2<f64>,
    config: &ParallelConfig,
) -> Result<Array1<f64>> {
    instance.check_dimension(population.ncols())?;
    let npop = population.nrows();
    let eval_row = |i: usize| -> Result<f64> {
        let individual = population.row(i).to_owned();
        instance.evaluate(&individual)
    };

    let values: Vec<f64> = if !config.enabled || npop < 4 {
        // Sequential evaluation for small populations or when disabled
        (0..npop).map(eval_row).collect::<Result<Vec<f64>>>()?
    } else {
        let run = || {
            (0..npop)
                .into_par_iter()
                .map(eval_row)
                .collect::<Result<Vec<f64>>>()
        };
        match config.num_threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()?
                .install(run)?,
            None => run()?,
        }
    };

    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        log::warn!(
            "{}: {} of {} individuals evaluated to a non-finite value",
            instance.id,
            non_finite,
            npop
        );
    }

    Ok(Array1::from_vec(values))
}
