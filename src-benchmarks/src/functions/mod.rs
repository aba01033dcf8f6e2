//! Benchmark function implementations, one module per function
//!
//! Every function takes the input as `&Array1<f64>`, checks its length first and
//! returns `Result<f64>`. Parameterized functions take their parameter struct by
//! reference. Nothing here mutates its input or keeps state between calls.

pub mod absolute;
pub mod ackley;
pub mod ackley_pairwise;
pub mod eggholder;
pub mod fletcher_powell;
pub mod griewank;
pub mod michalewicz;
pub mod penalty;
pub mod penalty_1;
pub mod penalty_2;
pub mod quartic;
pub mod rastrigin;
pub mod rosenbrock;
pub mod schwefel_absolute;
pub mod schwefel_double_sum;
pub mod schwefel_max;
pub mod schwefel_sine;
pub mod shekel_foxhole;
pub mod sine_envelope;
pub mod sphere;
pub mod step;
pub mod tenth_power;

pub use absolute::absolute;
pub use ackley::ackley;
pub use ackley_pairwise::ackley_pairwise;
pub use eggholder::eggholder;
pub use fletcher_powell::{FletcherPowellCoefficients, fletcher_powell};
pub use griewank::griewank;
pub use michalewicz::{MichalewiczParams, michalewicz};
pub use penalty::{PenaltyParams, penalty_u};
pub use penalty_1::penalty_1;
pub use penalty_2::penalty_2;
pub use quartic::{QuarticParams, quartic};
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use schwefel_absolute::schwefel_absolute;
pub use schwefel_double_sum::schwefel_double_sum;
pub use schwefel_max::schwefel_max;
pub use schwefel_sine::schwefel_sine;
pub use shekel_foxhole::{MAX_HOLES, ShekelFoxholeParams, foxhole_grid, shekel_foxhole};
pub use sine_envelope::sine_envelope;
pub use sphere::sphere;
pub use step::step;
pub use tenth_power::tenth_power;
