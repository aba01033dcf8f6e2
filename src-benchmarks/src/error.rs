//! Error types for benchmark evaluation.
//!
//! Dimension problems are detected before any arithmetic and reported as
//! [`BenchmarkError::InvalidDimension`]. Numerical trouble inside a formula is
//! not an error: it shows up as NaN or infinity in the returned value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::FunctionId;

/// Input length a benchmark function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionRequirement {
    /// Any length `>= n`.
    AtLeast(usize),
    /// Exactly `n` components.
    Exactly(usize),
}

impl DimensionRequirement {
    /// Returns `true` if a vector of length `n` satisfies the requirement.
    pub fn is_satisfied_by(&self, n: usize) -> bool {
        match *self {
            DimensionRequirement::AtLeast(min) => n >= min,
            DimensionRequirement::Exactly(len) => n == len,
        }
    }

    /// Smallest accepted length.
    pub fn min_len(&self) -> usize {
        match *self {
            DimensionRequirement::AtLeast(n) | DimensionRequirement::Exactly(n) => n,
        }
    }
}

impl fmt::Display for DimensionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionRequirement::AtLeast(n) => write!(f, "at least {}", n),
            DimensionRequirement::Exactly(n) => write!(f, "exactly {}", n),
        }
    }
}

/// Errors that can occur while configuring or evaluating a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Input vector length does not fit the function.
    #[error("{function}: invalid dimension {actual}, expected {requirement} components")]
    InvalidDimension {
        /// Function that rejected the input
        function: FunctionId,
        /// What the function accepts
        requirement: DimensionRequirement,
        /// Length actually supplied
        actual: usize,
    },

    /// Fletcher-Powell was evaluated without fixed coefficients.
    #[error("{function}: no coefficients supplied for this instance")]
    MissingCoefficients {
        /// Function that needs coefficients
        function: FunctionId,
    },

    /// A hyperparameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the configuration
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A function name did not match any known benchmark.
    #[error("unknown benchmark function: {0}")]
    UnknownFunction(String),

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A dedicated thread pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A specialized `Result` type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;

impl BenchmarkError {
    /// Returns `true` for [`BenchmarkError::InvalidDimension`].
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, BenchmarkError::InvalidDimension { .. })
    }

    /// Returns `true` if the error comes from hyperparameters or configuration.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            BenchmarkError::MissingCoefficients { .. }
                | BenchmarkError::InvalidParameter { .. }
                | BenchmarkError::InvalidConfig(_)
        )
    }
}
