//! Hyperparameter configuration shared by the dispatcher.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"quartic": {"power": 2}}` is a complete configuration. Partial blocks
//! work too: `{"penalty_2": {"k": 50.0}}` keeps the Penalty-2 `a` and `m`.

use serde::{Deserialize, Serialize};

use crate::error::{BenchmarkError, Result};
use crate::functions::penalty;
use crate::functions::{
    FletcherPowellCoefficients, MichalewiczParams, PenaltyParams, QuarticParams,
    ShekelFoxholeParams,
};

/// Named hyperparameters for every parameterized function in the suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionParams {
    /// Penalty-1 (`k=100, a=10, m=4`)
    #[serde(deserialize_with = "penalty::deserialize_penalty_1")]
    pub penalty_1: PenaltyParams,
    /// Penalty-2 (`k=100, a=5, m=4`)
    #[serde(deserialize_with = "penalty::deserialize_penalty_2")]
    pub penalty_2: PenaltyParams,
    /// Quartic (`power=4`)
    pub quartic: QuarticParams,
    /// Shekel's foxholes (`num_holes=5`)
    pub shekel_foxhole: ShekelFoxholeParams,
    /// Michalewicz (`m=2`)
    pub michalewicz: MichalewiczParams,
    /// Fixed Fletcher-Powell coefficients, required to evaluate that function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fletcher_powell: Option<FletcherPowellCoefficients>,
}

impl Default for FunctionParams {
    fn default() -> Self {
        Self {
            penalty_1: PenaltyParams::penalty_1(),
            penalty_2: PenaltyParams::penalty_2(),
            quartic: QuarticParams::default(),
            shekel_foxhole: ShekelFoxholeParams::default(),
            michalewicz: MichalewiczParams::default(),
            fletcher_powell: None,
        }
    }
}

impl FunctionParams {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: FunctionParams = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Serialize to pretty JSON, coefficients included.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Attach fixed Fletcher-Powell coefficients.
    pub fn with_fletcher_powell(mut self, coefficients: FletcherPowellCoefficients) -> Self {
        self.fletcher_powell = Some(coefficients);
        self
    }

    /// Check ranges that would make a formula meaningless.
    pub fn validate(&self) -> Result<()> {
        for (name, block) in [("penalty_1.a", &self.penalty_1), ("penalty_2.a", &self.penalty_2)] {
            if block.a.is_nan() || block.a < 0.0 {
                return Err(BenchmarkError::InvalidParameter {
                    name,
                    reason: format!("must be a non-negative number, got {}", block.a),
                });
            }
        }
        self.shekel_foxhole.validate()?;
        self.michalewicz.validate()?;
        Ok(())
    }
}
