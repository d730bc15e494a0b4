use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Hyperparameters {
    pub generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    /// Consecutive non-improving trials tolerated before the search stops.
    pub stall_patience: usize,
    /// Hard cap on the number of trials, off by default.
    pub max_trials: Option<usize>,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 20,
            mutation_rate: 0.2,
            stall_patience: 20,
            max_trials: None,
        }
    }
}

impl Hyperparameters {
    /// Merges `hyperparameters` over the defaults and validates the result.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Result<Self> {
        let mut merged =
            serde_json::to_value(Self::default()).map_err(|e| Error::configuration(e.to_string()))?;
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged, hyperparameters) {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }
        let params: Self = serde_json::from_value(merged)
            .map_err(|e| Error::configuration(format!("invalid hyperparameters: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(Error::configuration("generations must be at least 1"));
        }
        if self.population_size < 2 {
            return Err(Error::configuration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::configuration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.stall_patience == 0 {
            return Err(Error::configuration("stall_patience must be at least 1"));
        }
        if self.max_trials == Some(0) {
            return Err(Error::configuration("max_trials must be at least 1"));
        }
        Ok(())
    }
}
