use rand::Rng;
use salesman_challenge::Challenge;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{trials::TrialController, trials::TrialRecord, Hyperparameters, Result};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Outcome {
    pub route: Vec<usize>,
    pub labels: Vec<String>,
    pub length: f64,
    pub trials: Vec<TrialRecord>,
}

pub struct Solver;

impl Solver {
    pub fn solve_challenge<R: Rng + ?Sized>(
        challenge: &Challenge,
        hyperparameters: &Option<Map<String, Value>>,
        rng: &mut R,
    ) -> Result<Outcome> {
        let params = Hyperparameters::initialize(hyperparameters)?;
        Self::solve_with(challenge, &params, rng)
    }

    pub fn solve_with<R: Rng + ?Sized>(
        challenge: &Challenge,
        params: &Hyperparameters,
        rng: &mut R,
    ) -> Result<Outcome> {
        let controller = TrialController::new(params)?;
        let outcome = controller.run(&challenge.distance_matrix, rng)?;
        Ok(Outcome {
            labels: challenge.labels(&outcome.route)?,
            route: outcome.route,
            length: outcome.length,
            trials: outcome.records,
        })
    }
}
