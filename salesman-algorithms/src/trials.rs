use log::debug;
use rand::Rng;
use salesman_challenge::route_length;
use serde::{Deserialize, Serialize};

use crate::{genetic::GeneticOptimizer, genetic::Route, two_opt, Hyperparameters, Result};

/// Diagnostic record of a single trial.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub trial: usize,
    pub length: f64,
    pub improved: bool,
    pub best_length: f64,
    pub stall: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Stalled,
    Done,
}

/// Best route seen across trials together with the stall counter. Only changes
/// through `observe`, once per finished trial.
#[derive(Debug, Clone)]
pub struct TrialState {
    best_route: Option<Route>,
    best_length: f64,
    stall: usize,
    trial: usize,
}

impl Default for TrialState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrialState {
    pub fn new() -> Self {
        Self {
            best_route: None,
            best_length: f64::INFINITY,
            stall: 0,
            trial: 0,
        }
    }

    /// Records the outcome of a trial. A strictly shorter route becomes the new
    /// best and resets the stall counter to 0; anything else counts as a stall.
    pub fn observe(&mut self, route: Route, length: f64) -> TrialRecord {
        let improved = length < self.best_length;
        if improved {
            self.best_route = Some(route);
            self.best_length = length;
            self.stall = 0;
        } else {
            self.stall += 1;
        }
        let record = TrialRecord {
            trial: self.trial,
            length,
            improved,
            best_length: self.best_length,
            stall: self.stall,
        };
        self.trial += 1;
        record
    }

    pub fn phase(&self, stall_patience: usize) -> Phase {
        if self.stall >= stall_patience {
            Phase::Done
        } else if self.stall > 0 {
            Phase::Stalled
        } else {
            Phase::Searching
        }
    }

    pub fn best_route(&self) -> Option<&[usize]> {
        self.best_route.as_deref()
    }

    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    pub fn stall(&self) -> usize {
        self.stall
    }

    /// Number of trials observed so far.
    pub fn trials(&self) -> usize {
        self.trial
    }

    pub fn into_best(self) -> Option<(Route, f64)> {
        let best_length = self.best_length;
        self.best_route.map(|route| (route, best_length))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrialOutcome {
    pub route: Route,
    pub length: f64,
    pub records: Vec<TrialRecord>,
}

/// Restarts genetic search plus 2-opt until `stall_patience` consecutive
/// trials fail to beat the best route, or `max_trials` trials have run.
#[derive(Debug, Clone, Copy)]
pub struct TrialController {
    pub optimizer: GeneticOptimizer,
    pub stall_patience: usize,
    pub max_trials: Option<usize>,
}

impl TrialController {
    pub fn new(params: &Hyperparameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            optimizer: GeneticOptimizer::from_hyperparameters(params)?,
            stall_patience: params.stall_patience,
            max_trials: params.max_trials,
        })
    }

    pub fn run_trial<R: Rng + ?Sized>(
        &self,
        state: &mut TrialState,
        distance_matrix: &[Vec<f64>],
        rng: &mut R,
    ) -> TrialRecord {
        let candidate = self.optimizer.run(distance_matrix, rng);
        let refined = two_opt::refine(&candidate, distance_matrix);
        let length = route_length(&refined, distance_matrix);
        state.observe(refined, length)
    }

    pub fn is_done(&self, state: &TrialState) -> bool {
        state.phase(self.stall_patience) == Phase::Done
            || self.max_trials.is_some_and(|max| state.trials() >= max)
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        distance_matrix: &[Vec<f64>],
        rng: &mut R,
    ) -> Result<TrialOutcome> {
        let num_points = distance_matrix.len();
        if num_points < 2 || distance_matrix.iter().any(|row| row.len() != num_points) {
            return Err(salesman_challenge::Error::invalid_input(format!(
                "distance matrix must be square with at least 2 points, got {} rows",
                num_points
            ))
            .into());
        }
        let mut state = TrialState::new();
        let mut records = Vec::new();
        loop {
            let record = self.run_trial(&mut state, distance_matrix, rng);
            debug!(
                "trial {}: length {:.3}, best {:.3}, stall {}/{}",
                record.trial, record.length, record.best_length, record.stall, self.stall_patience
            );
            records.push(record);
            if self.is_done(&state) {
                break;
            }
        }

        let (route, length) = state
            .into_best()
            .ok_or_else(|| {
                salesman_challenge::Error::invalid_input("no trial produced a finite-length route")
            })?;
        Ok(TrialOutcome {
            route,
            length,
            records,
        })
    }
}
