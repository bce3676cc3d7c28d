//! Iterated best response to a fixed point in participation rate
//!
//! Every iteration is a simultaneous move: all agents react to the rate left
//! by the previous iteration, never to choices made earlier in the same pass.
//! The solve stops once the rate moves by less than the tolerance, or after
//! the iteration cap, whichever comes first. Hitting the cap is not an error.

use demcoin_common::{IncentiveConfig, RoundResult, CONVERGENCE_TOLERANCE, MAX_ITERATIONS};
use tracing::{debug, info, instrument, warn};

use super::state::ParticipationState;
use crate::population::Population;
use crate::utility::best_response;

/// Solver limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl Default for EquilibriumSolver {
    fn default() -> Self {
        Self {
            tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Terminal state of one solve
#[derive(Debug, Clone)]
pub struct Equilibrium {
    /// Final action of every agent
    pub state: ParticipationState,
    /// Rate every agent responded to in the last pass
    pub previous_rate: f64,
    /// Iterations actually run
    pub iterations: u32,
    /// Whether the last iteration moved the rate by less than the tolerance
    pub converged: bool,
}

impl Equilibrium {
    /// Equilibrium participation rate (0.0 - 1.0)
    pub fn rate(&self) -> f64 {
        self.state.rate()
    }

    /// Summarize into a round result; quality is averaged over participants only
    pub fn summarize(&self, population: &Population) -> RoundResult {
        let num_participating = self.state.participating();
        let total_quality: f64 = self
            .state
            .participants()
            .filter_map(|id| population.get(id))
            .map(|agent| agent.quality_score())
            .sum();

        RoundResult {
            participation_rate: self.rate() * 100.0,
            num_participating,
            avg_quality: total_quality / num_participating.max(1) as f64,
            converged_iteration: self.iterations,
        }
    }
}

impl EquilibriumSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom limits; a cap of zero is raised to one so every solve runs at least once
    ///
    /// `RoundResult::hit_iteration_cap` only knows the default cap, so check
    /// `Equilibrium::converged` from [`run`](Self::run) under custom limits.
    pub fn with_limits(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations: max_iterations.max(1),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Solve and summarize
    pub fn solve(&self, population: &Population, config: &IncentiveConfig) -> RoundResult {
        self.run(population, config).summarize(population)
    }

    /// Iterate best responses from all-ignore until the rate settles
    #[instrument(skip(self, population), fields(agents = population.len()))]
    pub fn run(&self, population: &Population, config: &IncentiveConfig) -> Equilibrium {
        let size = population.len();
        let mut state = ParticipationState::new(size);
        let mut iterations = 0;
        let mut converged = false;
        let mut previous_rate = 0.0;

        while iterations < self.max_iterations {
            iterations += 1;

            let stale_rate = state.rate();
            previous_rate = stale_rate;
            let mut changed = 0usize;

            for agent in population {
                if state.set(agent.id(), best_response(agent, stale_rate, config)) {
                    changed += 1;
                }
            }

            let delta = (state.rate() - stale_rate).abs();
            debug!(
                iteration = iterations,
                rate = state.rate(),
                delta,
                changed,
                "best-response pass"
            );

            if delta < self.tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            info!(
                iterations,
                rate = state.rate(),
                "participation equilibrium reached"
            );
        } else {
            warn!(
                iterations,
                rate = state.rate(),
                "iteration cap reached before convergence"
            );
        }

        Equilibrium {
            state,
            previous_rate,
            iterations,
            converged,
        }
    }
}
