//! # Equilibrium
//!
//! Participation game for DemCoin incentives: citizens decide whether to
//! contribute to a collective task, and their payoff depends on how many
//! others contribute.
//!
//! ## Solving
//!
//! Iterated best response from all-ignore until the participation rate moves
//! by less than 0.001, or 20 iterations, whichever first:
//!
//! ```text
//! r₀ = 0
//! rₖ₊₁ = |{ i : U_i(participate | rₖ) > 0 }| / N
//! ```
//!
//! ## Optimizing
//!
//! Grid search over hourly rate × success bonus, scored by
//! `participation% × avg_quality − cost / 1000`.

pub mod config;
pub mod optimizer;
pub mod population;
pub mod solver;
pub mod utility;

use demcoin_common::{BestParameters, IncentiveConfig, Result, RoundResult, SweepReport};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::SimulatorSettings;
use crate::optimizer::GridSearch;
use crate::population::Population;
use crate::solver::EquilibriumSolver;

/// Crate version
pub const EQUILIBRIUM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Population plus the incentive configuration it is solved under
#[derive(Debug, Clone)]
pub struct Simulator {
    population: Population,
    config: IncentiveConfig,
    solver: EquilibriumSolver,
    search: GridSearch,
}

impl Simulator {
    /// Generate `num_citizens` agents from a seeded `StdRng`
    pub fn new(num_citizens: usize, config: IncentiveConfig, seed: u64) -> Result<Self> {
        Self::with_rng(num_citizens, config, &mut StdRng::seed_from_u64(seed))
    }

    /// Generate `num_citizens` agents from a caller-supplied random source
    pub fn with_rng<R: Rng + ?Sized>(
        num_citizens: usize,
        config: IncentiveConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let population = Population::generate(num_citizens, rng)?;
        Self::from_population(population, config)
    }

    /// Wrap an existing population
    pub fn from_population(population: Population, config: IncentiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            population,
            config,
            solver: EquilibriumSolver::default(),
            search: GridSearch::default(),
        })
    }

    /// Build from loaded settings; no seed means OS entropy
    pub fn from_settings(settings: &SimulatorSettings) -> Result<Self> {
        settings.validate()?;
        let config = settings.incentive_config();
        match settings.seed {
            Some(seed) => Self::new(settings.num_citizens, config, seed),
            None => Self::with_rng(settings.num_citizens, config, &mut StdRng::from_entropy()),
        }
    }

    /// Replace the grid search used by [`Simulator::optimize_parameters`]
    pub fn with_search(mut self, search: GridSearch) -> Self {
        self.search = search;
        self
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn config(&self) -> &IncentiveConfig {
        &self.config
    }

    /// Swap in a new configuration; the population is kept
    pub fn set_config(&mut self, config: IncentiveConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// One equilibrium solve under the current configuration
    pub fn simulate_round(&self) -> RoundResult {
        self.solver.solve(&self.population, &self.config)
    }

    /// Best grid point; the simulator's own configuration is left as it was
    pub fn optimize_parameters(&self) -> Result<BestParameters> {
        self.search.optimize(&self.population, &self.config)
    }

    /// Every grid point with its score, plus the winner
    pub fn sweep(&self) -> Result<SweepReport> {
        self.search.sweep(&self.population, &self.config)
    }
}
