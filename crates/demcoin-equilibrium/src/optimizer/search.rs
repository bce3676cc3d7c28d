//! Exhaustive grid search over incentive parameters
//!
//! ```text
//! cost  = participants × time_cost × demcoin_per_hour
//! score = participation% × avg_quality − cost / 1000
//! ```

use demcoin_common::{
    BestParameters, DemcoinError, GridEvaluation, IncentiveConfig, Result, RoundResult,
    SweepReport,
};
use tracing::{debug, info, instrument};

use super::grid::ParameterGrid;
use crate::population::Population;
use crate::solver::EquilibriumSolver;

/// Score one solve: participation × quality, minus DemCoin spend in thousands
pub fn welfare_score(result: &RoundResult, config: &IncentiveConfig) -> f64 {
    let cost = result.num_participating as f64 * config.time_cost * config.demcoin_per_hour;
    result.participation_rate * result.avg_quality - cost / 1000.0
}

/// Grid search driver
#[derive(Debug, Clone, Default)]
pub struct GridSearch {
    grid: ParameterGrid,
    solver: EquilibriumSolver,
}

impl GridSearch {
    pub fn new(grid: ParameterGrid, solver: EquilibriumSolver) -> Self {
        Self { grid, solver }
    }

    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// Best grid point only
    pub fn optimize(&self, population: &Population, base: &IncentiveConfig) -> Result<BestParameters> {
        Ok(self.sweep(population, base)?.best)
    }

    /// Solve every grid point against the same population
    ///
    /// The winner is the first point with the strictly greatest score.
    /// `base` is only read; each point gets its own config copy.
    #[instrument(skip(self, population), fields(agents = population.len(), points = self.grid.len()))]
    pub fn sweep(&self, population: &Population, base: &IncentiveConfig) -> Result<SweepReport> {
        self.grid.validate()?;
        base.validate()?;

        let mut evaluations = Vec::with_capacity(self.grid.len());
        let mut best: Option<GridEvaluation> = None;

        for config in self.grid.configs(base) {
            let result = self.solver.solve(population, &config);
            let evaluation = GridEvaluation {
                demcoin_per_hour: config.demcoin_per_hour,
                success_bonus: config.success_bonus,
                score: welfare_score(&result, &config),
                result,
            };
            debug!(
                demcoin_per_hour = evaluation.demcoin_per_hour,
                success_bonus = evaluation.success_bonus,
                score = evaluation.score,
                participation = result.participation_rate,
                "grid point evaluated"
            );

            if best.map_or(true, |current| evaluation.score > current.score) {
                info!(
                    demcoin_per_hour = evaluation.demcoin_per_hour,
                    success_bonus = evaluation.success_bonus,
                    score = evaluation.score,
                    "new best parameters"
                );
                best = Some(evaluation);
            }
            evaluations.push(evaluation);
        }

        let best = best
            .map(BestParameters::from)
            .ok_or_else(|| DemcoinError::Internal("sweep evaluated no grid points".to_string()))?;

        Ok(SweepReport { evaluations, best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demcoin_common::{Agent, ConfigError};

    fn small_population() -> Population {
        Population::from_agents(vec![
            Agent::new(0, 1.2, 15.0, 0.8),
            Agent::new(1, 0.9, 25.0, 0.4),
            Agent::new(2, 0.6, 35.0, 0.9),
            Agent::new(3, 1.4, 45.0, 0.1),
        ])
        .unwrap()
    }

    #[test]
    fn test_welfare_score() {
        let result = RoundResult {
            participation_rate: 50.0,
            num_participating: 500,
            avg_quality: 9.0,
            converged_iteration: 4,
        };
        let config = IncentiveConfig::default();
        // 50 × 9 − 500 × 3 × 15 / 1000
        assert!((welfare_score(&result, &config) - 427.5).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_covers_grid_in_order() {
        let report = GridSearch::default()
            .sweep(&small_population(), &IncentiveConfig::default())
            .unwrap();

        assert_eq!(report.len(), 16);
        assert_eq!(report.evaluations[0].demcoin_per_hour, 10.0);
        assert_eq!(report.evaluations[0].success_bonus, 50.0);
        assert_eq!(report.evaluations[4].demcoin_per_hour, 15.0);
        assert!(report
            .evaluations
            .iter()
            .all(|eval| eval.score <= report.best.score));
    }

    #[test]
    fn test_ties_keep_first_point() {
        // Nobody ever participates, so every point scores 0
        let population =
            Population::from_agents(vec![Agent::new(0, 0.5, 50.0, 0.0)]).unwrap();
        let base = IncentiveConfig::default().with_time_cost(10.0);
        let best = GridSearch::default().optimize(&population, &base).unwrap();

        assert_eq!(best.score, 0.0);
        assert_eq!(best.demcoin_per_hour, 10.0);
        assert_eq!(best.success_bonus, 50.0);
    }

    #[test]
    fn test_base_config_is_not_mutated() {
        let base = IncentiveConfig::default();
        let snapshot = base;
        GridSearch::default()
            .optimize(&small_population(), &base)
            .unwrap();
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let search = GridSearch::new(
            ParameterGrid::new(Vec::new(), vec![50.0]),
            EquilibriumSolver::default(),
        );
        let err = search
            .optimize(&small_population(), &IncentiveConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DemcoinError::Config(ConfigError::EmptyGrid("demcoin_per_hour"))
        ));
    }
}
