//! Candidate values swept by the grid search

use demcoin_common::{ConfigError, IncentiveConfig};
use serde::{Deserialize, Serialize};

/// Default hourly rates tried by a sweep
pub const DEFAULT_DEMCOIN_RATES: [f64; 4] = [10.0, 15.0, 20.0, 25.0];

/// Default success bonuses tried by a sweep
pub const DEFAULT_SUCCESS_BONUSES: [f64; 4] = [50.0, 100.0, 150.0, 200.0];

/// Cartesian product of hourly rates × success bonuses
///
/// `time_cost` and `quality_threshold` are never swept; every grid point
/// inherits them from the base configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    pub demcoin_rates: Vec<f64>,
    pub success_bonuses: Vec<f64>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            demcoin_rates: DEFAULT_DEMCOIN_RATES.to_vec(),
            success_bonuses: DEFAULT_SUCCESS_BONUSES.to_vec(),
        }
    }
}

impl ParameterGrid {
    pub fn new(demcoin_rates: Vec<f64>, success_bonuses: Vec<f64>) -> Self {
        Self {
            demcoin_rates,
            success_bonuses,
        }
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.demcoin_rates.len() * self.success_bonuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both axes non-empty and every candidate finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demcoin_rates.is_empty() {
            return Err(ConfigError::EmptyGrid("demcoin_per_hour"));
        }
        if self.success_bonuses.is_empty() {
            return Err(ConfigError::EmptyGrid("success_bonus"));
        }
        let candidates = self
            .demcoin_rates
            .iter()
            .map(|&value| ("demcoin_per_hour", value))
            .chain(self.success_bonuses.iter().map(|&value| ("success_bonus", value)));
        for (name, value) in candidates {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// One fresh config per grid point, hourly rate in the outer loop
    pub fn configs<'a>(
        &'a self,
        base: &'a IncentiveConfig,
    ) -> impl Iterator<Item = IncentiveConfig> + 'a {
        self.demcoin_rates.iter().flat_map(move |&rate| {
            self.success_bonuses.iter().map(move |&bonus| {
                base.with_demcoin_per_hour(rate).with_success_bonus(bonus)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_sixteen_points() {
        let grid = ParameterGrid::default();
        assert_eq!(grid.len(), 16);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_configs_order_and_inheritance() {
        let grid = ParameterGrid::default();
        let base = IncentiveConfig::new(99.0, 99.0, 2.5, 6.0);
        let configs: Vec<_> = grid.configs(&base).collect();

        assert_eq!(configs.len(), 16);
        assert_eq!(
            (configs[0].demcoin_per_hour, configs[0].success_bonus),
            (10.0, 50.0)
        );
        assert_eq!(
            (configs[1].demcoin_per_hour, configs[1].success_bonus),
            (10.0, 100.0)
        );
        assert_eq!(
            (configs[15].demcoin_per_hour, configs[15].success_bonus),
            (25.0, 200.0)
        );
        assert!(configs
            .iter()
            .all(|c| c.time_cost == 2.5 && c.quality_threshold == 6.0));
    }

    #[test]
    fn test_empty_axis_rejected() {
        let grid = ParameterGrid::new(vec![10.0], Vec::new());
        assert_eq!(grid.validate(), Err(ConfigError::EmptyGrid("success_bonus")));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_non_finite_candidate_rejected() {
        let grid = ParameterGrid::new(vec![10.0, f64::NAN], vec![50.0]);
        assert!(matches!(
            grid.validate(),
            Err(ConfigError::NonFinite {
                name: "demcoin_per_hour",
                ..
            })
        ));
    }
}
