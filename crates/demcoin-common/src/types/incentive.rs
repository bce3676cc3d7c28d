//! Incentive configuration read by the utility model
//!
//! A config is a plain value: every solve receives its own copy, so a sweep
//! never leaves a half-updated configuration behind.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The four incentive scalars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncentiveConfig {
    /// DemCoin paid per hour of work that passes the quality gate
    pub demcoin_per_hour: f64,

    /// Bonus paid to every participant when the collective task succeeds
    pub success_bonus: f64,

    /// Hours one participation takes
    pub time_cost: f64,

    /// Minimum quality score (0-12) that earns the hourly reward
    pub quality_threshold: f64,
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            demcoin_per_hour: 15.0,
            success_bonus: 100.0,
            time_cost: 3.0,
            quality_threshold: 7.0,
        }
    }
}

impl IncentiveConfig {
    pub fn new(
        demcoin_per_hour: f64,
        success_bonus: f64,
        time_cost: f64,
        quality_threshold: f64,
    ) -> Self {
        Self {
            demcoin_per_hour,
            success_bonus,
            time_cost,
            quality_threshold,
        }
    }

    /// Copy with a different hourly rate
    pub fn with_demcoin_per_hour(mut self, demcoin_per_hour: f64) -> Self {
        self.demcoin_per_hour = demcoin_per_hour;
        self
    }

    /// Copy with a different success bonus
    pub fn with_success_bonus(mut self, success_bonus: f64) -> Self {
        self.success_bonus = success_bonus;
        self
    }

    /// Copy with a different time cost
    pub fn with_time_cost(mut self, time_cost: f64) -> Self {
        self.time_cost = time_cost;
        self
    }

    /// Copy with a different quality threshold
    pub fn with_quality_threshold(mut self, quality_threshold: f64) -> Self {
        self.quality_threshold = quality_threshold;
        self
    }

    /// Immediate reward for work that passes the quality gate
    #[inline]
    pub fn hourly_reward(&self) -> f64 {
        self.demcoin_per_hour * self.time_cost
    }

    /// Check every scalar is finite and the time cost is non-negative
    ///
    /// Negative rates and bonuses are allowed; they model taxes and penalties.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("demcoin_per_hour", self.demcoin_per_hour),
            ("success_bonus", self.success_bonus),
            ("time_cost", self.time_cost),
            ("quality_threshold", self.quality_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.time_cost < 0.0 {
            return Err(ConfigError::Negative {
                name: "time_cost",
                value: self.time_cost,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for IncentiveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IncentiveConfig(rate={}/h, bonus={}, time={}h, threshold={})",
            self.demcoin_per_hour, self.success_bonus, self.time_cost, self.quality_threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IncentiveConfig::default();
        assert_eq!(config.demcoin_per_hour, 15.0);
        assert_eq!(config.success_bonus, 100.0);
        assert_eq!(config.time_cost, 3.0);
        assert_eq!(config.quality_threshold, 7.0);
        assert_eq!(config.hourly_reward(), 45.0);
    }

    #[test]
    fn test_builders_return_copies() {
        let base = IncentiveConfig::default();
        let tuned = base.with_demcoin_per_hour(25.0).with_success_bonus(200.0);
        assert_eq!(base.demcoin_per_hour, 15.0);
        assert_eq!(tuned.demcoin_per_hour, 25.0);
        assert_eq!(tuned.success_bonus, 200.0);
        assert_eq!(tuned.time_cost, base.time_cost);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = IncentiveConfig::default().with_success_bonus(f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "success_bonus", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_time_cost() {
        let config = IncentiveConfig::default().with_time_cost(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { name: "time_cost", .. })
        ));
    }

    #[test]
    fn test_validate_allows_penalties() {
        let config = IncentiveConfig::default().with_success_bonus(-100.0);
        assert!(config.validate().is_ok());
    }
}
