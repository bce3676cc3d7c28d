//! Utility model
//!
//! Pure payoff functions for the two discrete actions. Participation pays a
//! quality-gated hourly reward plus an expected success bonus that grows with
//! the aggregate participation rate, minus the agent's time cost, plus civic
//! interest. Ignoring is the zero baseline.

use demcoin_common::{
    Agent, IncentiveConfig, BASE_SUCCESS_PROBABILITY, CIVIC_INTEREST_WEIGHT,
    PARTICIPATION_SUCCESS_WEIGHT,
};
use serde::{Deserialize, Serialize};

/// The two strategies available to an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Participate,
    #[default]
    Ignore,
}

impl Action {
    #[inline]
    pub fn is_participate(self) -> bool {
        matches!(self, Action::Participate)
    }
}

/// Probability the collective task succeeds: 30% floor, 90% at full participation
#[inline]
pub fn success_probability(participation_rate: f64) -> f64 {
    BASE_SUCCESS_PROBABILITY + participation_rate * PARTICIPATION_SUCCESS_WEIGHT
}

/// Hourly reward, all-or-nothing on the quality gate
#[inline]
pub fn immediate_reward(agent: &Agent, config: &IncentiveConfig) -> f64 {
    if agent.quality_score() >= config.quality_threshold {
        config.hourly_reward()
    } else {
        0.0
    }
}

/// Expected utility of participating at the given aggregate rate
pub fn utility_participate(agent: &Agent, participation_rate: f64, config: &IncentiveConfig) -> f64 {
    let expected_bonus = success_probability(participation_rate) * config.success_bonus;
    let time_cost_euros = agent.time_value() * config.time_cost;

    immediate_reward(agent, config) + expected_bonus - time_cost_euros
        + agent.civic_interest() * CIVIC_INTEREST_WEIGHT
}

/// Utility of ignoring: no reward, no cost
#[inline]
pub fn utility_ignore(_agent: &Agent) -> f64 {
    0.0
}

/// Utility-maximizing action; indifference resolves to `Ignore`
pub fn best_response(agent: &Agent, participation_rate: f64, config: &IncentiveConfig) -> Action {
    if utility_participate(agent, participation_rate, config) > utility_ignore(agent) {
        Action::Participate
    } else {
        Action::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IncentiveConfig {
        IncentiveConfig::default()
    }

    #[test]
    fn test_success_probability_bounds() {
        assert!((success_probability(0.0) - 0.3).abs() < 1e-12);
        assert!((success_probability(0.5) - 0.6).abs() < 1e-12);
        assert!((success_probability(1.0) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_quality_gate_is_all_or_nothing() {
        // skill 0.875 → quality exactly 7.0, passes the default threshold
        let passes = Agent::new(0, 0.875, 20.0, 0.0);
        let fails = Agent::new(1, 0.87, 20.0, 0.0);
        assert_eq!(immediate_reward(&passes, &config()), 45.0);
        assert_eq!(immediate_reward(&fails, &config()), 0.0);
    }

    #[test]
    fn test_utility_participate_formula() {
        let agent = Agent::new(0, 1.0, 20.0, 0.5);
        // 45 + (0.3 + 0.5 × 0.6) × 100 − 20 × 3 + 0.5 × 20 = 45 + 60 − 60 + 10
        let utility = utility_participate(&agent, 0.5, &config());
        assert!((utility - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_utility_rises_with_participation() {
        let agent = Agent::new(0, 0.6, 45.0, 0.1);
        let low = utility_participate(&agent, 0.0, &config());
        let high = utility_participate(&agent, 1.0, &config());
        assert!((high - low - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_utility_ignore_is_zero() {
        let agent = Agent::new(0, 1.5, 10.0, 1.0);
        assert_eq!(utility_ignore(&agent), 0.0);
    }

    #[test]
    fn test_indifference_resolves_to_ignore() {
        // 0 + 0.3 × 100 − 10 × 3 + 0 = 0
        let agent = Agent::new(0, 0.5, 10.0, 0.0);
        let config = config().with_demcoin_per_hour(0.0);
        assert_eq!(utility_participate(&agent, 0.0, &config), 0.0);
        assert_eq!(best_response(&agent, 0.0, &config), Action::Ignore);
        assert_eq!(best_response(&agent, 0.1, &config), Action::Participate);
    }
}
