//! Agent - a simulated citizen with fixed random traits
//!
//! Traits are drawn once when the agent is created and never change; only the
//! agent's chosen action varies between solver iterations, and that lives in
//! the solver's participation state, not here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CIVIC_INTEREST_RANGE, QUALITY_SCALE, SKILL_RANGE, TIME_VALUE_RANGE};

/// Immutable citizen record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Sequence index, stable for the agent's lifetime
    id: usize,

    /// Quality multiplier (0.5 - 1.5)
    skill: f64,

    /// Opportunity cost of one hour in € (10 - 50)
    time_value: f64,

    /// Intrinsic motivation (0.0 - 1.0)
    civic_interest: f64,
}

impl Agent {
    /// Create an agent with explicit traits
    pub fn new(id: usize, skill: f64, time_value: f64, civic_interest: f64) -> Self {
        Self {
            id,
            skill,
            time_value,
            civic_interest,
        }
    }

    /// Draw an agent with uniformly distributed traits
    pub fn sample<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            skill: rng.gen_range(SKILL_RANGE.0..=SKILL_RANGE.1),
            time_value: rng.gen_range(TIME_VALUE_RANGE.0..=TIME_VALUE_RANGE.1),
            civic_interest: rng.gen_range(CIVIC_INTEREST_RANGE.0..=CIVIC_INTEREST_RANGE.1),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn skill(&self) -> f64 {
        self.skill
    }

    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    pub fn civic_interest(&self) -> f64 {
        self.civic_interest
    }

    /// Quality of this agent's work: `skill × 8`
    #[inline]
    pub fn quality_score(&self) -> f64 {
        self.skill * QUALITY_SCALE
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Agent(#{}, skill={:.2}, time_value={:.1}€/h, civic={:.2})",
            self.id, self.skill, self.time_value, self.civic_interest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sampled_traits_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for id in 0..500 {
            let agent = Agent::sample(id, &mut rng);
            assert_eq!(agent.id(), id);
            assert!((0.5..=1.5).contains(&agent.skill()));
            assert!((10.0..=50.0).contains(&agent.time_value()));
            assert!((0.0..=1.0).contains(&agent.civic_interest()));
        }
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let a = Agent::sample(0, &mut StdRng::seed_from_u64(42));
        let b = Agent::sample(0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_quality_score() {
        let agent = Agent::new(0, 0.875, 20.0, 0.5);
        assert!((agent.quality_score() - 7.0).abs() < 1e-12);
    }
}
