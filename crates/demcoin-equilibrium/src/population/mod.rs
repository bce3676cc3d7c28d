//! Agent population
//!
//! Generated once, then only ever read. Solves index into it by agent id.

use demcoin_common::{Agent, ConfigError, Result};
use rand::Rng;
use tracing::debug;

/// Fixed-size, immutable collection of agents with ids `0..len`
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Draw `size` agents from `rng`
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(ConfigError::EmptyPopulation.into());
        }

        let agents: Vec<Agent> = (0..size).map(|id| Agent::sample(id, rng)).collect();
        debug!(size, "generated population");

        Ok(Self { agents })
    }

    /// Build from explicit records; ids must run `0..len` in order
    pub fn from_agents(agents: Vec<Agent>) -> Result<Self> {
        if agents.is_empty() {
            return Err(ConfigError::EmptyPopulation.into());
        }

        if let Some((position, agent)) = agents
            .iter()
            .enumerate()
            .find(|(position, agent)| agent.id() != *position)
        {
            return Err(ConfigError::AgentIdMismatch {
                position,
                expected: position,
                actual: agent.id(),
            }
            .into());
        }

        Ok(Self { agents })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always false for a constructed population
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, id: usize) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
