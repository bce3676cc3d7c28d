//! Participation state: one action per agent id plus a running count

use crate::utility::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationState {
    actions: Vec<Action>,
    participating: usize,
}

impl ParticipationState {
    /// Everyone starts out ignoring
    pub fn new(size: usize) -> Self {
        Self {
            actions: vec![Action::Ignore; size],
            participating: 0,
        }
    }

    /// Record an agent's action; returns whether it changed
    pub fn set(&mut self, id: usize, action: Action) -> bool {
        let previous = std::mem::replace(&mut self.actions[id], action);
        match (previous, action) {
            (Action::Ignore, Action::Participate) => self.participating += 1,
            (Action::Participate, Action::Ignore) => self.participating -= 1,
            _ => return false,
        }
        true
    }

    pub fn action(&self, id: usize) -> Option<Action> {
        self.actions.get(id).copied()
    }

    pub fn is_participating(&self, id: usize) -> bool {
        self.action(id).is_some_and(Action::is_participate)
    }

    pub fn participating(&self) -> usize {
        self.participating
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Fraction of agents participating (0.0 - 1.0)
    pub fn rate(&self) -> f64 {
        if self.actions.is_empty() {
            return 0.0;
        }
        self.participating as f64 / self.actions.len() as f64
    }

    /// Ids of participating agents, ascending
    pub fn participants(&self) -> impl Iterator<Item = usize> + '_ {
        self.actions
            .iter()
            .enumerate()
            .filter(|(_, action)| action.is_participate())
            .map(|(id, _)| id)
    }
}
