//! Equilibrium solver module
pub mod fixed_point;
pub mod state;

pub use self::fixed_point::{Equilibrium, EquilibriumSolver};
pub use self::state::ParticipationState;
