//! # DemCoin Common
//!
//! Shared types, errors, and model constants for the DemCoin participation
//! simulator.
//!
//! ## Core Types
//!
//! - [`Agent`]: citizen with immutable random traits (skill, time value, civic interest)
//! - [`IncentiveConfig`]: the four incentive scalars read by the utility model
//! - [`RoundResult`]: summary of one equilibrium solve
//! - [`BestParameters`]: winning grid point of a parameter sweep
//! - [`GridEvaluation`]/[`SweepReport`]: per-grid-point audit trail of a sweep
//!
//! ## Utility Formula
//!
//! ```text
//! U(participate) = R + p(r) × B − v × t + 20c
//! U(ignore)      = 0
//! ```
//!
//! Where:
//! - R: `demcoin_per_hour × time_cost` if `skill × 8 ≥ quality_threshold`, else 0
//! - p(r): success probability, `0.3 + 0.6r` for participation rate r
//! - B: success bonus
//! - v × t: time value × time cost
//! - c: civic interest

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConfigError, DemcoinError, Result};
pub use types::{
    agent::Agent,
    incentive::IncentiveConfig,
    outcome::{BestParameters, GridEvaluation, RoundResult, SweepReport},
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Multiplier turning skill into a 0-12 quality score
pub const QUALITY_SCALE: f64 = 8.0;

/// Success probability with nobody participating (30%)
pub const BASE_SUCCESS_PROBABILITY: f64 = 0.3;

/// Extra success probability at full participation (up to 90%)
pub const PARTICIPATION_SUCCESS_WEIGHT: f64 = 0.6;

/// Utility per unit of civic interest
pub const CIVIC_INTEREST_WEIGHT: f64 = 20.0;

/// Fixed-point tolerance on the participation rate
pub const CONVERGENCE_TOLERANCE: f64 = 0.001;

/// Iteration cap for one equilibrium solve
pub const MAX_ITERATIONS: u32 = 20;

/// Skill range (quality multiplier)
pub const SKILL_RANGE: (f64, f64) = (0.5, 1.5);

/// Time value range (€/hour)
pub const TIME_VALUE_RANGE: (f64, f64) = (10.0, 50.0);

/// Civic interest range
pub const CIVIC_INTEREST_RANGE: (f64, f64) = (0.0, 1.0);
