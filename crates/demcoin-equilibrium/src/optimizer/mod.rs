//! Incentive parameter optimizer
pub mod grid;
pub mod search;

pub use self::grid::ParameterGrid;
pub use self::search::{welfare_score, GridSearch};
