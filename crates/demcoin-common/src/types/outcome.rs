//! Solver and optimizer result records

use serde::{Deserialize, Serialize};

use crate::MAX_ITERATIONS;

/// Summary of one equilibrium solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Equilibrium participation rate as a percentage (0-100)
    pub participation_rate: f64,

    /// Number of agents participating at equilibrium
    pub num_participating: usize,

    /// Mean quality score over participating agents (0 when nobody participates)
    pub avg_quality: f64,

    /// Iterations run before the solve stopped (1..=20)
    pub converged_iteration: u32,
}

impl RoundResult {
    /// Participation rate as a fraction (0.0 - 1.0)
    #[inline]
    pub fn participation_fraction(&self) -> f64 {
        self.participation_rate / 100.0
    }

    /// Whether the solve ran all the way to the default iteration cap
    ///
    /// Compares against [`MAX_ITERATIONS`] only. A solve run with custom
    /// limits should check its own convergence flag instead. A solve that met
    /// the tolerance on its last permitted iteration also reports true here;
    /// the iteration count is the only signal kept.
    pub fn hit_iteration_cap(&self) -> bool {
        self.converged_iteration >= MAX_ITERATIONS
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoundResult({:.1}%, {} participating, quality={:.1}/10, iterations={})",
            self.participation_rate,
            self.num_participating,
            self.avg_quality,
            self.converged_iteration
        )
    }
}

/// One scored point of a parameter sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridEvaluation {
    pub demcoin_per_hour: f64,
    pub success_bonus: f64,
    /// Participation × quality minus scaled DemCoin cost
    pub score: f64,
    pub result: RoundResult,
}

/// Best grid point found by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestParameters {
    pub demcoin_per_hour: f64,
    pub success_bonus: f64,
    pub score: f64,
    pub result: RoundResult,
}

impl From<GridEvaluation> for BestParameters {
    fn from(eval: GridEvaluation) -> Self {
        Self {
            demcoin_per_hour: eval.demcoin_per_hour,
            success_bonus: eval.success_bonus,
            score: eval.score,
            result: eval.result,
        }
    }
}

impl std::fmt::Display for BestParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BestParameters(rate={}/h, bonus={}, score={:.2}, participation={:.1}%)",
            self.demcoin_per_hour, self.success_bonus, self.score, self.result.participation_rate
        )
    }
}

/// Every evaluated grid point, in evaluation order, plus the winner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub evaluations: Vec<GridEvaluation>,
    pub best: BestParameters,
}

impl SweepReport {
    /// Number of grid points evaluated
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(iterations: u32) -> RoundResult {
        RoundResult {
            participation_rate: 62.5,
            num_participating: 625,
            avg_quality: 8.4,
            converged_iteration: iterations,
        }
    }

    #[test]
    fn test_participation_fraction() {
        assert!((sample_result(5).participation_fraction() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap_signal() {
        assert!(!sample_result(7).hit_iteration_cap());
        assert!(sample_result(MAX_ITERATIONS).hit_iteration_cap());
    }

    #[test]
    fn test_best_parameters_from_evaluation() {
        let eval = GridEvaluation {
            demcoin_per_hour: 20.0,
            success_bonus: 150.0,
            score: 512.0,
            result: sample_result(4),
        };
        let best = BestParameters::from(eval);
        assert_eq!(best.demcoin_per_hour, 20.0);
        assert_eq!(best.success_bonus, 150.0);
        assert_eq!(best.result, eval.result);
    }

    #[test]
    fn test_round_result_serializes() {
        let json = serde_json::to_string(&sample_result(3)).unwrap();
        assert!(json.contains("\"num_participating\":625"));
        assert!(json.contains("\"converged_iteration\":3"));
    }
}
