//! Simulator configuration

use std::str::FromStr;

use anyhow::Result;
use demcoin_common::{ConfigError, IncentiveConfig};
use serde::{Deserialize, Serialize};

/// Population used by the demonstration driver
pub const DEFAULT_NUM_CITIZENS: usize = 1000;

/// How the driver prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Simulator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorSettings {
    /// Population size
    pub num_citizens: usize,
    /// Seed for trait generation; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// DemCoin per hour of quality work
    pub demcoin_per_hour: f64,
    /// Bonus on collective success
    pub success_bonus: f64,
    /// Hours per participation
    pub time_cost: f64,
    /// Quality gate for the hourly reward
    pub quality_threshold: f64,
    /// Driver output format
    pub output: OutputFormat,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        let incentives = IncentiveConfig::default();
        Self {
            num_citizens: DEFAULT_NUM_CITIZENS,
            seed: None,
            demcoin_per_hour: incentives.demcoin_per_hour,
            success_bonus: incentives.success_bonus,
            time_cost: incentives.time_cost,
            quality_threshold: incentives.quality_threshold,
            output: OutputFormat::default(),
        }
    }
}

impl SimulatorSettings {
    /// Load configuration from `.env` and `DEMCOIN_` environment variables
    ///
    /// Values that fail to parse are skipped and the default kept.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Some(v) = env_value("DEMCOIN_NUM_CITIZENS") {
            cfg.num_citizens = v;
        }
        if let Some(v) = env_value("DEMCOIN_SEED") {
            cfg.seed = Some(v);
        }

        // Incentive scalars
        if let Some(v) = env_value("DEMCOIN_PER_HOUR") {
            cfg.demcoin_per_hour = v;
        }
        if let Some(v) = env_value("DEMCOIN_SUCCESS_BONUS") {
            cfg.success_bonus = v;
        }
        if let Some(v) = env_value("DEMCOIN_TIME_COST") {
            cfg.time_cost = v;
        }
        if let Some(v) = env_value("DEMCOIN_QUALITY_THRESHOLD") {
            cfg.quality_threshold = v;
        }

        if let Some(v) = env_value("DEMCOIN_OUTPUT") {
            cfg.output = v;
        }

        Ok(cfg)
    }

    /// Incentive scalars as a config value
    pub fn incentive_config(&self) -> IncentiveConfig {
        IncentiveConfig::new(
            self.demcoin_per_hour,
            self.success_bonus,
            self.time_cost,
            self.quality_threshold,
        )
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.num_citizens == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        self.incentive_config().validate()
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}
