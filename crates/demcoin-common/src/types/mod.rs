//! Core data types for the DemCoin simulator

pub mod agent;
pub mod incentive;
pub mod outcome;
