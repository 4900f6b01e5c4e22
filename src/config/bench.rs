//! Benchmark configuration module.
//!
//! This module defines the workload used by the `bench` command: how many
//! random items pre-fill the filter and how many operations are timed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Benchmark workload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of random items inserted before timing starts
    pub prefill: usize,

    /// Number of timed operations per measured operation kind
    pub iterations: usize,

    /// Random items are drawn from `0..universe`
    pub universe: u64,

    /// Number of absent items probed to estimate the false positive rate
    pub probes: usize,

    /// Optional RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            prefill: 500_000,
            iterations: 100_000,
            universe: 100_000_000,
            probes: 100_000,
            seed: None,
        }
    }
}

impl Validate for BenchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.iterations == 0 {
            return Err(ConfigError::ValidationError(
                "iterations must be greater than 0".to_string(),
            ));
        }

        if self.universe == 0 {
            return Err(ConfigError::ValidationError(
                "universe must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
