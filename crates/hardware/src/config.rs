//! Configuration system for the logic simulator.
//!
//! This module defines the process-wide settings every sequential and aggregate circuit
//! reads through a [`SimContext`](crate::sim::SimContext). It provides:
//! 1. **Defaults:** The power-on clock level and the default execution strategy.
//! 2. **Structures:** The root `Config` and the `ExecMode` strategy switch.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Use `Config::default()` when no configuration file is supplied.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::Bit;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::Bit;

    /// Clock level at power-on.
    ///
    /// The clock starts high so that freshly built registers are immediately writable.
    pub const INITIAL_CLOCK: Bit = Bit::One;
}

/// Strategy used by the arithmetic, sequential and aggregate layers.
///
/// Both strategies produce bit-identical observable results; they differ only
/// in how much of the gate network is actually walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExecMode {
    /// Native integer arithmetic and direct register indexing.
    #[default]
    #[serde(alias = "Turbo")]
    Fast,
    /// Every result is computed through the NAND gate network.
    #[serde(alias = "Accurate")]
    GateAccurate,
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration text was not valid JSON for `Config`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use nandsim_core::common::Bit;
/// use nandsim_core::config::{Config, ExecMode};
///
/// let config = Config::default();
/// assert_eq!(config.mode, ExecMode::Fast);
/// assert_eq!(config.initial_clock, Bit::One);
///
/// let config = Config::from_json(r#"{ "mode": "GateAccurate" }"#).unwrap();
/// assert_eq!(config.mode, ExecMode::GateAccurate);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Execution strategy for arithmetic, registers, counters and clusters.
    #[serde(default)]
    pub mode: ExecMode,

    /// Clock level when the context is created.
    #[serde(default = "Config::default_initial_clock")]
    pub initial_clock: Bit,
}

impl Config {
    /// Returns the default power-on clock level.
    const fn default_initial_clock() -> Bit {
        defaults::INITIAL_CLOCK
    }

    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ExecMode::default(),
            initial_clock: defaults::INITIAL_CLOCK,
        }
    }
}
