//! Simulation context.
//!
//! `SimContext` replaces ambient global flags with one explicitly owned object. It provides:
//! 1. **Clock Ownership:** The only place the clock can be toggled.
//! 2. **Strategy Selection:** The execution mode read by arithmetic, sequential and aggregate circuits.
//!
//! Circuits borrow the context immutably for the duration of an evaluation, so the
//! clock cannot change in the middle of a cycle.

use tracing::debug;

use crate::common::Bit;
use crate::config::{Config, ExecMode};
use crate::sim::clock::Clock;

/// Process-wide signals shared by every circuit built by one caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimContext {
    mode: ExecMode,
    clock: Clock,
}

impl SimContext {
    /// Creates a context from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.mode,
            clock: Clock::new(config.initial_clock),
        }
    }

    /// Creates a context with the default clock and the given mode.
    pub fn with_mode(mode: ExecMode) -> Self {
        Self::new(&Config {
            mode,
            ..Config::default()
        })
    }

    /// Active execution strategy.
    #[inline(always)]
    pub const fn mode(&self) -> ExecMode {
        self.mode
    }

    /// Switches the execution strategy.
    ///
    /// Stored register contents are shared by both strategies and survive the switch.
    pub fn set_mode(&mut self, mode: ExecMode) {
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, "execution mode switched");
        }
        self.mode = mode;
    }

    /// Borrows the clock.
    #[inline(always)]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Toggles the clock.
    ///
    /// # Returns
    ///
    /// The new clock level.
    pub fn tick(&mut self) -> Bit {
        let level = self.clock.tick();
        debug!(%level, "clock tick");
        level
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
