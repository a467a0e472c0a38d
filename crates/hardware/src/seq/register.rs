//! Bit and word registers.
//!
//! A [`BitRegister`] places a two-way selector in front of a [`DataFlipFlop`]:
//! with `load = 1` the flip-flop is fed `data`, otherwise it is fed its own
//! output and recirculates. A [`WordRegister`] is `N` bit registers sharing one
//! `load` line.
//!
//! In `Fast` mode the selector and flip-flop network is skipped and the stored bit
//! is written directly, but only when `load = 1` and the clock is high, which is
//! exactly when the gate network would capture it.

use tracing::trace;

use crate::common::{Bus, CircuitResult};
use crate::config::ExecMode;
use crate::logic::select::sel2;
use crate::seq::flip_flop::DataFlipFlop;
use crate::sim::SimContext;

/// A 1-bit load-enabled register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitRegister {
    dff: DataFlipFlop,
}

impl BitRegister {
    /// Creates a register holding logic low.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored bit as a 1-bit bus.
    pub fn value(&self) -> Bus {
        Bus::single(self.dff.value())
    }

    /// Evaluates one cycle.
    ///
    /// # Arguments
    ///
    /// * `ctx`  - Simulation context providing the clock and execution mode.
    /// * `data` - 1-bit data input.
    /// * `load` - 1-bit write enable.
    ///
    /// # Returns
    ///
    /// The register output after this cycle.
    pub fn eval(&mut self, ctx: &SimContext, data: &Bus, load: &Bus) -> CircuitResult<Bus> {
        data.expect_width(1)?;
        load.expect_width(1)?;
        match ctx.mode() {
            ExecMode::GateAccurate => {
                let input = sel2(&self.value(), data, load)?;
                self.dff.eval(ctx.clock(), &input)
            }
            ExecMode::Fast => {
                if load[0].is_high() && ctx.clock().is_high() {
                    self.dff.store(data[0]);
                }
                Ok(self.value())
            }
        }
    }
}

/// An `N`-bit register built from independent bit registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRegister {
    bits: Vec<BitRegister>,
}

impl WordRegister {
    /// Creates a `width`-bit register holding all zeros.
    pub fn new(width: usize) -> Self {
        Self {
            bits: vec![BitRegister::new(); width],
        }
    }

    /// Register width in bits.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The stored word, read without evaluating a cycle.
    pub fn value(&self) -> Bus {
        self.bits.iter().map(|bit| bit.dff.value()).collect()
    }

    /// Evaluates one cycle on every bit with the shared `load` line.
    ///
    /// # Returns
    ///
    /// The stored word after this cycle, or `WidthMismatch` if `data` is not
    /// `width` bits or `load` is not 1 bit. Nothing is written on error.
    pub fn eval(&mut self, ctx: &SimContext, data: &Bus, load: &Bus) -> CircuitResult<Bus> {
        data.expect_width(self.width())?;
        load.expect_width(1)?;
        if load[0].is_high() && ctx.clock().is_high() {
            trace!(width = self.width(), value = %data, "word register write");
        }
        self.bits
            .iter_mut()
            .zip(data)
            .map(|(bit, &d)| bit.eval(ctx, &Bus::single(d), load).map(|out| out[0]))
            .collect()
    }
}
