//! Data flip-flop.
//!
//! Gates a [`Latch`] with the clock: `set = nand(data, clock)` and
//! `reset = nand(not(data), clock)`. While the clock is high the output follows
//! `data`; while it is low both latch inputs sit at `1` and the output holds.

use crate::common::{Bit, Bus, CircuitResult};
use crate::logic::gates::{nand, not};
use crate::seq::latch::Latch;
use crate::sim::Clock;

/// A level-sensitive 1-bit data flip-flop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataFlipFlop {
    latch: Latch,
}

impl DataFlipFlop {
    /// Creates a flip-flop holding logic low.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently held output.
    #[inline(always)]
    pub fn value(&self) -> Bit {
        self.latch.value()
    }

    /// Samples `data` if the clock is high, otherwise holds.
    ///
    /// # Arguments
    ///
    /// * `clock` - The clock observed for this evaluation.
    /// * `data`  - 1-bit data input.
    ///
    /// # Returns
    ///
    /// The flip-flop output after evaluation.
    pub fn eval(&mut self, clock: &Clock, data: &Bus) -> CircuitResult<Bus> {
        data.expect_width(1)?;
        let clk = clock.as_bus();
        let set = nand(data, &clk)?;
        let reset = nand(&not(data), &clk)?;
        self.latch.eval(&set, &reset)
    }

    /// Stores `state` directly, skipping the gate network.
    pub(crate) fn store(&mut self, state: Bit) {
        self.latch.force(state);
    }
}
