//! SR latch.
//!
//! A cross-coupled NAND latch whose output feeds back into its next evaluation.
//! The output is `nand(set, nand(previous, reset))`:
//! - `set = 0, reset = 1` drives the output high.
//! - `set = 1, reset = 0` drives the output low.
//! - `set = 1, reset = 1` holds the previous output.
//! - `set = 0, reset = 0` is the forbidden input; the NAND network resolves it to `1`.

use tracing::trace;

use crate::common::{Bit, Bus, CircuitResult};
use crate::logic::gates::nand;

/// A 1-bit set/reset latch holding its last stable output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch {
    out: Bus,
}

impl Latch {
    /// Creates a latch holding logic low.
    pub fn new() -> Self {
        Self::with_state(Bit::Zero)
    }

    /// Creates a latch holding `state`.
    pub fn with_state(state: Bit) -> Self {
        Self {
            out: Bus::single(state),
        }
    }

    /// The currently held output.
    #[inline(always)]
    pub fn value(&self) -> Bit {
        self.out[0]
    }

    /// Evaluates the latch with active-low `set` and `reset` inputs.
    ///
    /// # Arguments
    ///
    /// * `set`   - 1-bit set input (active low).
    /// * `reset` - 1-bit reset input (active low).
    ///
    /// # Returns
    ///
    /// The new output, which is also retained for the next call.
    pub fn eval(&mut self, set: &Bus, reset: &Bus) -> CircuitResult<Bus> {
        set.expect_width(1)?;
        reset.expect_width(1)?;
        if !set[0].is_high() && !reset[0].is_high() {
            trace!("latch driven with set=0 reset=0, output forced high");
        }
        let out = nand(set, &nand(&self.out, reset)?)?;
        self.out = out.clone();
        Ok(out)
    }

    /// Overwrites the held output without running the gate network.
    pub(crate) fn force(&mut self, state: Bit) {
        self.out = Bus::single(state);
    }
}

impl Default for Latch {
    fn default() -> Self {
        Self::new()
    }
}
