//! Program counter.
//!
//! A word register whose next value is chosen each cycle by three control lines
//! with strict precedence `reset > load > inc`:
//!
//! ```text
//! next = sel(current, inc(current), inc)
//! next = sel(next,    data,         load)
//! next = sel(next,    0,            reset)
//! ```
//!
//! The result is committed with `load` forced high, so every cycle writes
//! (subject to the clock).

use tracing::trace;

use crate::common::{Bus, CircuitResult, hi, lo};
use crate::config::ExecMode;
use crate::logic::arithmetic;
use crate::logic::select::sel2;
use crate::seq::WordRegister;
use crate::sim::SimContext;

/// A resettable, loadable, incrementing counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    word: WordRegister,
}

impl Counter {
    /// Creates a `width`-bit counter starting at zero.
    pub fn new(width: usize) -> Self {
        Self {
            word: WordRegister::new(width),
        }
    }

    /// Counter width in bits.
    pub fn width(&self) -> usize {
        self.word.width()
    }

    /// The stored count, read without evaluating a cycle.
    pub fn value(&self) -> Bus {
        self.word.value()
    }

    /// Evaluates one cycle.
    ///
    /// # Arguments
    ///
    /// * `ctx`   - Simulation context providing the clock and execution mode.
    /// * `data`  - Value to load; must be `width` bits.
    /// * `load`  - 1-bit: replace the count with `data`.
    /// * `inc`   - 1-bit: add one to the count.
    /// * `reset` - 1-bit: clear the count; overrides `load` and `inc`.
    ///
    /// # Returns
    ///
    /// The count after this cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use nandsim_core::aggregate::Counter;
    /// use nandsim_core::common::Bus;
    /// use nandsim_core::sim::SimContext;
    ///
    /// let ctx = SimContext::default();
    /// let mut pc = Counter::new(3);
    /// let b = |s: &str| s.parse::<Bus>().unwrap();
    /// assert_eq!(pc.eval(&ctx, &b("000"), &b("0"), &b("1"), &b("0")).unwrap(), b("001"));
    /// assert_eq!(pc.eval(&ctx, &b("110"), &b("1"), &b("1"), &b("0")).unwrap(), b("110"));
    /// assert_eq!(pc.eval(&ctx, &b("110"), &b("1"), &b("1"), &b("1")).unwrap(), b("000"));
    /// ```
    pub fn eval(
        &mut self,
        ctx: &SimContext,
        data: &Bus,
        load: &Bus,
        inc: &Bus,
        reset: &Bus,
    ) -> CircuitResult<Bus> {
        let width = self.width();
        data.expect_width(width)?;
        load.expect_width(1)?;
        inc.expect_width(1)?;
        reset.expect_width(1)?;

        let current = self.word.value();
        let next = match ctx.mode() {
            ExecMode::GateAccurate => {
                let next = sel2(&current, &arithmetic::inc(&current, ctx.mode())?, inc)?;
                let next = sel2(&next, data, load)?;
                sel2(&next, &lo(width), reset)?
            }
            ExecMode::Fast => {
                if reset[0].is_high() {
                    lo(width)
                } else if load[0].is_high() {
                    data.clone()
                } else if inc[0].is_high() {
                    arithmetic::inc(&current, ExecMode::Fast)?
                } else {
                    current
                }
            }
        };
        if reset[0].is_high() {
            trace!(width, "counter reset");
        }
        self.word.eval(ctx, &next, &hi(1))
    }
}
