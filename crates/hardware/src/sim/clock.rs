//! Clock signal.
//!
//! A single bit that is toggled explicitly by the caller. Flip-flops sample their
//! input while the clock is high and hold while it is low.

use crate::common::{Bit, Bus};

/// The shared clock line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    level: Bit,
}

impl Clock {
    /// Creates a clock driven to `level`.
    pub const fn new(level: Bit) -> Self {
        Self { level }
    }

    /// Current clock level.
    #[inline(always)]
    pub const fn level(&self) -> Bit {
        self.level
    }

    /// Returns `true` while the clock is high.
    #[inline(always)]
    pub const fn is_high(&self) -> bool {
        self.level.is_high()
    }

    /// The clock level as a 1-bit bus, ready to feed into a gate.
    pub fn as_bus(&self) -> Bus {
        Bus::single(self.level)
    }

    /// Inverts the clock level.
    ///
    /// # Returns
    ///
    /// The new clock level.
    pub fn tick(&mut self) -> Bit {
        self.level = match self.level {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        };
        self.level
    }
}

impl Default for Clock {
    /// The clock powers on high.
    fn default() -> Self {
        Self::new(Bit::One)
    }
}
