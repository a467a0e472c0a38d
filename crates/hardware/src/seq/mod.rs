//! Sequential logic.
//!
//! Stateful circuits that retain their output between evaluations. Each layer wraps
//! the one before it:
//! 1. **Latch:** Cross-coupled NAND set/reset cell.
//! 2. **Flip-Flop:** Clock-gated latch sampling a data input.
//! 3. **Registers:** Load-enabled bit register and the `N`-bit word register.

/// Clock-gated data flip-flop.
pub mod flip_flop;

/// NAND set/reset latch.
pub mod latch;

/// Bit and word registers.
pub mod register;

pub use flip_flop::DataFlipFlop;
pub use latch::Latch;
pub use register::{BitRegister, WordRegister};
