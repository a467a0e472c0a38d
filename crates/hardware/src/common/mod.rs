//! Common types shared by every circuit layer.
//!
//! This module provides the fundamental building blocks the gate, selection, arithmetic,
//! sequential and aggregate layers are written against. It includes:
//! 1. **Logic Levels:** The two-valued `Bit`.
//! 2. **Buses:** Fixed-width, MSB-first groups of bits and their constant generators.
//! 3. **Error Handling:** Structural contract violations and the result alias.

/// Single-wire logic level.
pub mod bit;

/// Multi-wire bus and constant generators.
pub mod bus;

/// Error types for circuit contract violations.
pub mod error;

pub use bit::Bit;
pub use bus::{Bus, bus, hi, lo};
pub use error::{CircuitError, CircuitResult};
