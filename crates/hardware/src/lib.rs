//! Bit-level digital logic simulator library.
//!
//! This crate builds every circuit from a single two-input NAND gate, layer by layer:
//! 1. **Common:** Bits, MSB-first buses, constant generators and error types.
//! 2. **Logic:** NAND-derived gates, multiplexer/demultiplexer trees and ripple-carry arithmetic.
//! 3. **Sequential:** SR latch, clock-gated data flip-flop, bit and word registers.
//! 4. **Aggregate:** Program counter and addressable register cluster.
//! 5. **Simulation:** Clock and execution-mode context, plus JSON configuration.
//!
//! Arithmetic, sequential and aggregate circuits run under one of two strategies
//! selected by [`ExecMode`]: `GateAccurate` walks the gate network, `Fast` takes
//! native shortcuts. Both strategies produce identical outputs for every legal input.
//!
//! # Examples
//!
//! ```
//! use nandsim_core::aggregate::Cluster;
//! use nandsim_core::common::Bus;
//! use nandsim_core::config::ExecMode;
//! use nandsim_core::sim::SimContext;
//!
//! let ctx = SimContext::with_mode(ExecMode::GateAccurate);
//! let mut ram = Cluster::new(4, 4).unwrap();
//! let b = |s: &str| s.parse::<Bus>().unwrap();
//!
//! ram.write(&ctx, &b("10"), &b("1011")).unwrap();
//! assert_eq!(ram.read(&ctx, &b("10")).unwrap(), b("1011"));
//! assert_eq!(ram.read(&ctx, &b("01")).unwrap(), b("0000"));
//! ```

/// Common types (bits, buses, errors).
pub mod common;
/// Simulator configuration (execution mode, power-on clock level).
pub mod config;
/// Combinational logic (gates, selection, arithmetic).
pub mod logic;
/// Sequential logic (latch, flip-flop, registers).
pub mod seq;
/// Aggregate circuits (counter, register cluster).
pub mod aggregate;
/// Clock and simulation context.
pub mod sim;

/// Fixed-width bus of bits; parse from a `'0'`/`'1'` string.
pub use crate::common::{Bit, Bus, CircuitError, CircuitResult};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::{Config, ExecMode};
/// Evaluation context passed into every stateful circuit.
pub use crate::sim::SimContext;

#[cfg(doctest)]
#[doc = include_str!("../../../README.md")]
struct ReadmeDoctests;
