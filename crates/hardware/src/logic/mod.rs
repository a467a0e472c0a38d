//! Combinational logic.
//!
//! Stateless circuits recomputed on every call. Organized by layer:
//! - [`gates`]:      NAND and everything derived from it (NOT, AND, OR, NOR, XOR, XNOR, reductions)
//! - [`select`]:     Multiplexers and demultiplexers
//! - [`arithmetic`]: Half/full adders, ripple-carry adder, incrementer

/// NAND-derived boolean gates.
pub mod gates;

/// Multiplexer and demultiplexer trees.
pub mod select;

/// Adders and the incrementer.
pub mod arithmetic;
