//! Circuit error definitions.
//!
//! This module defines the structural contract violations a circuit can report. It provides:
//! 1. **Width Errors:** Operand buses or selectors of the wrong width.
//! 2. **Symbol Errors:** Characters outside `{'0', '1'}` in textual bus input.
//! 3. **Address Errors:** Cluster addresses beyond the number of registers.
//!
//! Every error is raised before a circuit touches its persisted state, so a failed
//! evaluation never leaves a register half-written.

use thiserror::Error;

/// Structural contract violations reported by gates and circuits.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CircuitError {
    /// A bus did not have the width the circuit requires.
    ///
    /// Raised for unequal operands of a binary gate, a selector whose width is not
    /// `log2` of the input count, and control or data inputs of the wrong width.
    #[error("width mismatch: expected {expected} bit(s), found {found}")]
    WidthMismatch {
        /// Width the circuit required.
        expected: usize,
        /// Width that was supplied.
        found: usize,
    },

    /// A multiplexer was given a number of data inputs that is not a power of two,
    /// or a cluster was asked for zero registers.
    #[error("input count {0} is not a non-zero power of two")]
    InputCount(usize),

    /// A character other than `'0'` or `'1'` appeared in a bus literal.
    #[error("invalid bit symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based position of the character, most-significant first.
        position: usize,
    },

    /// A cluster address did not name an existing register.
    #[error("address {address} is out of range for {count} register(s)")]
    InvalidAddress {
        /// The decoded address.
        address: usize,
        /// Number of registers in the cluster.
        count: usize,
    },
}

/// Result alias used by every fallible circuit operation.
pub type CircuitResult<T> = Result<T, CircuitError>;
