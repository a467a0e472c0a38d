//! Simulation context.
//!
//! Holds the process-wide signals every sequential circuit observes at evaluation
//! time: the clock and the execution strategy.

/// Global toggling clock signal.
pub mod clock;

/// Evaluation context passed into every stateful circuit.
pub mod context;

pub use clock::Clock;
pub use context::SimContext;
