//! Aggregate circuits composed from registers, adders and selectors.

/// Addressable register cluster.
pub mod cluster;

/// Resettable, loadable, incrementing counter.
pub mod counter;

pub use cluster::Cluster;
pub use counter::Counter;
