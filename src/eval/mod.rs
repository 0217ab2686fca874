//! Position evaluation.
//!
//! Assesses the danger around a robot: which cells a chain of traps would
//! destroy, and whether setting one off is worth it.

pub mod threat;

pub use threat::{explosive_cluster, should_self_detonate};
