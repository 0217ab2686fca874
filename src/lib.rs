//! Orebot agent library.
//!
//! Exposes the board representation, threat evaluation, target search,
//! equipment arbitration, per-robot control, and protocol modules for use
//! by integration tests and the binary entry point.

pub mod arbiter;
pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;
