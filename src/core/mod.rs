//! Core protection logic.
//!
//! Contains the architectural definitions the checker depends on and the
//! PMP region matcher and resolver built on top of them.

/// RISC-V architectural definitions (privilege modes).
pub mod arch;

/// Physical Memory Protection regions, tables and resolution.
pub mod pmp;

pub use pmp::{Decision, PmpTable, PolicyResolver};
