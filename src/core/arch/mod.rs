//! RISC-V architecture-specific components.
//!
//! This module contains the architectural definitions the PMP checker
//! needs from the RISC-V privileged architecture.

/// Privilege mode definitions.
pub mod mode;
