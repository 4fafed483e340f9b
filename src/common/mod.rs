//! Common utilities and types used throughout the PMP checker.
//!
//! This module provides fundamental types for addresses, memory access
//! operations, error handling, and the constants that describe the shape
//! of a PMP configuration table.

/// Physical address type definition.
pub mod addr;

/// Constants describing the PMP register layout and table format.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types reported while loading and validating input.
pub mod error;

pub use addr::PhysAddr;
pub use data::AccessType;
pub use error::{Error, Result};

pub use constants::{PMP_ENTRIES, TABLE_LINES};
