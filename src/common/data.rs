//! Memory Access Types.
//!
//! This module defines the classification of memory accesses checked by the
//! Physical Memory Protection (PMP) logic. Each access maps onto exactly one
//! of the three permission bits carried by a PMP configuration byte.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::Error;

/// Type of memory access operation.
///
/// Used to select which permission bit of a matching PMP region
/// governs the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Requires the Read (R) bit of the governing region.
    Read,

    /// Data write access.
    ///
    /// Requires the Write (W) bit of the governing region.
    Write,

    /// Instruction fetch access.
    ///
    /// Requires the Execute (X) bit of the governing region.
    Execute,
}

impl AccessType {
    /// Returns the single-letter token used on the command line.
    pub fn letter(self) -> char {
        match self {
            AccessType::Read => 'R',
            AccessType::Write => 'W',
            AccessType::Execute => 'X',
        }
    }
}

impl FromStr for AccessType {
    type Err = Error;

    /// Parses `R`, `W` or `X`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "R" => Ok(AccessType::Read),
            "W" => Ok(AccessType::Write),
            "X" => Ok(AccessType::Execute),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
