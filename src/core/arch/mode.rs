//! RISC-V Privilege Modes.
//!
//! This module defines the privilege levels a memory access may be issued
//! from: User (U), Supervisor (S), and Machine (M). It provides utilities for
//! converting between numeric, textual and enum representations.

use std::str::FromStr;

use serde::Serialize;

use crate::common::Error;

/// RISC-V privilege mode levels.
///
/// The requesting mode is carried with every access request. The PMP
/// resolver applies the same region table to all three modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PrivilegeMode {
    /// User mode (U-mode).
    ///
    /// Lowest privilege level for application code.
    User = 0,

    /// Supervisor mode (S-mode).
    ///
    /// Intermediate privilege level for operating system kernel code.
    Supervisor = 1,

    /// Machine mode (M-mode).
    ///
    /// Highest privilege level for firmware.
    Machine = 3,
}

impl PrivilegeMode {
    /// Converts a u8 value to a privilege mode.
    ///
    /// # Arguments
    ///
    /// * `val` - The numeric privilege mode value (0, 1, or 3)
    ///
    /// # Returns
    ///
    /// The corresponding `PrivilegeMode`, defaulting to `Machine` for invalid values.
    pub fn from_u8(val: u8) -> Self {
        match val {
            0 => PrivilegeMode::User,
            1 => PrivilegeMode::Supervisor,
            _ => PrivilegeMode::Machine,
        }
    }

    /// Converts a privilege mode to its u8 representation.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the privilege mode.
    pub fn name(&self) -> &'static str {
        match self {
            PrivilegeMode::User => "User",
            PrivilegeMode::Supervisor => "Supervisor",
            PrivilegeMode::Machine => "Machine",
        }
    }

    /// Returns the single-letter token used on the command line.
    pub fn letter(&self) -> char {
        match self {
            PrivilegeMode::User => 'U',
            PrivilegeMode::Supervisor => 'S',
            PrivilegeMode::Machine => 'M',
        }
    }
}

impl FromStr for PrivilegeMode {
    type Err = Error;

    /// Parses `M`, `S` or `U`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "M" => Ok(PrivilegeMode::Machine),
            "S" => Ok(PrivilegeMode::Supervisor),
            "U" => Ok(PrivilegeMode::User),
            _ => Err(Error::InvalidPrivilege(s.to_string())),
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
