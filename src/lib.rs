//! RISC-V Physical Memory Protection Checker Library.
//!
//! This crate decides whether a single memory access is permitted by a
//! 64-entry PMP configuration table, following the hardware's address
//! matching modes and first-match priority.
//!
//! # Architecture
//!
//! * **Region**: decodes one `pmpcfg` byte and its `pmpaddr` boundary into an
//!   address-matching mode (OFF, TOR, NA4, NAPOT) and R/W/X permissions.
//! * **Resolver**: walks the table in order and returns the verdict of the
//!   first matching region, or a fault if none matches.
//! * **Loader**: reads the 128-line hexadecimal table format.
//!
//! # Modules
//!
//! * `common`: Shared types, constants, and error handling.
//! * `config`: Settings file loading and parsing.
//! * `core`: Privilege modes and the PMP matcher and resolver.
//! * `loader`: Table file and address argument parsing.
//! * `logger`: Standard-error `log` backend used by the CLI.
//!
//! # Example
//!
//! ```
//! use pmp_check::common::AccessType;
//! use pmp_check::core::arch::mode::PrivilegeMode;
//! use pmp_check::core::pmp::{AccessRequest, Decision, PmpTable, PolicyResolver};
//!
//! let table = PmpTable::disabled().with_entry(0, 0x11, 0x2000);
//! let resolver = PolicyResolver::new(&table);
//!
//! let read = AccessRequest::new(0x2001, PrivilegeMode::User, AccessType::Read);
//! assert_eq!(resolver.resolve(&read), Decision::Allowed);
//!
//! let write = AccessRequest::new(0x2001, PrivilegeMode::User, AccessType::Write);
//! assert_eq!(resolver.resolve(&write), Decision::Fault);
//! ```

/// Shared types, constants, and error handling.
///
/// Provides the access type, physical address wrapper, table-shape
/// constants, and the error type reported by the input layers.
pub mod common;

/// Settings file for output format, tracing and NAPOT decoding.
///
/// Loads and parses an optional TOML file with serde defaults for every field.
pub mod config;

/// Privilege modes and Physical Memory Protection logic.
///
/// Implements region decoding, the ordered first-match resolver, and a
/// replaceable shared table handle.
pub mod core;

/// Parsing of the 128-line table format and the address argument.
pub mod loader;

/// Minimal `log` backend writing to standard error.
pub mod logger;
