//! Error types.
//!
//! Every error here is raised while turning user input into well-typed
//! values. Region matching and policy resolution never fail once a table
//! and request have been constructed.

use thiserror::Error;

/// Result alias used by the loading and configuration layers.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while validating command-line input, table files and settings.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong invocation of the checker.
    #[error("Usage: pmp-check pmp_configuration.txt 0xaddress M/S/U R/W/X")]
    Usage,

    /// The address argument lacks the `0x` prefix.
    #[error("Invalid address format. Must start with '0x'.")]
    MissingAddressPrefix(String),

    /// The address argument is not a 64-bit hexadecimal integer.
    #[error("Invalid address format.")]
    InvalidAddress(String),

    /// Unknown privilege mode token.
    #[error("Invalid privilege mode. Must be one of 'M', 'S', or 'U'.")]
    InvalidPrivilege(String),

    /// Unknown operation token.
    #[error("Invalid operation. Must be one of 'R', 'W', or 'X'.")]
    InvalidOperation(String),

    /// The table file does not hold exactly 128 lines.
    #[error("Configuration file must have exactly 128 lines.")]
    LineCount(usize),

    /// A table line is not a hexadecimal integer.
    #[error("Error reading configuration file: line {line}: invalid hex value '{token}'")]
    InvalidEntry { line: usize, token: String },

    /// A `pmpcfg` line holds a value wider than eight bits.
    #[error("Error reading configuration file: line {line}: pmpcfg value {value:#x} exceeds 8 bits")]
    ConfigRange { line: usize, value: u64 },

    /// A table was built from the wrong number of entries.
    #[error("PMP table must have exactly {expected} entries, got {found}")]
    TableShape { expected: usize, found: usize },

    /// The table file could not be read.
    #[error("Error reading configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON report could not be rendered.
    #[error("Error rendering report: {0}")]
    Report(#[from] serde_json::Error),

    /// The settings file could not be read or parsed.
    #[error("Error reading settings file: {0}")]
    Settings(String),
}
