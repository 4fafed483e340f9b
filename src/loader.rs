//! PMP Table Loader.
//!
//! Turns the textual table format into a [`PmpTable`] and validates the
//! address argument. A table file holds 128 hexadecimal values, one per
//! line: 64 `pmpcfg` bytes followed by 64 `pmpaddr` boundaries.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, Result, PMP_ENTRIES, TABLE_LINES};
use crate::core::pmp::{AddressMatch, PmpTable};

/// Parses a hexadecimal token with an optional `0x`/`0X` prefix.
///
/// Surrounding whitespace and single `_` separators between digits are
/// accepted. Returns `None` for anything else, including values that do not
/// fit in 64 bits.
pub fn parse_hex(token: &str) -> Option<u64> {
    let trimmed = token.trim();
    let s = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        // A separator may directly follow the prefix ("0x_ff").
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => trimmed,
    };

    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return None;
    }
    let digits: String = s.chars().filter(|&c| c != '_').collect();
    if digits.starts_with('+') || digits.starts_with('-') {
        return None;
    }
    u64::from_str_radix(&digits, 16).ok()
}

/// Parses the address argument. It must start with a lower-case `0x`.
///
/// # Errors
///
/// * [`Error::MissingAddressPrefix`] when the `0x` prefix is absent.
/// * [`Error::InvalidAddress`] when the remainder is not a 64-bit hex value.
pub fn parse_address(arg: &str) -> Result<u64> {
    if !arg.starts_with("0x") {
        return Err(Error::MissingAddressPrefix(arg.to_string()));
    }
    parse_hex(arg).ok_or_else(|| Error::InvalidAddress(arg.to_string()))
}

/// Parses the text of a table file.
///
/// # Errors
///
/// * [`Error::LineCount`] unless the text has exactly 128 lines.
/// * [`Error::InvalidEntry`] for a line that is not a hex value.
/// * [`Error::ConfigRange`] for a `pmpcfg` line above `0xff`.
pub fn parse_table(text: &str) -> Result<PmpTable> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != TABLE_LINES {
        return Err(Error::LineCount(lines.len()));
    }

    let mut cfg = [0u8; PMP_ENTRIES];
    let mut addr = [0u64; PMP_ENTRIES];

    for (idx, line) in lines.iter().enumerate() {
        let value = parse_hex(line).ok_or_else(|| Error::InvalidEntry {
            line: idx + 1,
            token: line.trim().to_string(),
        })?;

        if idx < PMP_ENTRIES {
            cfg[idx] = u8::try_from(value).map_err(|_| Error::ConfigRange {
                line: idx + 1,
                value,
            })?;
        } else {
            addr[idx - PMP_ENTRIES] = value;
        }
    }

    let table = PmpTable::new(&cfg, &addr);
    debug!(
        "[Loader] {} entries, {} enabled",
        table.len(),
        table
            .iter()
            .filter(|r| r.mode() != AddressMatch::Off)
            .count()
    );
    Ok(table)
}

/// Reads and parses a table file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<PmpTable> {
    let path = path.as_ref();
    debug!("[Loader] reading {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_table(&text)
}

/// Renders `table` in the 128-line file format.
pub fn format_table(table: &PmpTable) -> String {
    let mut out = String::with_capacity(TABLE_LINES * 8);
    for region in table {
        out.push_str(&format!("{:#x}\n", region.config()));
    }
    for region in table {
        out.push_str(&format!("{:#x}\n", region.boundary()));
    }
    out
}
