//! PMP register layout constants.

/// Number of PMP entries in a configuration table.
pub const PMP_ENTRIES: usize = 64;

/// Number of lines in a table file: 64 `pmpcfg` values followed by 64 `pmpaddr` values.
pub const TABLE_LINES: usize = 2 * PMP_ENTRIES;

/// Read permission bit of a `pmpcfg` byte.
pub const PMPCFG_R: u8 = 1 << 0;

/// Write permission bit of a `pmpcfg` byte.
pub const PMPCFG_W: u8 = 1 << 1;

/// Execute permission bit of a `pmpcfg` byte.
pub const PMPCFG_X: u8 = 1 << 2;

/// Shift of the two-bit address-matching field (A) of a `pmpcfg` byte.
pub const PMPCFG_A_SHIFT: u8 = 3;

/// Mask of the address-matching field after shifting.
pub const PMPCFG_A_MASK: u8 = 0x3;

/// Mask applied to `pmpaddr` before it is used as a NAPOT size exponent.
pub const NAPOT_EXPONENT_MASK: u64 = 0xFFFF_FFFC;

/// Size in bytes of an NA4 region.
pub const NA4_SIZE: u64 = 4;
