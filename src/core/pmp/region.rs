//! PMP Region Decoding.
//!
//! A region is one `pmpcfg` byte paired with its `pmpaddr` boundary. The
//! configuration byte is decoded once into an address-matching mode and
//! three independent permission flags; the region is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    NA4_SIZE, NAPOT_EXPONENT_MASK, PMPCFG_A_MASK, PMPCFG_A_SHIFT, PMPCFG_R, PMPCFG_W, PMPCFG_X,
};
use crate::common::AccessType;

/// Address-matching mode held in bits [4:3] of a `pmpcfg` byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AddressMatch {
    /// Null region (disabled).
    Off = 0,

    /// Top of Range.
    Tor = 1,

    /// Naturally aligned four-byte region.
    Na4 = 2,

    /// Naturally aligned power-of-two region.
    Napot = 3,
}

impl AddressMatch {
    /// Decodes the two-bit A field. Every value of the field is a valid mode.
    pub fn from_bits(bits: u8) -> Self {
        match bits & PMPCFG_A_MASK {
            0 => AddressMatch::Off,
            1 => AddressMatch::Tor,
            2 => AddressMatch::Na4,
            _ => AddressMatch::Napot,
        }
    }

    /// Returns the conventional upper-case mnemonic.
    pub fn name(&self) -> &'static str {
        match self {
            AddressMatch::Off => "OFF",
            AddressMatch::Tor => "TOR",
            AddressMatch::Na4 => "NA4",
            AddressMatch::Napot => "NAPOT",
        }
    }
}

/// How the block size of a NAPOT region is derived from its boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NapotDecode {
    /// The masked boundary value is the size exponent:
    /// `size = 1 << ((boundary & 0xFFFF_FFFC) + 2)`.
    ///
    /// This is not how hardware encodes NAPOT ranges, but it is the behavior
    /// existing policy tables were validated against.
    #[default]
    Legacy,

    /// Hardware-style decode: `size = 4 << t` where `t` is the number of
    /// trailing one bits in `boundary >> 2`.
    TrailingOnes,
}

impl NapotDecode {
    /// Returns log2 of the block size in bytes for the given boundary.
    ///
    /// The result may exceed 63, in which case the block covers the whole
    /// 64-bit address space.
    pub fn block_shift(self, boundary: u64) -> u64 {
        match self {
            NapotDecode::Legacy => (boundary & NAPOT_EXPONENT_MASK) + 2,
            NapotDecode::TrailingOnes => u64::from((boundary >> 2).trailing_ones()) + 2,
        }
    }
}

/// A decoded PMP region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    config: u8,
    boundary: u64,
    mode: AddressMatch,
    read: bool,
    write: bool,
    execute: bool,
}

impl Region {
    /// Decodes a `pmpcfg` byte and its `pmpaddr` boundary.
    pub fn new(config: u8, boundary: u64) -> Self {
        Self {
            config,
            boundary,
            mode: AddressMatch::from_bits(config >> PMPCFG_A_SHIFT),
            read: config & PMPCFG_R != 0,
            write: config & PMPCFG_W != 0,
            execute: config & PMPCFG_X != 0,
        }
    }

    /// Returns the raw configuration byte.
    pub fn config(&self) -> u8 {
        self.config
    }

    /// Returns the raw boundary address.
    pub fn boundary(&self) -> u64 {
        self.boundary
    }

    /// Returns the decoded address-matching mode.
    pub fn mode(&self) -> AddressMatch {
        self.mode
    }

    pub fn can_read(&self) -> bool {
        self.read
    }

    pub fn can_write(&self) -> bool {
        self.write
    }

    pub fn can_execute(&self) -> bool {
        self.execute
    }

    /// Tests whether `address` falls inside this region using legacy NAPOT decoding.
    ///
    /// # Arguments
    ///
    /// * `address` - The byte address being accessed
    /// * `previous_boundary` - Raw boundary of the entry immediately before this
    ///   one in the table (0 for entry 0); only consulted in TOR mode
    pub fn matches(&self, address: u64, previous_boundary: u64) -> bool {
        self.matches_with(address, previous_boundary, NapotDecode::Legacy)
    }

    /// Tests whether `address` falls inside this region, decoding NAPOT
    /// block sizes with `napot`.
    pub fn matches_with(&self, address: u64, previous_boundary: u64, napot: NapotDecode) -> bool {
        match self.mode {
            AddressMatch::Off => false,
            AddressMatch::Tor => previous_boundary <= address && address < self.boundary,
            // Written as a difference so a boundary near u64::MAX cannot wrap.
            AddressMatch::Na4 => address >= self.boundary && address - self.boundary < NA4_SIZE,
            AddressMatch::Napot => same_block(address, self.boundary, napot.block_shift(self.boundary)),
        }
    }

    /// Returns the permission bit that governs `access`.
    pub fn permits(&self, access: AccessType) -> bool {
        match access {
            AccessType::Read => self.read,
            AccessType::Write => self.write,
            AccessType::Execute => self.execute,
        }
    }
}

/// Compares two addresses with the low `shift` bits masked off.
fn same_block(a: u64, b: u64, shift: u64) -> bool {
    if shift >= u64::BITS as u64 {
        return true;
    }
    a >> shift == b >> shift
}
