//! Physical Memory Protection.
//!
//! Decodes PMP entries into regions and resolves single accesses against
//! an ordered table of them.

/// Region decoding and address matching.
pub mod region;

/// First-match policy resolution.
pub mod resolver;

/// Atomically replaceable table handle.
pub mod shared;

/// Fixed-size region table.
pub mod table;

pub use region::{AddressMatch, NapotDecode, Region};
pub use resolver::{check_access, AccessRequest, Decision, PolicyResolver, Resolution};
pub use shared::SharedTable;
pub use table::PmpTable;
