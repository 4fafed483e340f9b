//! PMP Policy Resolution.
//!
//! Scans a [`PmpTable`] in index order and returns the verdict of the first
//! region that matches the requested address. An address no region covers
//! is denied.

use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::common::{AccessType, PhysAddr};
use crate::core::arch::mode::PrivilegeMode;

use super::region::NapotDecode;
use super::table::PmpTable;

/// A single memory access to be checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRequest {
    pub address: PhysAddr,
    pub access: AccessType,
    /// Requesting privilege mode. Carried for reporting; it does not affect resolution.
    pub privilege: PrivilegeMode,
}

impl AccessRequest {
    pub fn new(address: u64, privilege: PrivilegeMode, access: AccessType) -> Self {
        Self {
            address: PhysAddr::new(address),
            access,
            privilege,
        }
    }
}

/// Outcome of a PMP check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allowed,
    Fault,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allowed => write!(f, "Access allowed"),
            Decision::Fault => write!(f, "Access fault"),
        }
    }
}

/// A decision together with the index of the region that produced it.
///
/// `region` is `None` when no region matched and the access was denied by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub decision: Decision,
    pub region: Option<usize>,
}

/// Resolves access requests against a borrowed PMP table.
///
/// Holds no mutable state, so one resolver may be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct PolicyResolver<'a> {
    table: &'a PmpTable,
    napot: NapotDecode,
}

impl<'a> PolicyResolver<'a> {
    /// Creates a resolver using legacy NAPOT decoding.
    pub fn new(table: &'a PmpTable) -> Self {
        Self {
            table,
            napot: NapotDecode::Legacy,
        }
    }

    /// Selects the NAPOT size decoding.
    pub fn with_napot_decode(mut self, napot: NapotDecode) -> Self {
        self.napot = napot;
        self
    }

    /// Returns the table this resolver reads.
    pub fn table(&self) -> &'a PmpTable {
        self.table
    }

    /// Returns `Allowed` or `Fault` for `request`.
    pub fn resolve(&self, request: &AccessRequest) -> Decision {
        self.explain(request).decision
    }

    /// Resolves `request` and reports which region governed it.
    ///
    /// # Behavior
    ///
    /// 1. Entries are visited in index order, starting with a previous boundary of 0.
    /// 2. The first entry whose address range contains the address decides:
    ///    its permission bit for the access type selects `Allowed` or `Fault`.
    /// 3. A non-matching entry of any mode (OFF included) hands its raw boundary
    ///    to the next entry as the TOR lower bound.
    /// 4. If nothing matches the access faults.
    pub fn explain(&self, request: &AccessRequest) -> Resolution {
        let address = request.address.val();
        let mut previous_boundary = 0;

        for (index, region) in self.table.iter().enumerate() {
            trace!(
                "pmp{}: mode={} boundary={:#x} prev={:#x}",
                index,
                region.mode().name(),
                region.boundary(),
                previous_boundary
            );
            if region.matches_with(address, previous_boundary, self.napot) {
                let decision = if region.permits(request.access) {
                    Decision::Allowed
                } else {
                    Decision::Fault
                };
                debug!(
                    "{} {} from {} matched pmp{} ({}): {}",
                    request.access,
                    request.address,
                    request.privilege,
                    index,
                    region.mode().name(),
                    decision
                );
                return Resolution {
                    decision,
                    region: Some(index),
                };
            }
            previous_boundary = region.boundary();
        }

        debug!(
            "{} {} from {} matched no region",
            request.access, request.address, request.privilege
        );
        Resolution {
            decision: Decision::Fault,
            region: None,
        }
    }
}

/// Convenience wrapper: resolves one request against `table` with legacy NAPOT decoding.
pub fn check_access(table: &PmpTable, request: &AccessRequest) -> Decision {
    PolicyResolver::new(table).resolve(request)
}
