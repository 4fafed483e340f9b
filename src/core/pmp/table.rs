//! PMP Configuration Table.
//!
//! Holds the 64 `pmpcfg`/`pmpaddr` pairs in table order. Entries are decoded
//! into [`Region`]s once when the table is built.

use crate::common::{Error, Result, PMP_ENTRIES};

use super::region::Region;

/// An ordered, fixed-size table of PMP regions.
///
/// Index order is both match priority and the source of each TOR region's
/// lower bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PmpTable {
    regions: [Region; PMP_ENTRIES],
}

impl PmpTable {
    /// Builds a table from index-aligned configuration bytes and boundaries.
    pub fn new(cfg: &[u8; PMP_ENTRIES], addr: &[u64; PMP_ENTRIES]) -> Self {
        Self {
            regions: std::array::from_fn(|i| Region::new(cfg[i], addr[i])),
        }
    }

    /// Builds a table from a slice of `(pmpcfg, pmpaddr)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableShape`] unless exactly 64 pairs are supplied.
    pub fn from_entries(entries: &[(u8, u64)]) -> Result<Self> {
        if entries.len() != PMP_ENTRIES {
            return Err(Error::TableShape {
                expected: PMP_ENTRIES,
                found: entries.len(),
            });
        }
        Ok(Self {
            regions: std::array::from_fn(|i| Region::new(entries[i].0, entries[i].1)),
        })
    }

    /// Returns a table with every entry OFF and every boundary zero.
    pub fn disabled() -> Self {
        Self::new(&[0; PMP_ENTRIES], &[0; PMP_ENTRIES])
    }

    /// Returns a copy of this table with entry `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 64.
    pub fn with_entry(mut self, index: usize, config: u8, boundary: u64) -> Self {
        self.regions[index] = Region::new(config, boundary);
        self
    }

    /// Returns the region at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Returns all regions in table order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterates over the regions in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Returns the number of entries, always 64.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false`; present for symmetry with [`PmpTable::len`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for PmpTable {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<'a> IntoIterator for &'a PmpTable {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
