//! Unit tests for PMP region decoding and address matching.

use pmp_check::common::AccessType;
use pmp_check::core::pmp::{AddressMatch, NapotDecode, Region};

const OFF: u8 = 0x00;
const TOR: u8 = 0x08;
const NA4: u8 = 0x10;
const NAPOT: u8 = 0x18;

/// Tests decoding of the address-matching field.
#[test]
fn test_mode_decode() {
    assert_eq!(Region::new(OFF, 0).mode(), AddressMatch::Off);
    assert_eq!(Region::new(TOR, 0).mode(), AddressMatch::Tor);
    assert_eq!(Region::new(NA4, 0).mode(), AddressMatch::Na4);
    assert_eq!(Region::new(NAPOT, 0).mode(), AddressMatch::Napot);

    // Bits outside [4:3] never change the mode.
    assert_eq!(Region::new(0xE7, 0).mode(), AddressMatch::Off);
    assert_eq!(Region::new(0x8F, 0).mode(), AddressMatch::Tor);
    assert_eq!(Region::new(0xFF, 0).mode(), AddressMatch::Napot);
}

/// Tests decoding of the permission bits.
#[test]
fn test_permission_decode() {
    let r = Region::new(NA4 | 0x1, 0);
    assert!(r.can_read() && !r.can_write() && !r.can_execute());

    let w = Region::new(NA4 | 0x2, 0);
    assert!(!w.can_read() && w.can_write() && !w.can_execute());

    let x = Region::new(NA4 | 0x4, 0);
    assert!(!x.can_read() && !x.can_write() && x.can_execute());

    let rwx = Region::new(0x07, 0x40);
    assert!(rwx.can_read() && rwx.can_write() && rwx.can_execute());
    assert_eq!(rwx.config(), 0x07);
    assert_eq!(rwx.boundary(), 0x40);
}

/// Tests that permits selects exactly the matching bit.
#[test]
fn test_permits_by_access_type() {
    let region = Region::new(NA4 | 0x1, 0x2000);
    assert!(region.permits(AccessType::Read));
    assert!(!region.permits(AccessType::Write));
    assert!(!region.permits(AccessType::Execute));

    let region = Region::new(NA4 | 0x6, 0x2000);
    assert!(!region.permits(AccessType::Read));
    assert!(region.permits(AccessType::Write));
    assert!(region.permits(AccessType::Execute));
}

/// Tests that an OFF region never matches.
#[test]
fn test_off_never_matches() {
    let region = Region::new(OFF | 0x7, 0x1000);
    for addr in [0, 0x0FFF, 0x1000, 0x1001, u64::MAX] {
        assert!(!region.matches(addr, 0));
        assert!(!region.matches(addr, addr));
    }
}

/// Tests the half-open TOR interval.
#[test]
fn test_tor_half_open() {
    let region = Region::new(TOR, 0x1000);
    assert!(region.matches(0, 0));
    assert!(region.matches(0x0FFF, 0));
    assert!(!region.matches(0x1000, 0));

    assert!(!region.matches(0x07FF, 0x0800));
    assert!(region.matches(0x0800, 0x0800));
}

/// Tests that a TOR region whose lower bound is not below its top is empty.
#[test]
fn test_tor_empty_range() {
    let region = Region::new(TOR, 0x1000);
    assert!(!region.matches(0x1000, 0x1000));
    assert!(!region.matches(0x1800, 0x2000));
    assert!(!region.matches(0x0800, 0x2000));

    let zero = Region::new(TOR, 0);
    assert!(!zero.matches(0, 0));
}

/// Tests the four bytes covered by an NA4 region.
#[test]
fn test_na4_covers_four_bytes() {
    let region = Region::new(NA4, 0x2000);
    for addr in 0x2000..0x2004 {
        assert!(region.matches(addr, 0), "{:#x}", addr);
    }
    assert!(!region.matches(0x1FFF, 0));
    assert!(!region.matches(0x2004, 0));
}

/// Tests that NA4 uses the boundary as a literal, unaligned base.
#[test]
fn test_na4_unaligned_base() {
    let region = Region::new(NA4, 0x2002);
    assert!(!region.matches(0x2001, 0));
    assert!(region.matches(0x2002, 0));
    assert!(region.matches(0x2005, 0));
    assert!(!region.matches(0x2006, 0));
}

/// Tests NA4 at the top of the address space does not wrap.
#[test]
fn test_na4_top_of_address_space() {
    let region = Region::new(NA4, u64::MAX - 1);
    assert!(region.matches(u64::MAX - 1, 0));
    assert!(region.matches(u64::MAX, 0));
    assert!(!region.matches(0, 0));
    assert!(!region.matches(1, 0));
}

/// Tests that the previous boundary only matters for TOR.
#[test]
fn test_previous_boundary_ignored_outside_tor() {
    let na4 = Region::new(NA4, 0x2000);
    assert!(na4.matches(0x2000, 0xFFFF_FFFF));

    let napot = Region::new(NAPOT, 0x0);
    assert!(napot.matches(0x3, 0x1000));
}

/// Tests the legacy NAPOT size formula on small exponents.
///
/// Boundary 0..=3 masks to 0, giving a 4-byte block; boundary 4 masks to 4,
/// giving a 64-byte block.
#[test]
fn test_napot_legacy_small_blocks() {
    let region = Region::new(NAPOT, 0x0);
    assert!(region.matches(0x0, 0));
    assert!(region.matches(0x3, 0));
    assert!(!region.matches(0x4, 0));

    let region = Region::new(NAPOT, 0x3);
    assert!(region.matches(0x0, 0));
    assert!(region.matches(0x3, 0));
    assert!(!region.matches(0x4, 0));

    let region = Region::new(NAPOT, 0x4);
    for addr in 0x0..0x40 {
        assert!(region.matches(addr, 0), "{:#x}", addr);
    }
    assert!(!region.matches(0x40, 0));
}

/// Tests that every address in the decoded block matches and nothing outside does.
#[test]
fn test_napot_legacy_block_membership() {
    // (8 & 0xFFFF_FFFC) + 2 = 10, so the block is 1 KiB.
    let region = Region::new(NAPOT, 0x8);
    let size = 1u64 << 10;
    let base = 0x8 & !(size - 1);
    for addr in base..base + size {
        assert!(region.matches(addr, 0), "{:#x}", addr);
    }
    assert!(!region.matches(base + size, 0));
    assert!(!region.matches(base + 5 * size, 0));
}

/// Tests that a large exponent covers the whole address space.
#[test]
fn test_napot_legacy_large_exponent() {
    // (0x40 & 0xFFFF_FFFC) + 2 = 66 > 64.
    let region = Region::new(NAPOT, 0x40);
    assert!(region.matches(0, 0));
    assert!(region.matches(0x8000_0000, 0));
    assert!(region.matches(u64::MAX, 0));

    // (0x3C & 0xFFFF_FFFC) + 2 = 62: two 4 EiB blocks.
    let region = Region::new(NAPOT, 0x3C);
    assert!(region.matches(0, 0));
    assert!(region.matches((1 << 62) - 1, 0));
    assert!(!region.matches(1 << 62, 0));
}

/// Tests that bits above 31 are masked out of the legacy exponent.
#[test]
fn test_napot_legacy_masks_upper_bits() {
    // Exponent (0x1_0000_0000 & 0xFFFF_FFFC) + 2 = 2: a 4-byte block at 4 GiB.
    let region = Region::new(NAPOT, 0x1_0000_0000);
    assert!(region.matches(0x1_0000_0000, 0));
    assert!(region.matches(0x1_0000_0003, 0));
    assert!(!region.matches(0x1_0000_0004, 0));
    assert!(!region.matches(0x0, 0));
}

/// Tests the opt-in trailing-ones NAPOT decode.
#[test]
fn test_napot_trailing_ones() {
    let decode = NapotDecode::TrailingOnes;

    // 0x2000 >> 2 = 0x800: no trailing ones, 4-byte block.
    let region = Region::new(NAPOT, 0x2000);
    assert!(region.matches_with(0x2003, 0, decode));
    assert!(!region.matches_with(0x2004, 0, decode));

    // 0x200C >> 2 = 0x803: two trailing ones, 16-byte block at 0x2000.
    let region = Region::new(NAPOT, 0x200C);
    assert!(region.matches_with(0x2000, 0, decode));
    assert!(region.matches_with(0x200F, 0, decode));
    assert!(!region.matches_with(0x2010, 0, decode));
    assert!(!region.matches_with(0x1FFF, 0, decode));
}

/// Tests that the two NAPOT decodes can disagree.
#[test]
fn test_napot_decodes_differ() {
    let region = Region::new(NAPOT, 0x200C);
    // Legacy exponent is 0x200C + 2: the whole address space.
    assert!(region.matches_with(0xFFFF_0000, 0, NapotDecode::Legacy));
    assert!(!region.matches_with(0xFFFF_0000, 0, NapotDecode::TrailingOnes));
}

/// Tests mode mnemonics.
#[test]
fn test_mode_names() {
    assert_eq!(AddressMatch::Off.name(), "OFF");
    assert_eq!(AddressMatch::Tor.name(), "TOR");
    assert_eq!(AddressMatch::Na4.name(), "NA4");
    assert_eq!(AddressMatch::Napot.name(), "NAPOT");
    assert_eq!(AddressMatch::from_bits(0b111), AddressMatch::Napot);
}
