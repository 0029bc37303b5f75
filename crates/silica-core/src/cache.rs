//! Cache geometry observations used to disambiguate identical signatures.
//!
//! Several historic parts shipped the same family/model/stepping under
//! different names, split only by cache size (Celeron Covington vs
//! Pentium II Deschutes, K6-2 vs K6-III). The observations here feed the
//! predicate layer; they are not a full cache report.

use serde::{Deserialize, Serialize};

use crate::bits::field;
use crate::registers::Registers;

/// Booleans accumulated from leaf 2 descriptor bytes plus the raw
/// L2/L3 geometry words from leaf 0x8000_0006.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheObservations {
    /// Descriptor 0x40: no L2 (or no L3 on parts that have L2).
    pub no_l2: bool,
    pub l2_256k_4w: bool,
    pub l2_512k_4w: bool,
    pub l2_1m_or_2m_4w: bool,
    pub l2_256k_8w: bool,
    pub l2_512k_8w: bool,
    pub l2_1m_or_2m_8w: bool,
    pub l2_2m: bool,
    pub l2_6m: bool,
    pub l3_seen: bool,
    /// Leaf 0x8000_0006 ECX[31:16], KB. Zero when the leaf was absent.
    pub l2_size_kb: u32,
    /// Leaf 0x8000_0006 ECX[15:12], vendor associativity code.
    pub l2_assoc_code: u8,
    /// Leaf 0x8000_0006 EDX[31:18] in 512 KB units, converted to KB.
    pub l3_size_kb: u32,
}

impl CacheObservations {
    /// Scan one leaf 2 result. The low byte of EAX is a repeat count,
    /// not a descriptor; a register with bit 31 set carries no
    /// descriptors.
    pub fn absorb_descriptors(&mut self, regs: &Registers) {
        let words = [regs.eax & !0xff, regs.ebx, regs.ecx, regs.edx];
        for word in words {
            if word & 0x8000_0000 != 0 {
                continue;
            }
            for shift in [0u32, 8, 16, 24] {
                self.note_descriptor(((word >> shift) & 0xff) as u8);
            }
        }
    }

    fn note_descriptor(&mut self, code: u8) {
        match code {
            0x40 => self.no_l2 = true,
            0x42 => self.l2_256k_4w = true,
            0x43 | 0x86 => self.l2_512k_4w = true,
            0x44 | 0x78 => self.l2_1m_or_2m_4w = true,
            0x45 => {
                self.l2_1m_or_2m_4w = true;
                self.l2_2m = true;
            }
            0x7a | 0x82 => self.l2_256k_8w = true,
            0x7b | 0x83 => self.l2_512k_8w = true,
            0x7c | 0x84 | 0x87 => self.l2_1m_or_2m_8w = true,
            0x7d | 0x85 => {
                self.l2_1m_or_2m_8w = true;
                self.l2_2m = true;
            }
            0x4e => self.l2_6m = true,
            0x22 | 0x23 | 0x25 | 0x29 | 0x46 | 0x47 | 0x4a..=0x4d | 0xd0..=0xd8 | 0xde
            | 0xe2..=0xe4 | 0xea..=0xec => self.l3_seen = true,
            _ => {}
        }
    }

    /// Record the L2/L3 geometry words from leaf 0x8000_0006.
    pub fn absorb_extended(&mut self, regs: &Registers) {
        self.l2_size_kb = field(regs.ecx, 16, 31);
        self.l2_assoc_code = field(regs.ecx, 12, 15) as u8;
        self.l3_size_kb = field(regs.edx, 18, 31) * 512;
        if self.l3_size_kb > 0 {
            self.l3_seen = true;
        }
    }

    /// Any 1 MB or 2 MB L2 observation, either associativity.
    pub fn l2_1m_or_2m(&self) -> bool {
        self.l2_1m_or_2m_4w || self.l2_1m_or_2m_8w
    }

    /// Any 256 KB L2 observation, either associativity.
    pub fn l2_256k(&self) -> bool {
        self.l2_256k_4w || self.l2_256k_8w
    }

    /// Any 512 KB L2 observation, either associativity.
    pub fn l2_512k(&self) -> bool {
        self.l2_512k_4w || self.l2_512k_8w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_eax_byte_is_not_a_descriptor() {
        let mut obs = CacheObservations::default();
        // 0x42 in the repeat-count position must be ignored.
        obs.absorb_descriptors(&Registers::new(0x0000_0042, 0, 0, 0));
        assert!(!obs.l2_256k_4w);
    }

    #[test]
    fn bit31_invalidates_register() {
        let mut obs = CacheObservations::default();
        obs.absorb_descriptors(&Registers::new(0x0000_0001, 0x8000_0043, 0, 0));
        assert!(!obs.l2_512k_4w);
    }

    #[test]
    fn deschutes_descriptors() {
        // Pentium II: 512K 4-way L2 descriptor 0x43 in EBX.
        let mut obs = CacheObservations::default();
        obs.absorb_descriptors(&Registers::new(0x0303_0101, 0x0000_0043, 0, 0x0c04_0843));
        assert!(obs.l2_512k_4w);
        assert!(obs.l2_512k());
        assert!(!obs.no_l2);
    }

    #[test]
    fn covington_reports_no_l2() {
        let mut obs = CacheObservations::default();
        obs.absorb_descriptors(&Registers::new(0x0000_0001, 0x0000_0040, 0, 0));
        assert!(obs.no_l2);
    }

    #[test]
    fn extended_geometry() {
        // K6-III: 256 KB L2 on die.
        let mut obs = CacheObservations::default();
        obs.absorb_extended(&Registers::new(0, 0, 0x0100_4220, 0));
        assert_eq!(obs.l2_size_kb, 256);
        assert_eq!(obs.l2_assoc_code, 4);
        assert_eq!(obs.l3_size_kb, 0);
    }

    #[test]
    fn l3_size_implies_l3_seen() {
        let mut obs = CacheObservations::default();
        // 64 MB L3: EDX[31:18] = 128.
        obs.absorb_extended(&Registers::new(0, 0, 0, 128 << 18));
        assert_eq!(obs.l3_size_kb, 65536);
        assert!(obs.l3_seen);
    }
}
