//! Brand string assembly from the three extended brand leaves.

use crate::registers::Registers;

/// The 48-byte marketing string, built incrementally as leaves
/// 0x8000_0002..=0x8000_0004 are absorbed.
#[derive(Debug, Clone)]
pub struct BrandBuffer {
    bytes: [u8; 48],
    seen: [bool; 3],
}

impl Default for BrandBuffer {
    fn default() -> Self {
        Self {
            bytes: [0u8; 48],
            seen: [false; 3],
        }
    }
}

impl BrandBuffer {
    /// Store one of the three 16-byte brand chunks. `index` is the leaf
    /// offset from 0x8000_0002.
    pub fn absorb(&mut self, index: usize, regs: &Registers) {
        if index < 3 {
            self.bytes[index * 16..(index + 1) * 16].copy_from_slice(&regs.to_bytes());
            self.seen[index] = true;
        }
    }

    /// True when any brand leaf was present.
    pub fn is_populated(&self) -> bool {
        self.seen.iter().any(|&s| s)
    }

    /// The brand text: NUL-terminated, leading/trailing whitespace
    /// trimmed, non-ASCII bytes dropped. Empty when the leaves were
    /// absent or held no printable text.
    pub fn text(&self) -> String {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        let printable: String = self.bytes[..end]
            .iter()
            .filter(|b| b.is_ascii() && (b.is_ascii_graphic() || **b == b' '))
            .map(|&b| b as char)
            .collect();
        printable.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &[u8; 16]) -> Registers {
        let word = |i: usize| u32::from_le_bytes(text[i..i + 4].try_into().unwrap());
        Registers::new(word(0), word(4), word(8), word(12))
    }

    #[test]
    fn assembles_and_trims() {
        let mut brand = BrandBuffer::default();
        brand.absorb(0, &chunk(b"      Intel(R) C"));
        brand.absorb(1, &chunk(b"ore(TM) i7-3770K"));
        brand.absorb(2, &chunk(b" CPU @ 3.50GHz\0\0"));
        assert_eq!(brand.text(), "Intel(R) Core(TM) i7-3770K CPU @ 3.50GHz");
        assert!(brand.is_populated());
    }

    #[test]
    fn empty_when_absent() {
        let brand = BrandBuffer::default();
        assert_eq!(brand.text(), "");
        assert!(!brand.is_populated());
    }

    #[test]
    fn stops_at_nul() {
        let mut brand = BrandBuffer::default();
        brand.absorb(0, &chunk(b"AMD-K6(tm)\0junk!"));
        assert_eq!(brand.text(), "AMD-K6(tm)");
    }
}
