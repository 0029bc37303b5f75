//! The family/model/stepping identification key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::field;

/// A CPU's identification signature, split out of the leaf 1 EAX word
/// (or leaf 0x8000_0001 EAX for parts that only populate the extended
/// range).
///
/// Rule tables match against the synthesized [`family()`](Self::family)
/// and [`model()`](Self::model) views, which fold the extended bits in
/// per the documented combination formulas. The raw 4-bit fields remain
/// available for pre-extended-encoding parts whose tables were written
/// against the truncated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub extended_family: u8,
    pub base_family: u8,
    pub extended_model: u8,
    pub base_model: u8,
    pub stepping: u8,
}

impl Signature {
    /// Split a raw EAX signature word.
    pub const fn from_eax(eax: u32) -> Self {
        Signature {
            extended_family: field(eax, 20, 27) as u8,
            base_family: field(eax, 8, 11) as u8,
            extended_model: field(eax, 16, 19) as u8,
            base_model: field(eax, 4, 7) as u8,
            stepping: field(eax, 0, 3) as u8,
        }
    }

    /// The identification word for a stash: leaf 1 EAX when present,
    /// otherwise leaf 0x8000_0001 EAX for parts with vendor-only basic
    /// leaves.
    pub fn select_word(basic_eax: u32, extended_eax: u32) -> u32 {
        if basic_eax != 0 {
            basic_eax
        } else {
            extended_eax
        }
    }

    /// Synthesized family: base + extended. The extended field is only
    /// meaningful when the base family is 0xF, but the addition is the
    /// documented formula either way (extended reads zero below 0xF).
    pub const fn family(&self) -> u32 {
        self.base_family as u32 + self.extended_family as u32
    }

    /// Synthesized model: extended model folded into the high nibble.
    pub const fn model(&self) -> u32 {
        ((self.extended_model as u32) << 4) | self.base_model as u32
    }

    /// True when all fields are zero, meaning no signature leaf was seen.
    pub fn is_empty(&self) -> bool {
        self.family() == 0 && self.model() == 0 && self.stepping == 0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "family 0x{:x}, model 0x{:x}, stepping 0x{:x}",
            self.family(),
            self.model(),
            self.stepping
        )
    }
}
