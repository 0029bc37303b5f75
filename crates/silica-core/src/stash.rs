//! The per-CPU accumulator every decoding stage reads from.

use serde::Serialize;

use crate::bits::field;
use crate::brand::BrandBuffer;
use crate::cache::CacheObservations;
use crate::registers::{leaf, Registers};
use crate::signature::Signature;
use crate::vendor::{Hypervisor, Vendor};

/// Brand-derived disambiguation hints, populated by the brand analyzer
/// stage. Multiple hints may hold at once (a part can be both mobile
/// and a Celeron). All default false/zero for an empty brand string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BrandHints {
    pub mobile: bool,
    // Intel lines.
    pub celeron: bool,
    pub core_brand: bool,
    pub pentium: bool,
    pub pentium_d: bool,
    pub xeon: bool,
    pub xeon_mp: bool,
    pub atom: bool,
    pub extreme: bool,
    pub scalable: bool,
    // AMD lines.
    pub athlon: bool,
    pub athlon_mp: bool,
    pub duron: bool,
    pub sempron: bool,
    pub opteron: bool,
    pub phenom: bool,
    pub turion: bool,
    pub ryzen: bool,
    pub epyc: bool,
    pub threadripper: bool,
    pub embedded: bool,
    /// Explicit core count stated in the brand text ("Dual-Core",
    /// "16-Core"). Zero means unspecified.
    pub cores: u32,
    /// Trailing Intel SKU-tier letter ('U', 'Y', 'H', ...), when the
    /// brand carries a model number with one.
    pub line_suffix: Option<char>,
}

/// Computed multiprocessing summary, filled by the topology resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MpSummary {
    /// Name of the most precise enumeration method that applied, `None`
    /// when no topology information was available at all.
    pub method: Option<&'static str>,
    /// Physical cores; zero means unknown.
    pub cores: u32,
    /// Logical processors; zero means unknown.
    pub threads: u32,
    /// APIC ID sub-field widths, when computable.
    pub widths: Option<ApicWidths>,
}

/// Bit widths of the APIC ID sub-fields, least significant first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApicWidths {
    pub smt: u32,
    pub core: u32,
    /// AMD family 15h compute-unit level, absent elsewhere.
    pub compute_unit: Option<u32>,
    /// Total low-order bits below the package ID (the sum of the
    /// per-level widths).
    pub package: u32,
}

/// Everything accumulated while examining one CPU.
///
/// Stages write in order: [`absorb`](Self::absorb) during the leaf scan,
/// then the brand analyzer fills `hints` (and possibly
/// `override_brand`), then the topology resolver fills `mp`. No field
/// is written twice.
#[derive(Debug, Clone, Default)]
pub struct Stash {
    pub vendor: Vendor,
    pub hypervisor: Hypervisor,

    /// Maximum basic leaf, from leaf 0 EAX.
    pub max_basic_leaf: u32,
    pub val_1_eax: u32,
    pub val_1_ebx: u32,
    pub val_1_ecx: u32,
    pub val_1_edx: u32,
    /// Leaf 4 subleaf 0 EAX (Intel deterministic cache / core count).
    pub val_4_eax: u32,
    /// Leaf 0xB subleaf walk, in subleaf order, stopping at the first
    /// invalid level.
    pub leaf_b: Vec<Registers>,
    /// Leaf 0x1F subleaf walk.
    pub leaf_1f: Vec<Registers>,
    pub val_80000001_eax: u32,
    pub val_80000001_ebx: u32,
    pub val_80000001_ecx: u32,
    pub val_80000001_edx: u32,
    pub val_80000008_ecx: u32,
    pub val_8000001e_ebx: u32,

    pub brand: BrandBuffer,
    /// Synthesized replacement brand, produced for AMD/Hygon parts whose
    /// OEM string says "model unknown".
    pub override_brand: Option<String>,
    pub hints: BrandHints,
    pub cache: CacheObservations,
    pub mp: MpSummary,
}

impl Stash {
    pub fn new() -> Self {
        Stash::default()
    }

    /// Record one leaf's register quad. Leaves the decoder never
    /// consumes are ignored; callers may feed a full dump through
    /// without filtering.
    pub fn absorb(&mut self, leaf_nr: u32, subleaf: u32, regs: &Registers) {
        match leaf_nr {
            leaf::VENDOR => {
                self.max_basic_leaf = regs.eax;
                self.vendor = Vendor::from_leaf0(regs);
            }
            leaf::FEATURES => {
                self.val_1_eax = regs.eax;
                self.val_1_ebx = regs.ebx;
                self.val_1_ecx = regs.ecx;
                self.val_1_edx = regs.edx;
            }
            leaf::CACHE_DESCRIPTORS => self.cache.absorb_descriptors(regs),
            leaf::CACHE_PARAMS if subleaf == 0 => self.val_4_eax = regs.eax,
            leaf::TOPOLOGY => self.absorb_topology_level(false, subleaf, regs),
            leaf::TOPOLOGY_V2 => self.absorb_topology_level(true, subleaf, regs),
            leaf::HYPERVISOR => self.hypervisor = Hypervisor::from_leaf(regs),
            leaf::EXTENDED_FEATURES => {
                self.val_80000001_eax = regs.eax;
                self.val_80000001_ebx = regs.ebx;
                self.val_80000001_ecx = regs.ecx;
                self.val_80000001_edx = regs.edx;
            }
            leaf::BRAND_0 | leaf::BRAND_1 | leaf::BRAND_2 => {
                self.brand.absorb((leaf_nr - leaf::BRAND_0) as usize, regs);
            }
            leaf::EXTENDED_CACHE => self.cache.absorb_extended(regs),
            leaf::ADDRESS_SIZES => self.val_80000008_ecx = regs.ecx,
            leaf::AMD_TOPOLOGY => self.val_8000001e_ebx = regs.ebx,
            _ => {}
        }
    }

    fn absorb_topology_level(&mut self, v2: bool, subleaf: u32, regs: &Registers) {
        // Level type 0 terminates the walk; an all-zero quad is an
        // absent leaf.
        if field(regs.ecx, 8, 15) == 0 {
            return;
        }
        let levels = if v2 { &mut self.leaf_1f } else { &mut self.leaf_b };
        if subleaf as usize == levels.len() {
            levels.push(*regs);
        }
    }

    /// The identification key for this CPU: leaf 1 EAX, or the extended
    /// signature word for parts that never populate leaf 1.
    pub fn signature(&self) -> Signature {
        Signature::from_eax(Signature::select_word(self.val_1_eax, self.val_80000001_eax))
    }

    /// Leaf 1 EBX[7:0], Intel's brand index.
    pub fn brand_id(&self) -> u32 {
        field(self.val_1_ebx, 0, 7)
    }

    /// The brand text the analyzer and printer should use: the
    /// synthesized override when present, the OEM string otherwise.
    pub fn effective_brand(&self) -> String {
        match &self.override_brand {
            Some(text) => text.clone(),
            None => self.brand.text(),
        }
    }

    /// Leaf 1 EDX bit 28, "supports hyper-threading" (really "more than
    /// one logical processor per package").
    pub fn htt(&self) -> bool {
        crate::bits::bit(self.val_1_edx, 28)
    }

    /// Leaf 1 EBX[23:16], logical processor count per package.
    pub fn logical_count(&self) -> u32 {
        field(self.val_1_ebx, 16, 23)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_routes_leaves_to_fields() {
        let mut stash = Stash::new();
        stash.absorb(
            leaf::VENDOR,
            0,
            &Registers::new(0xd, 0x756e_6547, 0x6c65_746e, 0x4965_6e69),
        );
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0003_06a9, 0x0210_0800, 0, 0));
        stash.absorb(leaf::ADDRESS_SIZES, 0, &Registers::new(0x3028, 0, 0x0007, 0));
        assert_eq!(stash.vendor, Vendor::Intel);
        assert_eq!(stash.max_basic_leaf, 0xd);
        assert_eq!(stash.signature().model(), 0x3a);
        assert_eq!(stash.brand_id(), 0);
        assert_eq!(stash.val_80000008_ecx, 0x0007);
    }

    #[test]
    fn topology_walk_stops_at_invalid_level() {
        let mut stash = Stash::new();
        stash.absorb(leaf::TOPOLOGY, 0, &Registers::new(1, 2, 0x0100, 0));
        stash.absorb(leaf::TOPOLOGY, 1, &Registers::new(4, 8, 0x0201, 0));
        stash.absorb(leaf::TOPOLOGY, 2, &Registers::new(0, 0, 0x0002, 0));
        assert_eq!(stash.leaf_b.len(), 2);
    }

    #[test]
    fn signature_falls_back_to_extended_word() {
        let mut stash = Stash::new();
        stash.absorb(
            leaf::EXTENDED_FEATURES,
            0,
            &Registers::new(0x0000_0560, 0, 0, 0),
        );
        assert_eq!(stash.signature().family(), 5);
        assert_eq!(stash.signature().model(), 6);
    }

    #[test]
    fn effective_brand_prefers_override() {
        let mut stash = Stash::new();
        stash.override_brand = Some("AMD Athlon(tm) 64 Processor 3200+".into());
        assert_eq!(
            stash.effective_brand(),
            "AMD Athlon(tm) 64 Processor 3200+"
        );
    }
}
