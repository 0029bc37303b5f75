//! One CPUID result quad and the leaf numbers the decoder consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four 32-bit words CPUID returns for one (leaf, subleaf) query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

impl Registers {
    pub const ZERO: Registers = Registers {
        eax: 0,
        ebx: 0,
        ecx: 0,
        edx: 0,
    };

    pub const fn new(eax: u32, ebx: u32, ecx: u32, edx: u32) -> Self {
        Registers { eax, ebx, ecx, edx }
    }

    /// True when every word is zero, the shape an absent leaf reports.
    pub fn is_zero(&self) -> bool {
        self.eax == 0 && self.ebx == 0 && self.ecx == 0 && self.edx == 0
    }

    /// The 16 bytes of the quad in EAX, EBX, ECX, EDX order, little-endian
    /// per word. Brand-string leaves are assembled from this layout.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.eax.to_le_bytes());
        out[4..8].copy_from_slice(&self.ebx.to_le_bytes());
        out[8..12].copy_from_slice(&self.ecx.to_le_bytes());
        out[12..16].copy_from_slice(&self.edx.to_le_bytes());
        out
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eax=0x{:08x} ebx=0x{:08x} ecx=0x{:08x} edx=0x{:08x}",
            self.eax, self.ebx, self.ecx, self.edx
        )
    }
}

/// Leaf numbers consumed somewhere in the decoder.
pub mod leaf {
    /// Vendor string and maximum basic leaf.
    pub const VENDOR: u32 = 0x0000_0000;
    /// Signature, brand index, feature words.
    pub const FEATURES: u32 = 0x0000_0001;
    /// Legacy cache and TLB descriptor bytes.
    pub const CACHE_DESCRIPTORS: u32 = 0x0000_0002;
    /// Deterministic cache parameters (Intel).
    pub const CACHE_PARAMS: u32 = 0x0000_0004;
    /// Extended topology enumeration.
    pub const TOPOLOGY: u32 = 0x0000_000b;
    /// V2 extended topology enumeration.
    pub const TOPOLOGY_V2: u32 = 0x0000_001f;
    /// Hypervisor identification range base.
    pub const HYPERVISOR: u32 = 0x4000_0000;
    /// Maximum extended leaf.
    pub const EXTENDED: u32 = 0x8000_0000;
    /// Extended signature and feature words.
    pub const EXTENDED_FEATURES: u32 = 0x8000_0001;
    /// Brand string, three consecutive leaves.
    pub const BRAND_0: u32 = 0x8000_0002;
    pub const BRAND_1: u32 = 0x8000_0003;
    pub const BRAND_2: u32 = 0x8000_0004;
    /// L2/L3 cache geometry.
    pub const EXTENDED_CACHE: u32 = 0x8000_0006;
    /// Address sizes and core count.
    pub const ADDRESS_SIZES: u32 = 0x8000_0008;
    /// AMD cache properties (subleaf walk).
    pub const AMD_CACHE_PARAMS: u32 = 0x8000_001d;
    /// AMD processor topology.
    pub const AMD_TOPOLOGY: u32 = 0x8000_001e;
}
