//! Vendor and hypervisor identification from CPUID signature strings.

use serde::{Deserialize, Serialize};

use crate::registers::Registers;

/// CPU vendor, mapped from the 12-byte leaf 0 string.
///
/// Unrecognized strings map to `Unknown`, which disables every
/// vendor-specific rule table but never fails a decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    Intel,
    Amd,
    Cyrix,
    Via,
    Transmeta,
    Umc,
    NexGen,
    Rise,
    Sis,
    Nsc,
    Vortex,
    Zhaoxin,
    Hygon,
    #[default]
    Unknown,
}

impl Vendor {
    /// Map a leaf 0 result to a vendor. The 12-byte string lives in
    /// EBX, EDX, ECX in that order.
    pub fn from_leaf0(regs: &Registers) -> Self {
        Vendor::from_bytes(&signature_bytes(regs.ebx, regs.edx, regs.ecx))
    }

    pub fn from_bytes(s: &[u8; 12]) -> Self {
        match s {
            b"GenuineIntel" => Vendor::Intel,
            b"AuthenticAMD" | b"AMDisbetter!" => Vendor::Amd,
            b"CyrixInstead" => Vendor::Cyrix,
            b"CentaurHauls" | b"VIA VIA VIA " => Vendor::Via,
            b"GenuineTMx86" | b"TransmetaCPU" => Vendor::Transmeta,
            b"UMC UMC UMC " => Vendor::Umc,
            b"NexGenDriven" => Vendor::NexGen,
            b"RiseRiseRise" => Vendor::Rise,
            b"SiS SiS SiS " => Vendor::Sis,
            b"Geode by NSC" => Vendor::Nsc,
            b"Vortex86 SoC" => Vendor::Vortex,
            b"  Shanghai  " => Vendor::Zhaoxin,
            b"HygonGenuine" => Vendor::Hygon,
            _ => Vendor::Unknown,
        }
    }

    /// Display name, `None` for unrecognized vendors.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Vendor::Intel => Some("Intel"),
            Vendor::Amd => Some("AMD"),
            Vendor::Cyrix => Some("Cyrix"),
            Vendor::Via => Some("VIA"),
            Vendor::Transmeta => Some("Transmeta"),
            Vendor::Umc => Some("UMC"),
            Vendor::NexGen => Some("NexGen"),
            Vendor::Rise => Some("Rise"),
            Vendor::Sis => Some("SiS"),
            Vendor::Nsc => Some("NSC"),
            Vendor::Vortex => Some("Vortex"),
            Vendor::Zhaoxin => Some("Zhaoxin"),
            Vendor::Hygon => Some("Hygon"),
            Vendor::Unknown => None,
        }
    }

    /// Vendors whose signature key comes from leaf 0x8000_0001 when
    /// leaf 1 was never populated share the AMD decode path.
    pub fn is_amd_lineage(&self) -> bool {
        matches!(self, Vendor::Amd | Vendor::Hygon)
    }
}

/// Hypervisor identity from the leaf 0x4000_0000 signature string.
/// Reported alongside the hardware identification; the model decoder
/// itself never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hypervisor {
    #[default]
    None,
    VmWare,
    Kvm,
    Xen,
    HyperV,
    Qemu,
    Bhyve,
    Acrn,
    Parallels,
    Unknown,
}

impl Hypervisor {
    /// Map a leaf 0x4000_0000 result. Unlike the vendor leaf, the
    /// string lives in EBX, ECX, EDX order.
    pub fn from_leaf(regs: &Registers) -> Self {
        if regs.is_zero() {
            return Hypervisor::None;
        }
        match &signature_bytes(regs.ebx, regs.ecx, regs.edx) {
            b"VMwareVMware" => Hypervisor::VmWare,
            b"KVMKVMKVM\0\0\0" => Hypervisor::Kvm,
            b"XenVMMXenVMM" => Hypervisor::Xen,
            b"Microsoft Hv" => Hypervisor::HyperV,
            b"TCGTCGTCGTCG" => Hypervisor::Qemu,
            b"bhyve bhyve " => Hypervisor::Bhyve,
            b"ACRNACRNACRN" => Hypervisor::Acrn,
            b" prl hyperv " | b" lrpepyh vr " => Hypervisor::Parallels,
            _ => Hypervisor::Unknown,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Hypervisor::None => None,
            Hypervisor::VmWare => Some("VMware"),
            Hypervisor::Kvm => Some("KVM"),
            Hypervisor::Xen => Some("Xen"),
            Hypervisor::HyperV => Some("Microsoft Hyper-V"),
            Hypervisor::Qemu => Some("QEMU TCG"),
            Hypervisor::Bhyve => Some("bhyve"),
            Hypervisor::Acrn => Some("ACRN"),
            Hypervisor::Parallels => Some("Parallels"),
            Hypervisor::Unknown => Some("unknown hypervisor"),
        }
    }
}

fn signature_bytes(a: u32, b: u32, c: u32) -> [u8; 12] {
    let mut out = [0u8; 12];
    out[0..4].copy_from_slice(&a.to_le_bytes());
    out[4..8].copy_from_slice(&b.to_le_bytes());
    out[8..12].copy_from_slice(&c.to_le_bytes());
    out
}
