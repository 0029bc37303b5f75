//! Microarchitecture tables: signature to (uarch, family label,
//! process node) on the same first-match mechanics as the model
//! tables, consulted independently of them. The result annotates the
//! model text rather than replacing it.

use serde::Serialize;

use silica_core::{Stash, Vendor};

use crate::engine::{f, first_match, fm, fms, lf, lfm, Rule};

/// One microarchitecture record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Arch {
    pub uarch: Option<&'static str>,
    /// Broader family label ("Atom", "NetBurst"), when the uarch name
    /// alone undersells the lineage.
    pub family: Option<&'static str>,
    /// Process node / packaging description.
    pub node: Option<&'static str>,
    /// True when the uarch name is also the name of the core itself
    /// (Zen, the Atom E-cores); printers can then skip a redundant
    /// annotation.
    pub core_is_uarch: bool,
}

const fn u(uarch: &'static str, node: &'static str) -> Arch {
    Arch { uarch: Some(uarch), family: None, node: Some(node), core_is_uarch: false }
}

const fn uf(uarch: &'static str, family: &'static str, node: &'static str) -> Arch {
    Arch {
        uarch: Some(uarch),
        family: Some(family),
        node: Some(node),
        core_is_uarch: false,
    }
}

/// A row whose uarch name is the core name.
const fn uc(uarch: &'static str, node: &'static str) -> Arch {
    Arch { uarch: Some(uarch), family: None, node: Some(node), core_is_uarch: true }
}

const INTEL: &[Rule<Arch>] = &[
    lfm(4, 0x0, u("i486", "1000 nm")),
    lf(4, u("i486", "800 nm")),
    lfm(5, 0x0, u("P5", "800 nm")),
    lfm(5, 0x1, u("P5", "800 nm")),
    lfm(5, 0x2, u("P5", "600 nm")),
    lfm(5, 0x4, u("P5 MMX", "350 nm")),
    lfm(5, 0x7, u("P5", "350 nm")),
    lfm(5, 0x8, u("P5 MMX", "250 nm")),
    fm(6, 0x01, u("P6", "350 nm")),
    fm(6, 0x03, u("P6", "350 nm")),
    fm(6, 0x05, u("P6", "250 nm")),
    fm(6, 0x06, u("P6", "250 nm")),
    fm(6, 0x07, u("P6", "250 nm")),
    fm(6, 0x08, u("P6", "180 nm")),
    fm(6, 0x0a, u("P6", "180 nm")),
    fm(6, 0x0b, u("P6", "130 nm")),
    fm(6, 0x09, u("Pentium M", "130 nm")),
    fm(6, 0x0d, u("Pentium M", "90 nm")),
    fm(6, 0x0e, u("Enhanced Pentium M", "65 nm")),
    fm(6, 0x0f, uf("Merom", "Core", "65 nm")),
    fm(6, 0x15, uf("Merom", "Core", "65 nm")),
    fm(6, 0x16, uf("Merom", "Core", "65 nm")),
    fm(6, 0x17, uf("Penryn", "Core", "45 nm")),
    fm(6, 0x1d, uf("Penryn", "Core", "45 nm")),
    fm(6, 0x1a, u("Nehalem", "45 nm")),
    fm(6, 0x1e, u("Nehalem", "45 nm")),
    fm(6, 0x2e, u("Nehalem", "45 nm")),
    fm(6, 0x25, u("Westmere", "32 nm")),
    fm(6, 0x2c, u("Westmere", "32 nm")),
    fm(6, 0x2f, u("Westmere", "32 nm")),
    fm(6, 0x2a, u("Sandy Bridge", "32 nm")),
    fm(6, 0x2d, u("Sandy Bridge", "32 nm")),
    fm(6, 0x3a, u("Ivy Bridge", "22 nm")),
    fm(6, 0x3e, u("Ivy Bridge", "22 nm")),
    fm(6, 0x3c, u("Haswell", "22 nm")),
    fm(6, 0x3f, u("Haswell", "22 nm")),
    fm(6, 0x45, u("Haswell", "22 nm")),
    fm(6, 0x46, u("Haswell", "22 nm")),
    fm(6, 0x3d, u("Broadwell", "14 nm")),
    fm(6, 0x47, u("Broadwell", "14 nm")),
    fm(6, 0x4f, u("Broadwell", "14 nm")),
    fm(6, 0x56, u("Broadwell", "14 nm")),
    // Model 0x55 steppings span three derivatives of Skylake-SP.
    fms(6, 0x55, 0x5, u("Cascade Lake", "14 nm")),
    fms(6, 0x55, 0x6, u("Cascade Lake", "14 nm")),
    fms(6, 0x55, 0x7, u("Cascade Lake", "14 nm")),
    fms(6, 0x55, 0xa, u("Cooper Lake", "14 nm")),
    fms(6, 0x55, 0xb, u("Cooper Lake", "14 nm")),
    fm(6, 0x55, u("Skylake", "14 nm")),
    fm(6, 0x4e, u("Skylake", "14 nm")),
    fm(6, 0x5e, u("Skylake", "14 nm")),
    fm(6, 0x8e, u("Kaby Lake", "14 nm")),
    fm(6, 0x9e, u("Kaby Lake", "14 nm")),
    fm(6, 0xa5, u("Comet Lake", "14 nm")),
    fm(6, 0xa6, u("Comet Lake", "14 nm")),
    fm(6, 0x66, u("Palm Cove", "10 nm")),
    fm(6, 0x6a, u("Ice Lake", "10 nm")),
    fm(6, 0x6c, u("Ice Lake", "10 nm")),
    fm(6, 0x7d, u("Ice Lake", "10 nm")),
    fm(6, 0x7e, u("Ice Lake", "10 nm")),
    fm(6, 0x8a, u("Lakefield", "10 nm")),
    fm(6, 0x8c, u("Tiger Lake", "10 nm")),
    fm(6, 0x8d, u("Tiger Lake", "10 nm")),
    fm(6, 0xa7, u("Rocket Lake", "14 nm")),
    fm(6, 0x8f, u("Sapphire Rapids", "Intel 7")),
    fm(6, 0x9d, u("Spring Hill", "10 nm")),
    fm(6, 0xcf, u("Emerald Rapids", "Intel 7")),
    fm(6, 0x97, u("Alder Lake", "Intel 7")),
    fm(6, 0x9a, u("Alder Lake", "Intel 7")),
    fm(6, 0xb7, u("Raptor Lake", "Intel 7")),
    fm(6, 0xba, u("Raptor Lake", "Intel 7")),
    fm(6, 0xbf, u("Alder Lake", "Intel 7")),
    fm(6, 0xaa, u("Meteor Lake", "Intel 4")),
    fm(6, 0xad, u("Granite Rapids", "Intel 3")),
    fm(6, 0xaf, uc("Crestmont", "Intel 3")),
    fm(6, 0xbd, u("Lunar Lake", "TSMC N3B")),
    fm(6, 0xb5, u("Arrow Lake", "TSMC N3B")),
    fm(6, 0xc5, u("Arrow Lake", "TSMC N3B")),
    fm(6, 0xc6, u("Arrow Lake", "TSMC N3B")),
    fm(6, 0xcc, u("Panther Lake", "Intel 18A")),
    fm(6, 0xdd, uc("Darkmont", "Intel 18A")),
    // Atom lines.
    fm(6, 0x1c, uf("Bonnell", "Atom", "45 nm")),
    fm(6, 0x26, uf("Bonnell", "Atom", "45 nm")),
    fm(6, 0x27, uf("Saltwell", "Atom", "32 nm")),
    fm(6, 0x35, uf("Saltwell", "Atom", "32 nm")),
    fm(6, 0x36, uf("Saltwell", "Atom", "32 nm")),
    fm(6, 0x37, uf("Silvermont", "Atom", "22 nm")),
    fm(6, 0x4a, uf("Silvermont", "Atom", "22 nm")),
    fm(6, 0x4d, uf("Silvermont", "Atom", "22 nm")),
    fm(6, 0x5a, uf("Silvermont", "Atom", "22 nm")),
    fm(6, 0x4c, uf("Airmont", "Atom", "14 nm")),
    fm(6, 0x75, uf("Airmont", "Atom", "14 nm")),
    fm(6, 0x5c, uf("Goldmont", "Atom", "14 nm")),
    fm(6, 0x5f, uf("Goldmont", "Atom", "14 nm")),
    fm(6, 0x7a, uf("Goldmont Plus", "Atom", "14 nm")),
    fm(6, 0x86, uf("Tremont", "Atom", "10 nm")),
    fm(6, 0x96, uf("Tremont", "Atom", "10 nm")),
    fm(6, 0x9c, uf("Tremont", "Atom", "10 nm")),
    fm(6, 0xbe, uc("Gracemont", "Intel 7")),
    fm(6, 0xb6, uc("Crestmont", "Intel 7")),
    fm(6, 0x57, u("Knights Landing", "14 nm")),
    fm(6, 0x85, u("Knights Mill", "14 nm")),
    fm(0xb, 0x01, u("Knights Corner", "22 nm")),
    // NetBurst.
    fm(0xf, 0x0, uf("Willamette", "NetBurst", "180 nm")),
    fm(0xf, 0x1, uf("Willamette", "NetBurst", "180 nm")),
    fm(0xf, 0x2, uf("Northwood", "NetBurst", "130 nm")),
    fm(0xf, 0x3, uf("Prescott", "NetBurst", "90 nm")),
    fm(0xf, 0x4, uf("Prescott", "NetBurst", "90 nm")),
    fm(0xf, 0x6, uf("Cedar Mill", "NetBurst", "65 nm")),
];

const AMD: &[Rule<Arch>] = &[
    lf(4, u("Am486", "500 nm")),
    lfm(5, 0x0, u("K5", "500 nm")),
    lfm(5, 0x1, u("K5", "350 nm")),
    lfm(5, 0x2, u("K5", "350 nm")),
    lfm(5, 0x3, u("K5", "350 nm")),
    lfm(5, 0x6, u("K6", "350 nm")),
    lfm(5, 0x7, u("K6", "250 nm")),
    lfm(5, 0x8, u("K6", "250 nm")),
    lfm(5, 0x9, u("K6", "250 nm")),
    lfm(5, 0xd, u("K6", "180 nm")),
    lfm(6, 0x1, u("K7", "250 nm")),
    lfm(6, 0x2, u("K7", "180 nm")),
    lfm(6, 0x3, u("K7", "180 nm")),
    lfm(6, 0x4, u("K7", "180 nm")),
    lfm(6, 0x6, u("K7", "180 nm")),
    lfm(6, 0x7, u("K7", "180 nm")),
    lfm(6, 0x8, u("K7", "130 nm")),
    lfm(6, 0xa, u("K7", "130 nm")),
    fm(0xf, 0x04, u("K8", "130 nm")),
    fm(0xf, 0x05, u("K8", "130 nm")),
    fm(0xf, 0x07, u("K8", "130 nm")),
    fm(0xf, 0x08, u("K8", "130 nm")),
    fm(0xf, 0x0b, u("K8", "130 nm")),
    fm(0xf, 0x0c, u("K8", "130 nm")),
    fm(0xf, 0x0e, u("K8", "130 nm")),
    fm(0xf, 0x0f, u("K8", "130 nm")),
    fm(0xf, 0x41, u("K8", "90 nm")),
    fm(0xf, 0x43, u("K8", "90 nm")),
    fm(0xf, 0x48, u("K8", "90 nm")),
    fm(0xf, 0x4b, u("K8", "90 nm")),
    fm(0xf, 0x4c, u("K8", "90 nm")),
    fm(0xf, 0x4f, u("K8", "90 nm")),
    fm(0xf, 0x5d, u("K8", "90 nm")),
    fm(0xf, 0x5f, u("K8", "90 nm")),
    fm(0xf, 0x68, u("K8", "65 nm")),
    fm(0xf, 0x6b, u("K8", "65 nm")),
    fm(0xf, 0x6c, u("K8", "65 nm")),
    fm(0xf, 0x6f, u("K8", "65 nm")),
    fm(0xf, 0x7c, u("K8", "65 nm")),
    fm(0xf, 0x7f, u("K8", "65 nm")),
    // Remaining K8 models are the 90 nm middle of the line.
    f(0xf, u("K8", "90 nm")),
    fm(0x10, 0x02, u("K10", "65 nm")),
    f(0x10, u("K10", "45 nm")),
    f(0x11, u("K10 (Griffin)", "65 nm")),
    f(0x12, u("K10 (Llano)", "32 nm")),
    f(0x14, uc("Bobcat", "40 nm")),
    fm(0x15, 0x01, uc("Bulldozer", "32 nm")),
    fm(0x15, 0x02, uc("Piledriver", "32 nm")),
    fm(0x15, 0x10, uc("Piledriver", "32 nm")),
    fm(0x15, 0x13, uc("Piledriver", "32 nm")),
    fm(0x15, 0x30, uc("Steamroller", "28 nm")),
    fm(0x15, 0x38, uc("Steamroller", "28 nm")),
    fm(0x15, 0x60, uc("Excavator", "28 nm")),
    fm(0x15, 0x65, uc("Excavator", "28 nm")),
    fm(0x15, 0x70, uc("Excavator", "28 nm")),
    f(0x15, uc("Bulldozer", "32 nm")),
    fm(0x16, 0x30, uc("Puma", "28 nm")),
    f(0x16, uc("Jaguar", "28 nm")),
    fm(0x17, 0x01, uc("Zen", "14 nm")),
    fm(0x17, 0x08, uc("Zen+", "12 nm")),
    fm(0x17, 0x11, uc("Zen", "14 nm")),
    fm(0x17, 0x18, uc("Zen+", "12 nm")),
    fm(0x17, 0x20, uc("Zen", "14 nm")),
    fm(0x17, 0x31, uc("Zen 2", "7 nm")),
    fm(0x17, 0x47, uc("Zen", "14 nm")),
    fm(0x17, 0x60, uc("Zen 2", "7 nm")),
    fm(0x17, 0x68, uc("Zen 2", "7 nm")),
    fm(0x17, 0x71, uc("Zen 2", "7 nm")),
    fm(0x17, 0x90, uc("Zen 2", "7 nm")),
    fm(0x17, 0x98, uc("Zen 2", "7 nm")),
    fm(0x17, 0xa0, uc("Zen 2", "6 nm")),
    f(0x17, uc("Zen", "14 nm")),
    fm(0x19, 0x01, uc("Zen 3", "7 nm")),
    fm(0x19, 0x08, uc("Zen 3", "7 nm")),
    fm(0x19, 0x21, uc("Zen 3", "7 nm")),
    fm(0x19, 0x50, uc("Zen 3", "7 nm")),
    fm(0x19, 0x40, uc("Zen 3+", "6 nm")),
    fm(0x19, 0x44, uc("Zen 3+", "6 nm")),
    fm(0x19, 0x11, uc("Zen 4", "5 nm")),
    fm(0x19, 0x18, uc("Zen 4", "5 nm")),
    fm(0x19, 0x61, uc("Zen 4", "5 nm")),
    fm(0x19, 0x74, uc("Zen 4", "4 nm")),
    fm(0x19, 0x75, uc("Zen 4", "4 nm")),
    fm(0x19, 0x78, uc("Zen 4", "4 nm")),
    fm(0x19, 0xa0, uc("Zen 4c", "5 nm")),
    f(0x19, uc("Zen 3", "7 nm")),
    f(0x1a, uc("Zen 5", "4 nm")),
];

const CYRIX: &[Rule<Arch>] = &[
    lfm(4, 0x4, u("MediaGX", "500 nm")),
    lfm(4, 0x9, u("5x86", "650 nm")),
    lfm(5, 0x2, u("M1", "600 nm")),
    lfm(5, 0x4, u("MediaGX MMX", "350 nm")),
    lf(5, u("M1", "600 nm")),
    lf(6, u("M2", "350 nm")),
];

const VIA: &[Rule<Arch>] = &[
    lfm(5, 0x4, u("WinChip C6", "350 nm")),
    lfm(5, 0x8, u("WinChip 2", "250 nm")),
    lfm(5, 0x9, u("WinChip 3", "250 nm")),
    fm(6, 0x06, u("Samuel", "180 nm")),
    fm(6, 0x07, u("Samuel 2/Ezra", "150 nm")),
    fm(6, 0x08, u("Ezra-T", "130 nm")),
    fm(6, 0x09, u("Nehemiah", "130 nm")),
    fm(6, 0x0a, u("Esther", "90 nm")),
    fm(6, 0x0d, u("Esther", "90 nm")),
    fm(6, 0x0f, u("Isaiah", "65 nm")),
    f(7, u("Isaiah", "40 nm")),
];

const TRANSMETA: &[Rule<Arch>] = &[
    lf(5, u("Crusoe", "130 nm")),
    f(0xf, u("Efficeon", "90 nm")),
];

const ZHAOXIN: &[Rule<Arch>] = &[
    fm(7, 0x1b, u("WuDaoKou", "28 nm")),
    fm(7, 0x3b, u("LuJiaZui", "16 nm")),
    fm(7, 0x5b, u("Shijidadao", "7 nm")),
    f(6, u("Zhangjiang", "28 nm")),
];

const HYGON: &[Rule<Arch>] = &[f(0x18, uc("Zen (Dhyana)", "14 nm"))];

const UMC: &[Rule<Arch>] = &[lf(4, u("U5", "600 nm"))];

const NEXGEN: &[Rule<Arch>] = &[lf(5, u("Nx586", "500 nm"))];

const RISE: &[Rule<Arch>] = &[
    lfm(5, 0x0, u("mP6", "250 nm")),
    lfm(5, 0x2, u("mP6", "180 nm")),
    lf(5, u("mP6", "250 nm")),
];

const SIS: &[Rule<Arch>] = &[lf(5, u("55x", "250 nm"))];

const NSC: &[Rule<Arch>] = &[
    lfm(5, 0x4, u("Geode GX1", "180 nm")),
    lfm(5, 0x5, u("Geode GX2", "150 nm")),
    lfm(5, 0xa, u("Geode LX", "130 nm")),
];

const VORTEX: &[Rule<Arch>] = &[
    lfm(5, 0x2, u("Vortex86DX", "90 nm")),
    lfm(5, 0x8, u("Vortex86MX", "90 nm")),
    lfm(6, 0x0, u("Vortex86EX2", "40 nm")),
];

/// Look up the microarchitecture record for the stash's CPU. `None`
/// for vendors without a table or signatures without a row; absence of
/// an annotation is normal output, not a failure.
pub fn lookup(stash: &Stash) -> Option<Arch> {
    let table: &[Rule<Arch>] = match stash.vendor {
        Vendor::Intel => INTEL,
        Vendor::Amd => AMD,
        Vendor::Cyrix => CYRIX,
        Vendor::Via => VIA,
        Vendor::Transmeta => TRANSMETA,
        Vendor::Zhaoxin => ZHAOXIN,
        Vendor::Hygon => HYGON,
        Vendor::Umc => UMC,
        Vendor::NexGen => NEXGEN,
        Vendor::Rise => RISE,
        Vendor::Sis => SIS,
        Vendor::Nsc => NSC,
        Vendor::Vortex => VORTEX,
        _ => return None,
    };
    first_match(table, &stash.signature(), stash).copied()
}
