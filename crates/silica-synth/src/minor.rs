//! Model tables for the minor x86 vendors: UMC, NexGen, Rise, SiS,
//! NSC, and Vortex. Each shipped a handful of parts, so the tables
//! are short; they exist so these vendors degrade to a real name
//! instead of "unknown".

use crate::engine::{f, fallback, lfm, lfms, Rule};

pub const UMC: &[Rule<&'static str>] = &[
    lfm(4, 0x1, "U5D"),
    lfm(4, 0x2, "U5S"),
    fallback("unknown"),
];

pub const NEXGEN: &[Rule<&'static str>] = &[
    // Nx586 reports stepping 4 with FPU, 6 without; both shipped.
    lfms(5, 0x0, 0x4, "Nx586 / Nx586FPU"),
    lfm(5, 0x0, "Nx586"),
    fallback("unknown"),
];

pub const RISE: &[Rule<&'static str>] = &[
    lfm(5, 0x0, "mP6 (iDragon, 0.25u)"),
    lfm(5, 0x2, "mP6 (iDragon, 0.18u)"),
    lfm(5, 0x8, "mP6 (iDragon II)"),
    lfm(5, 0x9, "mP6 (iDragon II, new)"),
    fallback("unknown"),
];

pub const SIS: &[Rule<&'static str>] = &[lfm(5, 0x0, "55x"), fallback("unknown")];

pub const NSC: &[Rule<&'static str>] = &[
    lfm(5, 0x4, "Geode GX1/GXLV/GXm"),
    lfm(5, 0x5, "Geode GX2"),
    lfm(5, 0xa, "Geode LX"),
    f(5, "Geode (unknown model)"),
    fallback("unknown"),
];

pub const VORTEX: &[Rule<&'static str>] = &[
    lfm(5, 0x2, "Vortex86DX"),
    lfm(5, 0x8, "Vortex86MX"),
    lfm(6, 0x0, "Vortex86EX2"),
    fallback("unknown"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::first_match;
    use silica_core::{Signature, Stash};

    #[test]
    fn geode_family_row_catches_unlisted_models() {
        let stash = Stash::new();
        let got = first_match(NSC, &Signature::from_eax(0x0000_0570), &stash);
        assert_eq!(got, Some(&"Geode (unknown model)"));
    }

    #[test]
    fn every_minor_table_is_total() {
        let stash = Stash::new();
        let sig = Signature::from_eax(0xffff_ffff);
        for table in [UMC, NEXGEN, RISE, SIS, NSC, VORTEX] {
            assert_eq!(first_match(table, &sig, &stash), Some(&"unknown"));
        }
    }
}
