//! AMD model table.
//!
//! Brand-line splits lean on substrings because AMD reused signatures
//! across retail lines freely (a 17h/31h part is Rome or Castle Peak
//! depending only on the box). The K6 and K7 eras split on the on-die
//! L2 size from leaf 0x8000_0006. Matched text for families with a
//! documented name-string table later gets the decoded model number
//! appended by the synthesis layer.

use crate::engine::{f, fallback, fm, fmq, fq, lfm, lfmq, lfms, Rule};
use crate::query::amd as q;

pub const MODELS: &[Rule<&'static str>] = &[
    // Am486 and Am5x86.
    lfm(4, 0x3, "Am486DX2"),
    lfm(4, 0x7, "Am486DX2 WB"),
    lfm(4, 0x8, "Am486DX4"),
    lfm(4, 0x9, "Am486DX4 WB"),
    lfm(4, 0xe, "Am5x86"),
    lfm(4, 0xf, "Am5x86 WB"),
    // K5 / K6.
    lfm(5, 0x0, "K5 (SSA/5)"),
    lfm(5, 0x1, "K5 (5k86)"),
    lfm(5, 0x2, "K5 (5k86)"),
    lfm(5, 0x3, "K5 (5k86)"),
    lfm(5, 0x6, "K6"),
    lfm(5, 0x7, "K6 (Little Foot)"),
    lfm(5, 0x8, "K6-2 (Chomper)"),
    lfm(5, 0x9, "K6-III (Sharptooth)"),
    // K6-2+ and K6-III+ share model 0xD; only the on-die L2 differs.
    lfmq(5, 0xd, q::k6_on_die_l2, "K6-III+ (Sharptooth+)"),
    lfm(5, 0xd, "K6-2+ (Chomper+)"),
    // K7. Barton and Thorton share a signature, split by L2 size.
    lfm(6, 0x1, "Athlon (K7 Argon)"),
    lfm(6, 0x2, "Athlon (K75 Pluto/Orion)"),
    lfm(6, 0x3, "Duron (Spitfire)"),
    lfmq(6, 0x4, q::mobile, "Mobile Athlon (Thunderbird)"),
    lfms(6, 0x4, 0x2, "Athlon (Thunderbird A4-A8)"),
    lfms(6, 0x4, 0x4, "Athlon (Thunderbird A9)"),
    lfm(6, 0x4, "Athlon (Thunderbird)"),
    lfmq(6, 0x6, q::athlon_mp, "Athlon MP (Palomino)"),
    lfmq(6, 0x6, q::duron, "Duron (Morgan)"),
    lfmq(6, 0x6, q::mobile, "Mobile Athlon 4 (Palomino)"),
    lfm(6, 0x6, "Athlon XP (Palomino)"),
    lfmq(6, 0x7, q::mobile, "Mobile Duron (Camaro)"),
    lfm(6, 0x7, "Duron (Morgan)"),
    lfmq(6, 0x8, q::athlon_mp, "Athlon MP (Thoroughbred)"),
    lfmq(6, 0x8, q::duron, "Duron (Applebred)"),
    lfmq(6, 0x8, q::mobile, "Mobile Athlon XP-M (Thoroughbred)"),
    lfms(6, 0x8, 0x0, "Athlon XP (Thoroughbred A0)"),
    lfms(6, 0x8, 0x1, "Athlon XP (Thoroughbred B0)"),
    lfm(6, 0x8, "Athlon XP (Thoroughbred)"),
    lfmq(6, 0xa, q::athlon_mp, "Athlon MP (Barton)"),
    lfmq(6, 0xa, q::sempron, "Sempron (Thorton)"),
    lfmq(6, 0xa, q::l2_512k, "Athlon XP (Barton)"),
    lfm(6, 0xa, "Athlon XP (Thorton)"),
    // K8. Model nibbles encode socket/revision pairs; the brand line
    // does the useful splitting, and the name-string decoder appends
    // the marketing number.
    fmq(0xf, 0x04, q::mobile, "Mobile Athlon 64 (ClawHammer)"),
    fm(0xf, 0x04, "Athlon 64 (ClawHammer)"),
    fm(0xf, 0x05, "Opteron (SledgeHammer)"),
    fmq(0xf, 0x07, q::opteron, "Opteron 1xx (SledgeHammer)"),
    fm(0xf, 0x07, "Athlon 64 FX (SledgeHammer)"),
    fmq(0xf, 0x08, q::mobile, "Mobile Athlon 64 (ClawHammer)"),
    fm(0xf, 0x08, "Athlon 64 (ClawHammer)"),
    fm(0xf, 0x0b, "Athlon 64 (Paris)"),
    fmq(0xf, 0x0c, q::sempron, "Sempron (Paris)"),
    fm(0xf, 0x0c, "Athlon 64 (Newcastle)"),
    fm(0xf, 0x0e, "Athlon 64 (Newcastle)"),
    fmq(0xf, 0x0f, q::sempron, "Sempron (Palermo)"),
    fm(0xf, 0x0f, "Athlon 64 (Winchester)"),
    fm(0xf, 0x14, "Athlon 64 (Winchester)"),
    fm(0xf, 0x15, "Opteron (Athens)"),
    fm(0xf, 0x17, "Athlon 64 (Winchester)"),
    fm(0xf, 0x18, "Athlon 64 Mobile (Newark)"),
    fm(0xf, 0x1b, "Athlon 64 (Venice)"),
    fmq(0xf, 0x1c, q::sempron, "Sempron (Palermo)"),
    fm(0xf, 0x1c, "Athlon 64 (Venice)"),
    fm(0xf, 0x1f, "Athlon 64 (Venice/San Diego)"),
    fm(0xf, 0x21, "Opteron Dual Core (Italy/Egypt)"),
    fm(0xf, 0x23, "Athlon 64 X2 (Toledo)"),
    fm(0xf, 0x24, "Turion 64 (Lancaster)"),
    fm(0xf, 0x25, "Opteron (Troy)"),
    fm(0xf, 0x27, "Athlon 64 (San Diego)"),
    fm(0xf, 0x2b, "Athlon 64 X2 (Manchester)"),
    fmq(0xf, 0x2c, q::sempron, "Sempron (Palermo)"),
    fm(0xf, 0x2c, "Athlon 64 (Venice)"),
    fm(0xf, 0x2f, "Athlon 64 (Venice)"),
    // NPT K8 (DDR2).
    fmq(0xf, 0x41, q::opteron, "Opteron Dual Core (Santa Rosa)"),
    fm(0xf, 0x41, "Athlon 64 FX Dual Core (Windsor)"),
    fmq(0xf, 0x43, q::opteron, "Opteron Dual Core (Santa Rosa)"),
    fm(0xf, 0x43, "Athlon 64 X2 (Windsor)"),
    fmq(0xf, 0x48, q::turion, "Turion 64 X2 (Taylor/Trinidad)"),
    fm(0xf, 0x48, "Athlon 64 X2 Mobile (Taylor)"),
    fm(0xf, 0x4b, "Athlon 64 X2 (Brisbane)"),
    fmq(0xf, 0x4c, q::mobile, "Mobile Sempron (Keene)"),
    fm(0xf, 0x4c, "Sempron (Manila)"),
    fm(0xf, 0x4f, "Athlon 64 (Orleans)"),
    fm(0xf, 0x5d, "Opteron (Santa Rosa)"),
    fm(0xf, 0x5f, "Athlon 64 (Orleans)"),
    fm(0xf, 0x68, "Turion 64 X2 (Tyler)"),
    fmq(0xf, 0x6b, q::sempron, "Sempron X2 (Brisbane)"),
    fm(0xf, 0x6b, "Athlon 64 X2 (Brisbane)"),
    fmq(0xf, 0x6c, q::mobile, "Mobile Sempron (Sherman)"),
    fm(0xf, 0x6c, "Sempron (Sparta)"),
    fm(0xf, 0x6f, "Athlon / Sempron (Lima/Sparta)"),
    fm(0xf, 0x7c, "Athlon (Lima)"),
    fm(0xf, 0x7f, "Athlon 64 (Lima)"),
    f(0xf, "K8 (unknown model)"),
    // Family 10h (K10).
    fmq(0x10, 0x02, q::opteron, "Opteron 2300/8300 (Barcelona)"),
    fm(0x10, 0x02, "Phenom X3/X4 (Agena/Toliman)"),
    fmq(0x10, 0x04, q::opteron, "Opteron 2300/8300 (Shanghai)"),
    fm(0x10, 0x04, "Phenom II X4 (Deneb)"),
    fmq(0x10, 0x05, q::phenom, "Phenom II X2/X3 (Callisto/Heka)"),
    fm(0x10, 0x05, "Athlon II X4 (Propus)"),
    fm(0x10, 0x06, "Athlon II X2 (Regor)"),
    fm(0x10, 0x08, "Opteron 2400/8400 Six-Core (Istanbul)"),
    fm(0x10, 0x09, "Opteron 6100 (Magny-Cours)"),
    fm(0x10, 0x0a, "Phenom II X6 (Thuban)"),
    f(0x10, "K10 (unknown model)"),
    // Family 11h: the mobile K8/K10 hybrid.
    fm(0x11, 0x03, "Turion X2 / Athlon X2 (Griffin)"),
    f(0x11, "Turion (unknown Griffin model)"),
    // Family 12h: Llano APUs.
    fmq(0x12, 0x01, q::sempron, "Sempron APU (Llano)"),
    fm(0x12, 0x01, "A-Series APU (Llano)"),
    f(0x12, "APU (Llano)"),
    // Family 14h: Bobcat.
    fm(0x14, 0x01, "C/E/G-Series APU (Ontario/Zacate)"),
    fm(0x14, 0x02, "C/E/G-Series APU (Ontario/Zacate)"),
    f(0x14, "APU (Bobcat)"),
    // Family 15h: the construction cores. Model ranges move through
    // Bulldozer, Piledriver, Steamroller, Excavator.
    fmq(0x15, 0x01, q::opteron, "Opteron 6200/4200 (Interlagos/Valencia)"),
    fm(0x15, 0x01, "FX-4000/6000/8000 (Zambezi)"),
    fmq(0x15, 0x02, q::opteron, "Opteron 6300/4300 (Abu Dhabi/Seoul)"),
    fm(0x15, 0x02, "FX-4300/6300/8300 (Vishera)"),
    fm(0x15, 0x10, "A-Series APU (Trinity)"),
    fm(0x15, 0x13, "A-Series APU (Richland)"),
    fm(0x15, 0x30, "A-Series APU (Kaveri)"),
    fm(0x15, 0x38, "A-Series APU (Godavari)"),
    fm(0x15, 0x60, "A-Series APU (Carrizo)"),
    fm(0x15, 0x65, "A-Series APU (Bristol Ridge)"),
    fm(0x15, 0x70, "A/E2-Series APU (Stoney Ridge)"),
    f(0x15, "Bulldozer-derived (unknown model)"),
    // Family 16h: Jaguar and Puma.
    fm(0x16, 0x00, "Athlon/Sempron APU (Kabini)"),
    fm(0x16, 0x30, "A-Series APU (Beema/Mullins)"),
    f(0x16, "APU (Jaguar/Puma)"),
    // Family 17h: Zen through Zen 2. Several signatures shipped under
    // three retail lines at once.
    fmq(0x17, 0x01, q::embedded, "EPYC Embedded 3000 (Snowy Owl)"),
    fmq(0x17, 0x01, q::epyc, "EPYC 7001 (Naples)"),
    fmq(0x17, 0x01, q::threadripper, "Ryzen Threadripper 1000 (Whitehaven)"),
    fm(0x17, 0x01, "Ryzen 1000 (Summit Ridge)"),
    fmq(0x17, 0x08, q::threadripper, "Ryzen Threadripper 2000 (Colfax)"),
    fm(0x17, 0x08, "Ryzen 2000 (Pinnacle Ridge)"),
    fmq(0x17, 0x11, q::embedded, "Ryzen Embedded V1000 (Great Horned Owl)"),
    fmq(0x17, 0x11, q::athlon, "Athlon 200GE (Raven Ridge)"),
    fmq(0x17, 0x11, q::mobile, "Ryzen 2000U/H (Raven Ridge)"),
    fm(0x17, 0x11, "Ryzen 2000G APU (Raven Ridge)"),
    fmq(0x17, 0x18, q::athlon, "Athlon 3000G (Picasso)"),
    fmq(0x17, 0x18, q::mobile, "Ryzen 3000U/H (Picasso)"),
    fm(0x17, 0x18, "Ryzen 3000G APU (Picasso)"),
    fmq(0x17, 0x20, q::ryzen, "Ryzen 3 3250U (Dali)"),
    fmq(0x17, 0x20, q::athlon, "Athlon Silver/Gold 3050 (Dali)"),
    fm(0x17, 0x20, "Athlon 3000 / Ryzen 3 3200U (Dali)"),
    fmq(0x17, 0x31, q::epyc, "EPYC 7002 (Rome)"),
    fmq(0x17, 0x31, q::threadripper, "Ryzen Threadripper 3000 (Castle Peak)"),
    fm(0x17, 0x31, "EPYC 7002 / Threadripper 3000 (Rome/Castle Peak)"),
    fm(0x17, 0x47, "Ryzen 3000C (Pollock)"),
    fmq(0x17, 0x60, q::embedded, "Ryzen Embedded V2000 (Grey Hawk)"),
    fmq(0x17, 0x60, q::mobile, "Ryzen 4000U/H (Renoir)"),
    fm(0x17, 0x60, "Ryzen 4000G APU (Renoir)"),
    fm(0x17, 0x68, "Ryzen 5000U (Lucienne)"),
    fm(0x17, 0x71, "Ryzen 3000 (Matisse)"),
    fm(0x17, 0x90, "Ryzen Z1 / Custom APU (Van Gogh)"),
    fm(0x17, 0x98, "Ryzen (Mero)"),
    fm(0x17, 0xa0, "Ryzen/Athlon 7020 (Mendocino)"),
    fq(0x17, q::epyc, "EPYC (unknown Zen model)"),
    f(0x17, "Zen/Zen+/Zen 2 (unknown model)"),
    // Family 18h is Hygon's; it never ships with an AMD vendor string,
    // so no rows exist for it here.
    // Family 19h: Zen 3 and Zen 4.
    fm(0x19, 0x01, "EPYC 7003 (Milan)"),
    fm(0x19, 0x08, "Ryzen Threadripper 5000 (Chagall)"),
    fm(0x19, 0x11, "EPYC 9004 (Genoa)"),
    fm(0x19, 0x18, "Ryzen Threadripper 7000 (Storm Peak)"),
    fm(0x19, 0x21, "Ryzen 5000 (Vermeer)"),
    fm(0x19, 0x40, "Ryzen 6000 (Rembrandt)"),
    fm(0x19, 0x44, "Ryzen 6000U/H (Rembrandt)"),
    fmq(0x19, 0x50, q::mobile, "Ryzen 5000U/H (Cezanne)"),
    fm(0x19, 0x50, "Ryzen 5000G APU (Cezanne)"),
    fm(0x19, 0x61, "Ryzen 7000 (Raphael)"),
    fm(0x19, 0x74, "Ryzen 7040 (Phoenix)"),
    fm(0x19, 0x75, "Ryzen 8000G / 7040 (Phoenix)"),
    fm(0x19, 0x78, "Ryzen 8000 (Phoenix 2)"),
    fm(0x19, 0xa0, "EPYC 97x4 / 8004 (Bergamo/Siena)"),
    fq(0x19, q::epyc, "EPYC (unknown Zen 3/4 model)"),
    f(0x19, "Zen 3/Zen 4 (unknown model)"),
    // Family 1Ah: Zen 5.
    fm(0x1a, 0x02, "EPYC 9005 (Turin)"),
    fm(0x1a, 0x08, "Ryzen Threadripper 9000 (Shimada Peak)"),
    fm(0x1a, 0x11, "EPYC 9005 dense (Turin-D)"),
    fm(0x1a, 0x24, "Ryzen AI 300 (Strix Point)"),
    fm(0x1a, 0x60, "Ryzen AI 300 (Krackan Point)"),
    fm(0x1a, 0x44, "Ryzen 9000 (Granite Ridge)"),
    fm(0x1a, 0x70, "Ryzen AI 300 (Strix Halo)"),
    f(0x1a, "Zen 5 (unknown model)"),
    fallback("unknown"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::first_match;
    use silica_core::{Signature, Stash};

    fn resolve(eax: u32, stash: &Stash) -> &'static str {
        first_match(MODELS, &Signature::from_eax(eax), stash).copied().unwrap()
    }

    #[test]
    fn k6_cache_split() {
        // Model 0xD: K6-2+ without on-die L2, K6-III+ with 256K.
        let plain = Stash::new();
        assert_eq!(resolve(0x0000_05d4, &plain), "K6-2+ (Chomper+)");

        let mut with_l2 = Stash::new();
        with_l2.cache.l2_size_kb = 256;
        assert_eq!(resolve(0x0000_05d4, &with_l2), "K6-III+ (Sharptooth+)");
    }

    #[test]
    fn barton_vs_thorton() {
        let mut barton = Stash::new();
        barton.cache.l2_size_kb = 512;
        assert_eq!(resolve(0x0000_06a0, &barton), "Athlon XP (Barton)");

        let thorton = Stash::new();
        assert_eq!(resolve(0x0000_06a0, &thorton), "Athlon XP (Thorton)");
    }

    #[test]
    fn rome_castle_peak_split() {
        // 0x00830f10: family 0x17, model 0x31. Three-way retail split.
        let mut epyc = Stash::new();
        epyc.hints.epyc = true;
        assert_eq!(resolve(0x0083_0f10, &epyc), "EPYC 7002 (Rome)");

        let mut tr = Stash::new();
        tr.hints.threadripper = true;
        assert_eq!(
            resolve(0x0083_0f10, &tr),
            "Ryzen Threadripper 3000 (Castle Peak)"
        );

        let bare = Stash::new();
        assert_eq!(
            resolve(0x0083_0f10, &bare),
            "EPYC 7002 / Threadripper 3000 (Rome/Castle Peak)"
        );
    }

    #[test]
    fn thoroughbred_stepping_names_the_revision() {
        let stash = Stash::new();
        assert_eq!(resolve(0x0000_0680, &stash), "Athlon XP (Thoroughbred A0)");
        assert_eq!(resolve(0x0000_0681, &stash), "Athlon XP (Thoroughbred B0)");
        assert_eq!(resolve(0x0000_0682, &stash), "Athlon XP (Thoroughbred)");
    }

    #[test]
    fn snowy_owl_outranks_naples() {
        // EPYC Embedded brand text sets both hints; the embedded row
        // must win on their shared signature.
        let mut stash = Stash::new();
        stash.hints.epyc = true;
        stash.hints.embedded = true;
        assert_eq!(resolve(0x0080_0f12, &stash), "EPYC Embedded 3000 (Snowy Owl)");

        let mut naples = Stash::new();
        naples.hints.epyc = true;
        assert_eq!(resolve(0x0080_0f12, &naples), "EPYC 7001 (Naples)");
    }

    #[test]
    fn raven_ridge_retail_lines() {
        // 0x00810f10: family 0x17, model 0x11. Four retail lines.
        let mut athlon = Stash::new();
        athlon.hints.athlon = true;
        assert_eq!(resolve(0x0081_0f10, &athlon), "Athlon 200GE (Raven Ridge)");

        let mut embedded = Stash::new();
        embedded.hints.ryzen = true;
        embedded.hints.embedded = true;
        assert_eq!(
            resolve(0x0081_0f10, &embedded),
            "Ryzen Embedded V1000 (Great Horned Owl)"
        );

        let bare = Stash::new();
        assert_eq!(resolve(0x0081_0f10, &bare), "Ryzen 2000G APU (Raven Ridge)");
    }

    #[test]
    fn dali_splits_ryzen_from_athlon() {
        let mut ryzen = Stash::new();
        ryzen.hints.ryzen = true;
        assert_eq!(resolve(0x0082_0f00, &ryzen), "Ryzen 3 3250U (Dali)");

        let mut athlon = Stash::new();
        athlon.hints.athlon = true;
        assert_eq!(resolve(0x0082_0f00, &athlon), "Athlon Silver/Gold 3050 (Dali)");
    }

    #[test]
    fn unlisted_zen_model_keeps_epyc_branding() {
        // Model 0x99 has no row; the branded family fallback still
        // names the server line.
        let mut epyc = Stash::new();
        epyc.hints.epyc = true;
        assert_eq!(resolve(0x0089_0f90, &epyc), "EPYC (unknown Zen model)");

        let bare = Stash::new();
        assert_eq!(resolve(0x0089_0f90, &bare), "Zen/Zen+/Zen 2 (unknown model)");
    }

    #[test]
    fn zen3_vs_zen4_models() {
        let stash = Stash::new();
        assert_eq!(resolve(0x00a2_0f12, &stash), "Ryzen 5000 (Vermeer)");
        assert_eq!(resolve(0x00a6_0f12, &stash), "Ryzen 7000 (Raphael)");
    }

    #[test]
    fn unknown_family_model_degrades() {
        let stash = Stash::new();
        assert_eq!(resolve(0x00b1_0f00, &stash), "Zen 5 (unknown model)");
        assert_eq!(resolve(0x0fff_0fff, &stash), "unknown");
    }
}
