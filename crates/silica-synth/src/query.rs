//! Named disambiguation predicates, one module per vendor family.
//!
//! Each predicate is a pure function of the stash, evaluated at
//! rule-match time. A predicate whose inputs were never populated
//! (brand leaves absent, cache leaf never queried) evaluates false, so
//! partial input falls through to a less specific rule instead of
//! erroring.

use silica_core::Stash;

/// Intel predicates. Brand-line identity comes from two sources that
/// arrived at different points in history: the brand-index byte in leaf
/// 1 EBX (family 0xF era) and substrings of the brand string. Pre-brand
/// parts (P6 era) are split by observed cache geometry instead.
pub mod intel {
    use super::*;

    pub fn mobile(stash: &Stash) -> bool {
        stash.hints.mobile
    }

    pub fn celeron(stash: &Stash) -> bool {
        stash.hints.celeron
            || matches!(stash.brand_id(), 0x01 | 0x0a | 0x14)
            || (stash.brand_id() == 0x03 && stash.val_1_eax == 0x06b1)
    }

    pub fn celeron_mobile(stash: &Stash) -> bool {
        (stash.hints.celeron && stash.hints.mobile)
            || matches!(stash.brand_id(), 0x07 | 0x0f | 0x13 | 0x17)
    }

    pub fn celeron_m(stash: &Stash) -> bool {
        stash.brand_id() == 0x12
    }

    pub fn pentium(stash: &Stash) -> bool {
        stash.hints.pentium
    }

    pub fn pentium_d(stash: &Stash) -> bool {
        stash.hints.pentium_d || (stash.hints.pentium && stash.hints.cores == 2)
    }

    pub fn pentium_m(stash: &Stash) -> bool {
        stash.brand_id() == 0x16 || (stash.hints.pentium && stash.hints.mobile)
    }

    // Three brand IDs invert meaning on exact signature words, per the
    // footnotes of Intel's brand-ID table: 0x03 is a Celeron on 0x06b1,
    // 0x0b and 0x0e swap lines on 0x0f13.

    pub fn xeon(stash: &Stash) -> bool {
        stash.hints.xeon
            || match stash.brand_id() {
                0x0b | 0x0c => true,
                0x03 => stash.val_1_eax != 0x06b1,
                0x0e => stash.val_1_eax == 0x0f13,
                _ => false,
            }
    }

    pub fn xeon_mp(stash: &Stash) -> bool {
        stash.hints.xeon_mp
            || stash.brand_id() == 0x0c
            || (stash.brand_id() == 0x0b && stash.val_1_eax == 0x0f13)
    }

    pub fn xeon_scalable(stash: &Stash) -> bool {
        stash.hints.xeon && stash.hints.scalable
    }

    pub fn mobile_p4(stash: &Stash) -> bool {
        (stash.brand_id() == 0x0e && stash.val_1_eax != 0x0f13)
            || (stash.hints.pentium && stash.hints.mobile)
    }

    pub fn core_line(stash: &Stash) -> bool {
        stash.hints.core_brand
    }

    pub fn extreme(stash: &Stash) -> bool {
        stash.hints.extreme
    }

    pub fn atom(stash: &Stash) -> bool {
        stash.hints.atom
    }

    /// Low-power mobile SKU letters introduced with the post-2013
    /// numbering (i7-8550U and friends).
    pub fn low_power_suffix(stash: &Stash) -> bool {
        matches!(stash.hints.line_suffix, Some('U') | Some('Y'))
    }

    // P6-era cache splits. The same family/model/stepping shipped as
    // Celeron, Pentium II and Xeon, distinguishable only by L2.

    /// Covington: the L2-less Celeron.
    pub fn no_l2(stash: &Stash) -> bool {
        stash.cache.no_l2
    }

    /// Deschutes-class 512K 4-way L2.
    pub fn l2_512k(stash: &Stash) -> bool {
        stash.cache.l2_512k()
    }

    /// Xeon-class 1M or 2M L2.
    pub fn l2_xeon_size(stash: &Stash) -> bool {
        stash.cache.l2_1m_or_2m() || stash.cache.l2_2m
    }

    /// Mendocino/Coppermine-128-class 256K or smaller on-die L2.
    pub fn l2_256k(stash: &Stash) -> bool {
        stash.cache.l2_256k()
    }
}

/// AMD predicates. Brand lines are substring-derived; the K6 era also
/// splits on the on-die L2 size reported by leaf 0x8000_0006.
pub mod amd {
    use super::*;

    pub fn mobile(stash: &Stash) -> bool {
        stash.hints.mobile
    }

    pub fn athlon(stash: &Stash) -> bool {
        stash.hints.athlon
    }

    pub fn athlon_mp(stash: &Stash) -> bool {
        stash.hints.athlon_mp
    }

    pub fn duron(stash: &Stash) -> bool {
        stash.hints.duron
    }

    pub fn sempron(stash: &Stash) -> bool {
        stash.hints.sempron
    }

    pub fn opteron(stash: &Stash) -> bool {
        stash.hints.opteron
    }

    pub fn phenom(stash: &Stash) -> bool {
        stash.hints.phenom
    }

    pub fn turion(stash: &Stash) -> bool {
        stash.hints.turion
    }

    pub fn ryzen(stash: &Stash) -> bool {
        stash.hints.ryzen
    }

    pub fn epyc(stash: &Stash) -> bool {
        stash.hints.epyc
    }

    pub fn threadripper(stash: &Stash) -> bool {
        stash.hints.threadripper
    }

    pub fn embedded(stash: &Stash) -> bool {
        stash.hints.embedded
    }

    /// K6-III carried 256K on-die L2; the K6-2 it shares a signature
    /// range with reports none.
    pub fn k6_on_die_l2(stash: &Stash) -> bool {
        stash.cache.l2_size_kb >= 256
    }

    /// Barton's 512K L2 against Thorton's 256K, same signature.
    pub fn l2_512k(stash: &Stash) -> bool {
        stash.cache.l2_size_kb >= 512
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_core::{leaf, Registers};

    #[test]
    fn predicates_default_false_on_empty_stash() {
        let stash = Stash::new();
        assert!(!intel::xeon(&stash));
        assert!(!intel::mobile(&stash));
        assert!(!intel::no_l2(&stash));
        assert!(!amd::opteron(&stash));
        assert!(!amd::k6_on_die_l2(&stash));
    }

    #[test]
    fn brand_index_identifies_xeon() {
        let mut stash = Stash::new();
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0f24, 0x0000_010b, 0, 0));
        assert!(intel::xeon(&stash));
        assert!(!intel::xeon_mp(&stash));
    }

    #[test]
    fn signature_0f13_inverts_brand_footnotes() {
        // Brand 0x0b means Xeon MP on this exact word; brand 0x0e means
        // Xeon instead of Mobile Pentium 4.
        let mut mp = Stash::new();
        mp.absorb(leaf::FEATURES, 0, &Registers::new(0x0f13, 0x0000_000b, 0, 0));
        assert!(intel::xeon_mp(&mp));

        let mut xeon = Stash::new();
        xeon.absorb(leaf::FEATURES, 0, &Registers::new(0x0f13, 0x0000_000e, 0, 0));
        assert!(intel::xeon(&xeon));
        assert!(!intel::mobile_p4(&xeon));
    }

    #[test]
    fn signature_06b1_inverts_brand_03() {
        // Brand 0x03 is a Pentium III Xeon everywhere except the exact
        // word 0x06b1, where it marks the Tualatin Celeron.
        let mut tualatin = Stash::new();
        tualatin.absorb(leaf::FEATURES, 0, &Registers::new(0x06b1, 0x0000_0003, 0, 0));
        assert!(intel::celeron(&tualatin));
        assert!(!intel::xeon(&tualatin));

        let mut coppermine = Stash::new();
        coppermine.absorb(leaf::FEATURES, 0, &Registers::new(0x0683, 0x0000_0003, 0, 0));
        assert!(intel::xeon(&coppermine));
        assert!(!intel::celeron(&coppermine));
    }

    #[test]
    fn cache_split_for_k6() {
        let mut stash = Stash::new();
        stash.absorb(
            leaf::EXTENDED_CACHE,
            0,
            &Registers::new(0, 0, 0x0100_4220, 0),
        );
        assert!(amd::k6_on_die_l2(&stash));
        assert!(!amd::l2_512k(&stash));
    }

    #[test]
    fn hint_driven_lines() {
        let mut stash = Stash::new();
        stash.hints.opteron = true;
        stash.hints.mobile = true;
        assert!(amd::opteron(&stash));
        assert!(amd::mobile(&stash));
        assert!(!amd::ryzen(&stash));
    }
}
