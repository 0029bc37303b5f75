//! Brand string analysis: substring hints, core-count extraction, and
//! the AMD "model unknown" override path.
//!
//! Every scan is an independent containment test over a small fixed
//! pattern set, so multiple hints may hold at once. An empty or
//! garbled brand string sets nothing and is not an error.

use silica_core::Stash;

use crate::amd_model;

/// Marker AMD firmware leaves in the brand string when it has no name
/// table entry for the part.
const MODEL_UNKNOWN: &str = "model unknown";

/// Populate the stash's brand hints from its brand string. For
/// AMD/Hygon parts whose OEM string says "model unknown", a replacement
/// brand is synthesized from packed CPUID fields first and the scans
/// run against that instead.
pub fn analyze(stash: &mut Stash) {
    if stash.vendor.is_amd_lineage() && stash.brand.text().contains(MODEL_UNKNOWN) {
        if let Some(decoded) = amd_model::decode(stash) {
            stash.override_brand = Some(decoded.full());
        }
    }

    let text = stash.effective_brand();
    let hints = &mut stash.hints;

    hints.mobile = contains_any(&text, &["Mobile", "mobile"]);

    hints.celeron = text.contains("Celeron");
    hints.core_brand = text.contains("Core(TM)") || text.contains("Core(tm)");
    hints.pentium = text.contains("Pentium");
    hints.pentium_d = text.contains("Pentium(R) D") || text.contains("Pentium D");
    hints.xeon = text.contains("Xeon");
    hints.xeon_mp = text.contains("Xeon MP") || text.contains("Xeon(TM) MP");
    hints.atom = text.contains("Atom");
    hints.extreme = text.contains("Extreme");
    hints.scalable = contains_any(&text, &["Platinum", "Gold", "Silver", "Bronze"]);

    hints.athlon = text.contains("Athlon");
    hints.athlon_mp = text.contains("Athlon(tm) MP") || text.contains("Athlon MP");
    hints.duron = text.contains("Duron");
    hints.sempron = text.contains("Sempron");
    hints.opteron = text.contains("Opteron");
    hints.phenom = text.contains("Phenom");
    hints.turion = text.contains("Turion");
    hints.ryzen = text.contains("Ryzen");
    hints.epyc = text.contains("EPYC");
    hints.threadripper = text.contains("Threadripper");
    hints.embedded = text.contains("Embedded") || text.contains("EPYC 3");

    hints.cores = core_count_hint(&text);
    hints.line_suffix = line_suffix(&text);
}

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

/// An explicit core count stated in the brand text: either a spelled
/// multiplier ("Dual-Core") or a numeric "NN-Core" form. Zero when the
/// text states none.
fn core_count_hint(text: &str) -> u32 {
    const SPELLED: &[(&str, u32)] = &[
        ("Dual-Core", 2),
        ("Dual Core", 2),
        ("Triple-Core", 3),
        ("Quad-Core", 4),
        ("Quad Core", 4),
        ("Six-Core", 6),
        ("Eight-Core", 8),
        ("Twelve-Core", 12),
        ("Sixteen-Core", 16),
    ];
    for &(pattern, n) in SPELLED {
        if text.contains(pattern) {
            return n;
        }
    }
    // "NN-Core" / "NN-core": digits immediately before the hyphen.
    for (idx, _) in text.match_indices("-Core").chain(text.match_indices("-core")) {
        let digits: String = text[..idx]
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            let n: String = digits.chars().rev().collect();
            if let Ok(n) = n.parse() {
                return n;
            }
        }
    }
    0
}

/// The trailing SKU-tier letter of an Intel model token: "i7-8550U"
/// yields 'U'. The token must be digits-then-one-letter after a
/// hyphen, which keeps codenames and frequency text from matching.
fn line_suffix(text: &str) -> Option<char> {
    for token in text.split_whitespace() {
        let Some((_, tail)) = token.rsplit_once('-') else {
            continue;
        };
        if !tail.is_ascii() || tail.len() < 4 {
            continue;
        }
        let (body, last) = tail.split_at(tail.len() - 1);
        let last = last.chars().next().unwrap_or(' ');
        if last.is_ascii_uppercase() && body.chars().all(|c| c.is_ascii_digit()) {
            return Some(last);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_core::{leaf, Registers, Vendor};

    fn stash_with_brand(vendor: Vendor, text: &str) -> Stash {
        let mut stash = Stash::new();
        stash.vendor = vendor;
        let mut bytes = [0u8; 48];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        for (i, chunk) in bytes.chunks(16).enumerate() {
            let word = |j: usize| u32::from_le_bytes(chunk[j..j + 4].try_into().unwrap());
            stash.absorb(
                leaf::BRAND_0 + i as u32,
                0,
                &Registers::new(word(0), word(4), word(8), word(12)),
            );
        }
        stash
    }

    #[test]
    fn xeon_brand_sets_hints() {
        let mut stash = stash_with_brand(
            Vendor::Intel,
            "Intel(R) Xeon(R) Gold 6252 CPU @ 2.10GHz",
        );
        analyze(&mut stash);
        assert!(stash.hints.xeon);
        assert!(stash.hints.scalable);
        assert!(!stash.hints.mobile);
        assert_eq!(stash.hints.cores, 0);
    }

    #[test]
    fn mobile_and_celeron_coexist() {
        let mut stash = stash_with_brand(Vendor::Intel, "Mobile Intel(R) Celeron(R) CPU 2.00GHz");
        analyze(&mut stash);
        assert!(stash.hints.mobile);
        assert!(stash.hints.celeron);
    }

    #[test]
    fn numeric_core_hint() {
        let mut stash = stash_with_brand(
            Vendor::Amd,
            "AMD Ryzen 9 5950X 16-Core Processor",
        );
        analyze(&mut stash);
        assert!(stash.hints.ryzen);
        assert_eq!(stash.hints.cores, 16);
    }

    #[test]
    fn spelled_core_hint() {
        let mut stash = stash_with_brand(Vendor::Amd, "Dual-Core AMD Opteron(tm) Processor 2218");
        analyze(&mut stash);
        assert!(stash.hints.opteron);
        assert_eq!(stash.hints.cores, 2);
    }

    #[test]
    fn sku_letter_extraction() {
        let mut stash = stash_with_brand(
            Vendor::Intel,
            "Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz",
        );
        analyze(&mut stash);
        assert_eq!(stash.hints.line_suffix, Some('U'));
        // Frequency text ("1.80GHz") must not register as a suffix.
        assert!(stash.hints.core_brand);
    }

    #[test]
    fn empty_brand_sets_nothing() {
        let mut stash = Stash::new();
        stash.vendor = Vendor::Intel;
        analyze(&mut stash);
        assert_eq!(stash.hints, Default::default());
    }

    #[test]
    fn model_unknown_triggers_override() {
        // Family 0xF model 0x4, pre-NPT layout, 8-bit BrandId with
        // bti=4, NN=10: Athlon 64 3200+.
        let mut stash = stash_with_brand(Vendor::Amd, "AMD Processor model unknown");
        stash.absorb(
            leaf::FEATURES,
            0,
            &Registers::new(0x0000_0f48, 0x0000_008a, 0, 0),
        );
        analyze(&mut stash);
        let brand = stash.override_brand.as_deref().unwrap();
        assert_eq!(brand, "AMD Athlon(tm) 64 Processor 3200+");
        assert!(stash.hints.athlon);
    }
}
