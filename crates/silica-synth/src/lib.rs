//! The decoding engine: raw signature plus stash in, vendor-qualified
//! model text out.
//!
//! Matching is total by construction (every model table ends in a
//! catch-all) and pure (no I/O, no state beyond the stash), so new
//! silicon degrades to family-level text or "unknown", never to an
//! error. The pipeline per CPU: [`brand::analyze`] fills the hint
//! record, then [`synthesize`] runs the vendor model table, annotates
//! from the microarchitecture table, and appends the AMD/Hygon decoded
//! model number where one exists.

pub mod amd;
pub mod amd_model;
pub mod brand;
pub mod cyrix;
pub mod engine;
pub mod hygon;
pub mod intel;
pub mod minor;
pub mod query;
pub mod transmeta;
pub mod uarch;
pub mod via;
pub mod zhaoxin;

use serde::Serialize;

use silica_core::{Stash, Vendor};

use engine::{first_match, Rule};
use uarch::Arch;

/// The decoded identity of one CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Synthesis {
    /// Vendor display name; `None` for unrecognized vendor strings.
    pub vendor: Option<&'static str>,
    /// Synthesized model text with any microarchitecture annotation.
    /// `None` only for unknown vendors; "unknown" is a valid terminal
    /// result for known vendors.
    pub model: Option<String>,
    /// The microarchitecture record, when a table row matched.
    pub arch: Option<Arch>,
}

fn model_table(vendor: Vendor) -> Option<&'static [Rule<&'static str>]> {
    Some(match vendor {
        Vendor::Intel => intel::MODELS,
        Vendor::Amd => amd::MODELS,
        Vendor::Cyrix => cyrix::MODELS,
        Vendor::Via => via::MODELS,
        Vendor::Transmeta => transmeta::MODELS,
        Vendor::Zhaoxin => zhaoxin::MODELS,
        Vendor::Hygon => hygon::MODELS,
        Vendor::Umc => minor::UMC,
        Vendor::NexGen => minor::NEXGEN,
        Vendor::Rise => minor::RISE,
        Vendor::Sis => minor::SIS,
        Vendor::Nsc => minor::NSC,
        Vendor::Vortex => minor::VORTEX,
        Vendor::Unknown => return None,
    })
}

/// Resolve the stash to vendor, model text and microarchitecture.
/// Expects the brand analyzer to have run already.
pub fn synthesize(stash: &Stash) -> Synthesis {
    let vendor = stash.vendor.name();
    let Some(table) = model_table(stash.vendor) else {
        return Synthesis { vendor, model: None, arch: None };
    };

    let sig = stash.signature();
    let mut model = first_match(table, &sig, stash)
        .copied()
        .unwrap_or("unknown")
        .to_string();

    // AMD/Hygon: a matched line like "Opteron (SledgeHammer)" only
    // knows the tier; the packed-field decoder supplies the marketing
    // number when the tables cover the part.
    if stash.vendor.is_amd_lineage() {
        if let Some(decoded) = amd_model::decode(stash) {
            let number = decoded.model_number();
            if !model.contains(number) {
                model.push(' ');
                model.push_str(number);
            }
        }
    }

    let arch = uarch::lookup(stash);
    if let Some(arch) = &arch {
        if let Some(annotation) = annotate(&model, arch) {
            model.push(' ');
            model.push_str(&annotation);
        }
    }

    Synthesis { vendor, model: Some(model), arch }
}

/// Build the "[uarch] {family}, node" annotation, skipping parts the
/// model text already states.
fn annotate(model: &str, arch: &Arch) -> Option<String> {
    let mut out = String::new();
    if let Some(uarch) = arch.uarch {
        if !model.contains(uarch) && !arch.core_is_uarch {
            out.push('[');
            out.push_str(uarch);
            out.push(']');
        }
    }
    if let Some(family) = arch.family {
        if !model.contains(family) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push('{');
            out.push_str(family);
            out.push('}');
        }
    }
    if let Some(node) = arch.node {
        if !out.is_empty() {
            out.push_str(", ");
            out.push_str(node);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_core::{leaf, Registers};

    fn absorb_brand(stash: &mut Stash, text: &str) {
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
    }

    #[test]
    fn unknown_vendor_yields_absent_results() {
        let mut stash = Stash::new();
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0003_06a9, 0, 0, 0));
        let synth = synthesize(&stash);
        assert_eq!(synth.vendor, None);
        assert_eq!(synth.model, None);
        assert_eq!(synth.arch, None);
    }

    #[test]
    fn ivy_bridge_desktop_with_annotation() {
        let mut stash = Stash::new();
        stash.vendor = Vendor::Intel;
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0003_06a9, 0, 0, 0));
        let synth = synthesize(&stash);
        assert_eq!(synth.vendor, Some("Intel"));
        // The uarch name is already in the model text, so no bracket
        // and therefore no node either.
        assert_eq!(synth.model.as_deref(), Some("Core i3/i5/i7-3000 (Ivy Bridge)"));
        assert_eq!(synth.arch.unwrap().node, Some("22 nm"));
    }

    #[test]
    fn xeon_variant_of_same_signature() {
        let mut stash = Stash::new();
        stash.vendor = Vendor::Intel;
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0003_06a9, 0, 0, 0));
        absorb_brand(&mut stash, "Intel(R) Xeon(R) CPU E3-1230 V2 @ 3.30GHz");
        brand::analyze(&mut stash);
        let synth = synthesize(&stash);
        assert_eq!(synth.model.as_deref(), Some("Xeon E3-1200 v2 (Ivy Bridge)"));
    }

    #[test]
    fn amd_number_appended_to_generic_text() {
        // K8 Opteron, pre-NPT 12-bit BrandId: bti=0x10, NN=4 -> 246.
        let mut stash = Stash::new();
        stash.vendor = Vendor::Amd;
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x0002_0f55, 0, 0, 0));
        stash.absorb(
            leaf::EXTENDED_FEATURES,
            0,
            &Registers::new(0x0002_0f55, (0x10 << 6) | 4, 0, 0),
        );
        let synth = synthesize(&stash);
        let model = synth.model.unwrap();
        assert!(model.starts_with("Opteron (Troy) 246"), "{model}");
    }

    #[test]
    fn zen3_annotation_skips_redundant_core_name() {
        let mut stash = Stash::new();
        stash.vendor = Vendor::Amd;
        stash.absorb(leaf::FEATURES, 0, &Registers::new(0x00a2_0f10, 0, 0, 0));
        absorb_brand(&mut stash, "AMD Ryzen 9 5950X 16-Core Processor");
        brand::analyze(&mut stash);
        let synth = synthesize(&stash);
        // core_is_uarch suppresses the bracket; no family label, so no
        // annotation at all.
        assert_eq!(synth.model.as_deref(), Some("Ryzen 5000 (Vermeer)"));
    }

    #[test]
    fn known_vendor_never_yields_none_model() {
        for vendor in [
            Vendor::Intel,
            Vendor::Amd,
            Vendor::Cyrix,
            Vendor::Via,
            Vendor::Transmeta,
            Vendor::Umc,
            Vendor::NexGen,
            Vendor::Rise,
            Vendor::Sis,
            Vendor::Nsc,
            Vendor::Vortex,
            Vendor::Zhaoxin,
            Vendor::Hygon,
        ] {
            let mut stash = Stash::new();
            stash.vendor = vendor;
            stash.absorb(leaf::FEATURES, 0, &Registers::new(0xffff_ffff, 0, 0, 0));
            assert!(synthesize(&stash).model.is_some(), "{vendor:?}");
        }
    }
}
