//! Per-CPU report assembly and rendering.

use std::fmt::Write as _;

use serde::Serialize;

use silica_core::{MpSummary, Signature, Stash};
use silica_synth::uarch::Arch;

/// Everything the tool reports about one CPU, in both output modes.
#[derive(Debug, Serialize)]
pub struct Report {
    pub cpu: u32,
    pub vendor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub model: Option<String>,
    pub signature: SignatureReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<Arch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_cache_kb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l3_cache_kb: Option<u32>,
    pub topology: MpSummary,
}

/// The raw signature word and its synthesized fields.
#[derive(Debug, Serialize)]
pub struct SignatureReport {
    pub raw: u32,
    pub family: u32,
    pub model: u32,
    pub stepping: u8,
    pub extended_family: u8,
    pub extended_model: u8,
}

impl Report {
    pub fn from_stash(cpu: u32, stash: &Stash) -> Report {
        let synthesis = silica_synth::synthesize(stash);
        let sig = stash.signature();
        let brand = stash.effective_brand();
        Report {
            cpu,
            vendor: synthesis.vendor,
            brand: (!brand.is_empty()).then_some(brand),
            model: synthesis.model,
            signature: SignatureReport {
                raw: Signature::select_word(stash.val_1_eax, stash.val_80000001_eax),
                family: sig.family(),
                model: sig.model(),
                stepping: sig.stepping,
                extended_family: sig.extended_family,
                extended_model: sig.extended_model,
            },
            arch: synthesis.arch,
            hypervisor: stash.hypervisor.name(),
            l2_cache_kb: nonzero(stash.cache.l2_size_kb),
            l3_cache_kb: nonzero(stash.cache.l3_size_kb),
            topology: stash.mp,
        }
    }

    pub fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "CPU {}:", self.cpu);
        let _ = writeln!(out, "   vendor      = {}", self.vendor.unwrap_or("unknown"));
        if let Some(brand) = &self.brand {
            let _ = writeln!(out, "   brand       = \"{brand}\"");
        }
        if let Some(model) = &self.model {
            let _ = writeln!(out, "   model       = {model}");
        }
        let sig = &self.signature;
        let _ = writeln!(
            out,
            "   signature   = {:#010x} (family 0x{:x}, model 0x{:x}, stepping 0x{:x})",
            sig.raw, sig.family, sig.model, sig.stepping
        );
        if let Some(hypervisor) = self.hypervisor {
            let _ = writeln!(out, "   hypervisor  = {hypervisor}");
        }
        if let Some(kb) = self.l2_cache_kb {
            let _ = writeln!(out, "   L2 cache    = {kb} KB");
        }
        if let Some(kb) = self.l3_cache_kb {
            let _ = writeln!(out, "   L3 cache    = {kb} KB");
        }
        if let Some(method) = self.topology.method {
            let _ = write!(out, "   topology    = ");
            match (self.topology.cores, self.topology.threads) {
                (0, 0) => {}
                (0, threads) => {
                    let _ = write!(out, "{threads} threads, ");
                }
                (cores, threads) => {
                    let _ = write!(out, "{cores} cores, {threads} threads, ");
                }
            }
            let _ = writeln!(out, "{method}");
        }
        if let Some(widths) = &self.topology.widths {
            let _ = write!(out, "   apic widths = smt {}, core {}", widths.smt, widths.core);
            if let Some(cu) = widths.compute_unit {
                let _ = write!(out, ", compute unit {cu}");
            }
            let _ = writeln!(out, ", package offset {}", widths.package);
        }
        out
    }
}

fn nonzero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}
