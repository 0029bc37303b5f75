//! Core/thread topology resolution.
//!
//! Each vendor exposes several generations of enumeration leaves; the
//! resolver picks the most precise one the stash actually carries and
//! never blends counts from two methods. The result names the method
//! used so a reader can tell an enumerated count from a legacy guess.

use silica_core::bits::{bit, field, width_of};
use silica_core::{ApicWidths, MpSummary, Registers, Stash};

/// Compute the multiprocessing summary for one CPU. Counts of zero mean
/// the method could not determine the value.
pub fn resolve(stash: &Stash) -> MpSummary {
    if stash.vendor.is_amd_lineage() {
        resolve_amd(stash)
    } else if stash.vendor == silica_core::Vendor::Intel {
        resolve_intel(stash)
    } else {
        resolve_htt_only(stash)
    }
}

fn resolve_intel(stash: &Stash) -> MpSummary {
    if let Some(mp) = from_level_walk(&stash.leaf_1f, "leaf 0x1F") {
        return mp;
    }
    if let Some(mp) = from_level_walk(&stash.leaf_b, "leaf 0xB") {
        return mp;
    }
    if stash.htt() && stash.val_4_eax != 0 {
        let cores = field(stash.val_4_eax, 26, 31) + 1;
        let threads = stash.logical_count();
        let smt = width_of(threads / cores);
        let core = width_of(cores);
        return MpSummary {
            method: Some("leaf 4 with leaf 1"),
            cores,
            threads,
            widths: Some(ApicWidths {
                smt,
                core,
                compute_unit: None,
                package: smt + core,
            }),
        };
    }
    resolve_htt_only(stash)
}

/// Derive counts and widths from a leaf 0xB/0x1F subleaf walk. The last
/// recorded level scopes the whole package: its EBX is the thread count
/// and its EAX shift is the bit offset where the package ID begins.
fn from_level_walk(levels: &[Registers], method: &'static str) -> Option<MpSummary> {
    let last = levels.last()?;
    let threads = field(last.ebx, 0, 15);
    if threads == 0 {
        return None;
    }
    let (smt_count, smt_shift) = levels
        .iter()
        .find(|level| field(level.ecx, 8, 15) == 1)
        .map(|level| (field(level.ebx, 0, 15).max(1), field(level.eax, 0, 4)))
        .unwrap_or((1, 0));
    let package_shift = field(last.eax, 0, 4);
    Some(MpSummary {
        method: Some(method),
        cores: threads / smt_count,
        threads,
        widths: Some(ApicWidths {
            smt: smt_shift,
            core: package_shift.saturating_sub(smt_shift),
            compute_unit: None,
            package: package_shift,
        }),
    })
}

fn resolve_amd(stash: &Stash) -> MpSummary {
    if !stash.htt() {
        return single_threaded();
    }
    let threads = stash.logical_count();
    // Fn8000_0008 ECX[7:0] counts physical units minus one; on Zen the
    // units are threads, on older parts they are cores.
    let units = if stash.val_80000008_ecx != 0 {
        field(stash.val_80000008_ecx, 0, 7) + 1
    } else {
        threads
    };
    let coreid_size = field(stash.val_80000008_ecx, 12, 15);

    if stash.val_8000001e_ebx != 0 {
        let per_unit = field(stash.val_8000001e_ebx, 8, 15) + 1;
        let cores = if threads >= per_unit { threads / per_unit } else { units };
        // Family 15h shares an FPU between the siblings of a compute
        // unit; everything later is plain SMT.
        let compute_units = stash.signature().family() == 0x15;
        let smt = if compute_units { 0 } else { width_of(per_unit) };
        let compute_unit = compute_units.then(|| width_of(per_unit));
        let package = if coreid_size != 0 {
            coreid_size
        } else {
            smt + compute_unit.unwrap_or(0) + width_of(cores)
        };
        return MpSummary {
            method: Some("leaf 0x8000001E"),
            cores,
            threads,
            widths: Some(ApicWidths {
                smt,
                core: package.saturating_sub(smt + compute_unit.unwrap_or(0)),
                compute_unit,
                package,
            }),
        };
    }

    let cmp_legacy = bit(stash.val_80000001_ecx, 1);
    if cmp_legacy {
        // HTT plus CmpLegacy means the logical processors are full
        // cores, not hyper-threads.
        let package = if coreid_size != 0 { coreid_size } else { width_of(units) };
        return MpSummary {
            method: Some("CmpLegacy multi-core"),
            cores: units,
            threads: units,
            widths: Some(ApicWidths {
                smt: 0,
                core: package,
                compute_unit: None,
                package,
            }),
        };
    }

    if stash.val_80000008_ecx != 0 {
        let smt = width_of(threads / units);
        let package = if coreid_size != 0 { coreid_size } else { smt + width_of(units) };
        return MpSummary {
            method: Some("leaf 0x80000008 with leaf 1"),
            cores: units,
            threads,
            widths: Some(ApicWidths {
                smt,
                core: package.saturating_sub(smt),
                compute_unit: None,
                package,
            }),
        };
    }

    resolve_htt_only(stash)
}

fn resolve_htt_only(stash: &Stash) -> MpSummary {
    if !stash.htt() {
        return single_threaded();
    }
    // The HTT bit alone says "more than one logical processor" without
    // distinguishing cores from threads.
    MpSummary {
        method: Some("leaf 1 hyper-threading"),
        cores: 0,
        threads: stash.logical_count(),
        widths: None,
    }
}

fn single_threaded() -> MpSummary {
    MpSummary {
        method: Some("no multi-threading"),
        cores: 1,
        threads: 1,
        widths: None,
    }
}
