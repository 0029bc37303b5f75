//! Reading the CPUID leaves of the CPU we are running on.

use crate::error::SnapshotError;
use crate::CpuSnapshot;

/// Walk every leaf range the decoder consumes on the current CPU.
/// Which CPU answers depends on where the scheduler placed us; affinity
/// pinning is the caller's concern.
#[cfg(target_arch = "x86_64")]
pub fn read_host() -> Result<CpuSnapshot, SnapshotError> {
    use silica_core::bits::{bit, field};
    use silica_core::{leaf, Registers};

    fn query(leaf_nr: u32, subleaf: u32) -> Registers {
        // Safe on every x86_64 CPU; the instruction predates the ISA.
        let r = unsafe { core::arch::x86_64::__cpuid_count(leaf_nr, subleaf) };
        Registers::new(r.eax, r.ebx, r.ecx, r.edx)
    }

    let mut cpu = CpuSnapshot::new(0);
    let mut record = |leaf_nr: u32, subleaf: u32, regs: Registers| {
        cpu.push(leaf_nr, subleaf, regs);
    };

    let leaf0 = query(leaf::VENDOR, 0);
    record(leaf::VENDOR, 0, leaf0);
    let max_basic = leaf0.eax.min(0xff);

    for leaf_nr in 1..=max_basic {
        match leaf_nr {
            leaf::CACHE_DESCRIPTORS => {
                // EAX[7:0] is a repeat count: parts with more
                // descriptors than fit one quad return the rest on
                // subsequent queries.
                let first = query(leaf_nr, 0);
                record(leaf_nr, 0, first);
                for _ in 1..field(first.eax, 0, 7).max(1) {
                    record(leaf_nr, 0, query(leaf_nr, 0));
                }
            }
            leaf::CACHE_PARAMS => {
                // Cache type 0 terminates the walk.
                for subleaf in 0..64 {
                    let regs = query(leaf_nr, subleaf);
                    if field(regs.eax, 0, 4) == 0 {
                        break;
                    }
                    record(leaf_nr, subleaf, regs);
                }
            }
            leaf::TOPOLOGY | leaf::TOPOLOGY_V2 => {
                // Level type 0 terminates the walk.
                for subleaf in 0..16 {
                    let regs = query(leaf_nr, subleaf);
                    if field(regs.ecx, 8, 15) == 0 {
                        break;
                    }
                    record(leaf_nr, subleaf, regs);
                }
            }
            _ => {
                let regs = query(leaf_nr, 0);
                if !regs.is_zero() {
                    record(leaf_nr, 0, regs);
                }
            }
        }
    }

    // Xeon Phi range; absent CPUs echo some basic leaf here, so accept
    // it only when the reported maximum sits inside the range.
    let phi0 = query(0x2000_0000, 0);
    if (0x2000_0000..0x2000_0100).contains(&phi0.eax) {
        record(0x2000_0000, 0, phi0);
        for leaf_nr in 0x2000_0001..=phi0.eax {
            record(leaf_nr, 0, query(leaf_nr, 0));
        }
    }

    // Hypervisor range, gated on the leaf 1 ECX bit.
    let leaf1 = query(leaf::FEATURES, 0);
    if bit(leaf1.ecx, 31) {
        let hv0 = query(leaf::HYPERVISOR, 0);
        let max_hv = hv0.eax.clamp(leaf::HYPERVISOR, leaf::HYPERVISOR + 0xff);
        for leaf_nr in leaf::HYPERVISOR..=max_hv {
            record(leaf_nr, 0, query(leaf_nr, 0));
        }
    }

    let ext0 = query(leaf::EXTENDED, 0);
    if ext0.eax > leaf::EXTENDED {
        let max_ext = ext0.eax.min(leaf::EXTENDED + 0xff);
        record(leaf::EXTENDED, 0, ext0);
        for leaf_nr in leaf::EXTENDED + 1..=max_ext {
            if leaf_nr == leaf::AMD_CACHE_PARAMS {
                for subleaf in 0..64 {
                    let regs = query(leaf_nr, subleaf);
                    if field(regs.eax, 0, 4) == 0 {
                        break;
                    }
                    record(leaf_nr, subleaf, regs);
                }
            } else {
                let regs = query(leaf_nr, 0);
                if !regs.is_zero() {
                    record(leaf_nr, 0, regs);
                }
            }
        }
    }

    Ok(cpu)
}

#[cfg(not(target_arch = "x86_64"))]
pub fn read_host() -> Result<CpuSnapshot, SnapshotError> {
    Err(SnapshotError::UnsupportedHost)
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;
    use silica_core::leaf;

    #[test]
    fn host_walk_starts_at_leaf_zero() {
        let cpu = read_host().unwrap();
        let first = &cpu.records[0];
        assert_eq!((first.leaf, first.subleaf), (leaf::VENDOR, 0));
        assert!(first.regs.eax >= 1);
    }

    #[test]
    fn cache_descriptor_leaf_queried_per_repeat_count() {
        let cpu = read_host().unwrap();
        let descriptor_records: Vec<_> = cpu
            .records
            .iter()
            .filter(|r| r.leaf == leaf::CACHE_DESCRIPTORS)
            .collect();
        if let Some(first) = descriptor_records.first() {
            let repeats = (first.regs.eax & 0xff).max(1);
            assert_eq!(descriptor_records.len() as u32, repeats);
        }
    }

    #[test]
    fn host_stash_has_a_vendor_signature() {
        let stash = read_host().unwrap().stash();
        assert!(!stash.signature().is_empty());
    }
}
