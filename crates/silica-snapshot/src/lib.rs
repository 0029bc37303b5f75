//! CPUID snapshot acquisition.
//!
//! A [`Snapshot`] is the raw material every decoding stage works from:
//! the recorded register quads of one or more CPUs, either replayed
//! from a text dump or read off the host. [`CpuSnapshot::stash`] runs
//! the full per-CPU pipeline (leaf absorption, brand analysis, topology
//! resolution) and hands back a finished [`Stash`].

pub mod error;
pub mod format;
pub mod host;

use std::path::Path;

use silica_core::{Registers, Stash};

pub use error::SnapshotError;

/// One recorded CPUID invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub leaf: u32,
    pub subleaf: u32,
    pub regs: Registers,
}

/// Every record captured from one CPU, in capture order.
#[derive(Debug, Clone, Default)]
pub struct CpuSnapshot {
    pub index: u32,
    pub records: Vec<Record>,
}

impl CpuSnapshot {
    pub fn new(index: u32) -> Self {
        CpuSnapshot { index, records: Vec::new() }
    }

    pub fn push(&mut self, leaf: u32, subleaf: u32, regs: Registers) {
        self.records.push(Record { leaf, subleaf, regs });
    }

    /// Run the decoding pipeline over this CPU's records.
    pub fn stash(&self) -> Stash {
        let mut stash = Stash::new();
        for record in &self.records {
            stash.absorb(record.leaf, record.subleaf, &record.regs);
        }
        silica_synth::brand::analyze(&mut stash);
        stash.mp = silica_topo::resolve(&stash);
        stash
    }
}

/// A parsed or captured dump covering one or more CPUs.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub cpus: Vec<CpuSnapshot>,
}

impl Snapshot {
    /// Parse a text dump.
    pub fn parse(text: &str) -> Result<Self, SnapshotError> {
        format::parse(text)
    }

    /// Read and parse a dump file.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        format::parse(&std::fs::read_to_string(path)?)
    }

    /// Capture the host CPU. Errors on non-x86_64 targets.
    pub fn from_host() -> Result<Self, SnapshotError> {
        Ok(Snapshot { cpus: vec![host::read_host()?] })
    }

    /// Render back to the text dump format.
    pub fn to_text(&self) -> String {
        format::serialize(self)
    }
}
