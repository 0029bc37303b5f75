//! The snapshot text format.
//!
//! One register quad per line:
//!
//! ```text
//!    0x00000001 0x00: eax=0x000306a9 ebx=0x02100800 ecx=0x7fbae3ff edx=0xbfebfbff
//! ```
//!
//! Multi-CPU dumps separate sections with `CPU <n>:` headers; a dump
//! with no header is a single-CPU dump. Blank lines and leading
//! whitespace are tolerated; anything else is an error naming the line.

use std::fmt::Write as _;

use silica_core::Registers;

use crate::error::SnapshotError;
use crate::{CpuSnapshot, Record, Snapshot};

pub fn parse(text: &str) -> Result<Snapshot, SnapshotError> {
    let mut cpus: Vec<CpuSnapshot> = Vec::new();
    let mut current: Option<CpuSnapshot> = None;

    for (nr, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("CPU") {
            let index = rest
                .trim()
                .strip_suffix(':')
                .and_then(|n| n.trim().parse::<u32>().ok())
                .ok_or_else(|| SnapshotError::MalformedHeader {
                    line: nr + 1,
                    text: line.to_string(),
                })?;
            if let Some(done) = current.take() {
                cpus.push(done);
            }
            current = Some(CpuSnapshot::new(index));
            continue;
        }
        let record = parse_record(line).ok_or_else(|| SnapshotError::MalformedRecord {
            line: nr + 1,
            text: line.to_string(),
        })?;
        current.get_or_insert_with(|| CpuSnapshot::new(0)).records.push(record);
    }

    if let Some(done) = current.take() {
        cpus.push(done);
    }
    if cpus.iter().all(|cpu| cpu.records.is_empty()) {
        return Err(SnapshotError::Empty);
    }
    Ok(Snapshot { cpus })
}

fn parse_record(line: &str) -> Option<Record> {
    let mut parts = line.split_whitespace();
    let leaf = hex_word(parts.next()?)?;
    let subleaf = hex_word(parts.next()?.strip_suffix(':')?)?;
    let eax = reg_word(parts.next()?, "eax")?;
    let ebx = reg_word(parts.next()?, "ebx")?;
    let ecx = reg_word(parts.next()?, "ecx")?;
    let edx = reg_word(parts.next()?, "edx")?;
    if parts.next().is_some() {
        return None;
    }
    Some(Record {
        leaf,
        subleaf,
        regs: Registers::new(eax, ebx, ecx, edx),
    })
}

fn hex_word(token: &str) -> Option<u32> {
    u32::from_str_radix(token.strip_prefix("0x")?, 16).ok()
}

fn reg_word(token: &str, name: &str) -> Option<u32> {
    hex_word(token.strip_prefix(name)?.strip_prefix('=')?)
}

pub fn serialize(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let headers = snapshot.cpus.len() > 1;
    for cpu in &snapshot.cpus {
        if headers {
            let _ = writeln!(out, "CPU {}:", cpu.index);
        }
        for r in &cpu.records {
            let _ = writeln!(
                out,
                "   {:#010x} {:#04x}: eax={:#010x} ebx={:#010x} ecx={:#010x} edx={:#010x}",
                r.leaf, r.subleaf, r.regs.eax, r.regs.ebx, r.regs.ecx, r.regs.edx
            );
        }
    }
    out
}
