//! silica — decode x86 CPUID values into named silicon.

mod report;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use report::Report;
use silica_snapshot::Snapshot;

#[derive(Parser)]
#[command(name = "silica", version, about = "Identify x86 CPUs from their CPUID values")]
struct Cli {
    /// Replay a snapshot file instead of reading the host CPU
    #[arg(long, value_name = "DUMP")]
    file: Option<PathBuf>,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let snapshot = match &cli.file {
        Some(path) => {
            Snapshot::from_path(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => Snapshot::from_host().context("reading the host CPU")?,
    };

    let reports: Vec<Report> = snapshot
        .cpus
        .iter()
        .map(|cpu| Report::from_stash(cpu.index, &cpu.stash()))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", report.render_human());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
CPU 0:
   0x00000000 0x00: eax=0x0000000d ebx=0x756e6547 ecx=0x6c65746e edx=0x49656e69
   0x00000001 0x00: eax=0x000306a9 ebx=0x00000800 ecx=0x7fbae3ff edx=0xafebfbff
CPU 1:
   0x00000000 0x00: eax=0x0000000d ebx=0x756e6547 ecx=0x6c65746e edx=0x49656e69
   0x00000001 0x00: eax=0x000306a9 ebx=0x00000800 ecx=0x7fbae3ff edx=0xafebfbff
";

    fn reports_from(text: &str) -> Vec<Report> {
        let snapshot = Snapshot::parse(text).unwrap();
        snapshot
            .cpus
            .iter()
            .map(|cpu| Report::from_stash(cpu.index, &cpu.stash()))
            .collect()
    }

    #[test]
    fn dump_replay_reports_every_cpu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        std::fs::write(&path, DUMP).unwrap();
        let snapshot = Snapshot::from_path(&path).unwrap();
        assert_eq!(snapshot.cpus.len(), 2);
        let report = Report::from_stash(1, &snapshot.cpus[1].stash());
        let text = report.render_human();
        assert!(text.starts_with("CPU 1:"), "{text}");
        assert!(text.contains("vendor      = Intel"), "{text}");
        assert!(text.contains("Ivy Bridge"), "{text}");
        assert!(text.contains("0x000306a9"), "{text}");
    }

    #[test]
    fn json_report_carries_signature_fields() {
        let reports = reports_from(DUMP);
        let value = serde_json::to_value(&reports).unwrap();
        assert_eq!(value[0]["vendor"], "Intel");
        assert_eq!(value[0]["signature"]["family"], 6);
        assert_eq!(value[0]["signature"]["model"], 0x3a);
        assert_eq!(value[0]["signature"]["stepping"], 9);
        // No brand leaves in the dump: the field is omitted, not null.
        assert!(value[0].get("brand").is_none());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = run(Cli {
            file: Some(PathBuf::from("/nonexistent/dump.txt")),
            json: false,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/dump.txt"));
    }
}
