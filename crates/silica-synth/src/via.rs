//! VIA / Centaur model table.
//!
//! Covers the IDT WinChip line Centaur brought along, the C3/C7 era,
//! and the Nano. Later Centaur-derived silicon carries the Zhaoxin
//! vendor string and lives in its own table.

use crate::engine::{f, fallback, fm, fms, lfm, Rule};

pub const MODELS: &[Rule<&'static str>] = &[
    // IDT WinChip.
    lfm(5, 0x4, "WinChip C6"),
    lfm(5, 0x8, "WinChip 2 (W2)"),
    lfm(5, 0x9, "WinChip 3 (W3)"),
    // C3 line.
    fm(6, 0x06, "C3 (Samuel)"),
    // Samuel 2 and Ezra share model 7; stepping 8 and up is Ezra.
    fms(6, 0x07, 0x0, "C3 (Samuel 2)"),
    fms(6, 0x07, 0x1, "C3 (Samuel 2)"),
    fms(6, 0x07, 0x2, "C3 (Samuel 2)"),
    fm(6, 0x07, "C3 (Ezra)"),
    fm(6, 0x08, "C3 (Ezra-T)"),
    fm(6, 0x09, "C3 (Nehemiah)"),
    fm(6, 0x0a, "C7 (Esther)"),
    fm(6, 0x0d, "C7-M (Esther)"),
    fm(6, 0x0f, "Nano (Isaiah)"),
    f(6, "C3/C7 (unknown model)"),
    fm(7, 0x0b, "Nano QuadCore (Isaiah)"),
    f(7, "Nano (unknown model)"),
    fallback("unknown"),
];
