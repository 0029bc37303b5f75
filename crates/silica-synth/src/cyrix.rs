//! Cyrix model table.

use crate::engine::{fallback, lf, lfm, Rule};

pub const MODELS: &[Rule<&'static str>] = &[
    lfm(4, 0x4, "MediaGX"),
    lfm(4, 0x9, "5x86"),
    lfm(5, 0x2, "6x86 (M1)"),
    lfm(5, 0x4, "MediaGX MMX (GXm)"),
    lfm(6, 0x0, "6x86MX (M2)"),
    lfm(6, 0x5, "VIA Cyrix III (Joshua)"),
    lf(5, "6x86 (unknown model)"),
    fallback("unknown"),
];
