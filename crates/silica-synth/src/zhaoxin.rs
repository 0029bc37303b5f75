//! Zhaoxin model table. Centaur-derived cores under the Shanghai
//! vendor string.

use crate::engine::{f, fallback, fm, Rule};

pub const MODELS: &[Rule<&'static str>] = &[
    fm(6, 0x0f, "KaiXian ZX-C (Zhangjiang)"),
    fm(6, 0x19, "KaiXian KX-5000 (WuDaoKou)"),
    fm(7, 0x1b, "KaiXian KX-5000 / KaisHeng KH-20000 (WuDaoKou)"),
    fm(7, 0x3b, "KaiXian KX-6000 / KaisHeng KH-30000 (LuJiaZui)"),
    fm(7, 0x5b, "KaiXian KX-7000 (Shijidadao)"),
    f(7, "KaiXian (unknown model)"),
    fallback("unknown"),
];
