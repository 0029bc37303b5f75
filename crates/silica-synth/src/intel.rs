//! Intel model table.
//!
//! Rows are ordered most-qualified first within each signature: a
//! stepping- or predicate-guarded row ahead of the bare family/model
//! row it falls back to. The P6 era splits identical signatures by
//! observed L2 cache; the NetBurst era splits by brand index; everything
//! from Nehalem on splits by brand substrings. Stepping rows name the
//! core revision from Intel's specification updates; a few revisions
//! that never appeared in one are named from sampled parts.

use crate::engine::{f, fallback, fm, fmq, fms, lfm, lfms, Rule};
use crate::query::intel as q;

pub const MODELS: &[Rule<&'static str>] = &[
    // 486. Legacy 4-bit matching; these predate extended encoding.
    lfm(4, 0x0, "i486DX-25/33"),
    lfm(4, 0x1, "i486DX-50"),
    lfm(4, 0x2, "i486SX"),
    lfm(4, 0x3, "i486DX2"),
    lfm(4, 0x4, "i486SL"),
    lfm(4, 0x5, "i486SX2"),
    lfm(4, 0x7, "i486DX2 WB"),
    lfm(4, 0x8, "i486DX4"),
    lfm(4, 0x9, "i486DX4 WB"),
    // P5.
    lfms(5, 0x0, 0x3, "Pentium 60/66 A-step"),
    lfm(5, 0x0, "Pentium 60/66"),
    lfms(5, 0x1, 0x3, "Pentium 60/66 (P5 B1)"),
    lfms(5, 0x1, 0x5, "Pentium 60/66 (P5 C1)"),
    lfms(5, 0x1, 0x7, "Pentium 60/66 (P5 D1)"),
    lfm(5, 0x1, "Pentium 60/66 (P5)"),
    lfms(5, 0x2, 0x1, "Pentium 75-200 (P54C B1)"),
    lfms(5, 0x2, 0x2, "Pentium 75-200 (P54C B3)"),
    lfms(5, 0x2, 0x4, "Pentium 75-200 (P54C B5)"),
    lfms(5, 0x2, 0x5, "Pentium 75-200 (P54C C2)"),
    lfms(5, 0x2, 0x6, "Pentium 75-200 (P54C E0)"),
    lfms(5, 0x2, 0xb, "Pentium 75-200 (P54CS cB1)"),
    lfms(5, 0x2, 0xc, "Pentium 75-200 (P54CS cC0)"),
    lfm(5, 0x2, "Pentium 75-200 (P54C)"),
    lfm(5, 0x3, "Pentium OverDrive (P24T)"),
    lfms(5, 0x4, 0x3, "Pentium MMX (P55C B1)"),
    lfms(5, 0x4, 0x4, "Pentium MMX (P55C B2)"),
    lfm(5, 0x4, "Pentium MMX (P55C)"),
    lfm(5, 0x7, "Pentium 75-200 (P54C)"),
    lfm(5, 0x8, "Mobile Pentium MMX (Tillamook)"),
    // P6 through Pentium M. Shared signatures split by cache geometry:
    // Covington shipped with no L2, Deschutes with 512K 4-way, the
    // Xeons with 1M or 2M, Dixon with 256K on die.
    fms(6, 0x01, 0x1, "Pentium Pro (sA0)"),
    fms(6, 0x01, 0x2, "Pentium Pro (sA1)"),
    fms(6, 0x01, 0x6, "Pentium Pro (sB1)"),
    fms(6, 0x01, 0x7, "Pentium Pro (sC0)"),
    fms(6, 0x01, 0x9, "Pentium Pro (sC1)"),
    fm(6, 0x01, "Pentium Pro"),
    fms(6, 0x03, 0x3, "Pentium II (Klamath C0)"),
    fms(6, 0x03, 0x4, "Pentium II (Klamath C1)"),
    fm(6, 0x03, "Pentium II (Klamath)"),
    fmq(6, 0x05, q::l2_xeon_size, "Pentium II Xeon (Deschutes)"),
    fmq(6, 0x05, q::no_l2, "Celeron (Covington)"),
    fmq(6, 0x05, q::mobile, "Mobile Pentium II (Deschutes)"),
    fms(6, 0x05, 0x0, "Pentium II (Deschutes dA0)"),
    fms(6, 0x05, 0x1, "Pentium II (Deschutes dA1)"),
    fms(6, 0x05, 0x2, "Pentium II (Deschutes dB0)"),
    fms(6, 0x05, 0x3, "Pentium II (Deschutes dB1)"),
    fm(6, 0x05, "Pentium II (Deschutes)"),
    fmq(6, 0x06, q::l2_256k, "Mobile Pentium II (Dixon)"),
    fmq(6, 0x06, q::mobile, "Mobile Celeron (Mendocino)"),
    fms(6, 0x06, 0x0, "Celeron (Mendocino mA0)"),
    fms(6, 0x06, 0x5, "Celeron (Mendocino mB0)"),
    fm(6, 0x06, "Celeron (Mendocino)"),
    fmq(6, 0x07, q::l2_xeon_size, "Pentium III Xeon (Tanner)"),
    fms(6, 0x07, 0x2, "Pentium III (Katmai kB0)"),
    fms(6, 0x07, 0x3, "Pentium III (Katmai kC0)"),
    fm(6, 0x07, "Pentium III (Katmai)"),
    fmq(6, 0x08, q::celeron, "Celeron (Coppermine-128)"),
    fmq(6, 0x08, q::xeon, "Pentium III Xeon (Coppermine)"),
    fmq(6, 0x08, q::mobile, "Mobile Pentium III (Coppermine)"),
    fms(6, 0x08, 0x1, "Pentium III (Coppermine cA2)"),
    fms(6, 0x08, 0x3, "Pentium III (Coppermine cB0)"),
    fms(6, 0x08, 0x6, "Pentium III (Coppermine cC0)"),
    fms(6, 0x08, 0xa, "Pentium III (Coppermine cD0)"),
    fm(6, 0x08, "Pentium III (Coppermine)"),
    fmq(6, 0x09, q::celeron_m, "Celeron M (Banias)"),
    fmq(6, 0x09, q::pentium_m, "Pentium M (Banias)"),
    fm(6, 0x09, "Pentium M / Celeron M (Banias)"),
    fms(6, 0x0a, 0x0, "Pentium III Xeon (Cascades A0)"),
    fms(6, 0x0a, 0x1, "Pentium III Xeon (Cascades A1)"),
    fm(6, 0x0a, "Pentium III Xeon (Cascades)"),
    fmq(6, 0x0b, q::celeron, "Celeron (Tualatin-256)"),
    fmq(6, 0x0b, q::mobile, "Mobile Pentium III-M (Tualatin)"),
    fmq(6, 0x0b, q::l2_512k, "Pentium III-S (Tualatin-512)"),
    fms(6, 0x0b, 0x1, "Pentium III (Tualatin tA1)"),
    fms(6, 0x0b, 0x4, "Pentium III (Tualatin tB1)"),
    fm(6, 0x0b, "Pentium III (Tualatin)"),
    fmq(6, 0x0d, q::celeron_m, "Celeron M (Dothan)"),
    fmq(6, 0x0d, q::pentium_m, "Pentium M (Dothan)"),
    fms(6, 0x0d, 0x6, "Pentium M (Dothan B1)"),
    fms(6, 0x0d, 0x8, "Pentium M (Dothan C0)"),
    fm(6, 0x0d, "Pentium M / Celeron M (Dothan)"),
    fmq(6, 0x0e, q::celeron, "Celeron M 400 (Yonah-512)"),
    fmq(6, 0x0e, q::xeon, "Xeon LV (Sossaman)"),
    fmq(6, 0x0e, q::pentium, "Pentium Dual-Core T2000 (Yonah)"),
    fm(6, 0x0e, "Core Duo / Core Solo (Yonah)"),
    fmq(6, 0x0f, q::xeon, "Xeon 3000/5100/5300 (Conroe/Woodcrest/Clovertown)"),
    fmq(6, 0x0f, q::extreme, "Core 2 Extreme (Conroe XE/Kentsfield XE)"),
    fmq(6, 0x0f, q::pentium, "Pentium Dual-Core E2000 (Allendale)"),
    fmq(6, 0x0f, q::celeron, "Celeron Dual-Core E1000 (Allendale)"),
    fmq(6, 0x0f, q::mobile, "Core 2 Duo Mobile (Merom)"),
    fms(6, 0x0f, 0x2, "Core 2 Duo (Conroe L2)"),
    fms(6, 0x0f, 0x6, "Core 2 Duo (Conroe B2)"),
    fms(6, 0x0f, 0x7, "Core 2 Quad (Kentsfield B3)"),
    fms(6, 0x0f, 0xb, "Core 2 Duo/Quad (Conroe/Kentsfield G0)"),
    fm(6, 0x0f, "Core 2 Duo/Quad (Conroe/Kentsfield)"),
    fm(6, 0x15, "EP80579 (Tolapai)"),
    fmq(6, 0x16, q::celeron, "Celeron (Conroe-L)"),
    fm(6, 0x16, "Core 2 Solo/Duo (Merom-L)"),
    fmq(6, 0x17, q::xeon, "Xeon 3100/5200/5400 (Wolfdale/Harpertown)"),
    fmq(6, 0x17, q::extreme, "Core 2 Extreme QX9000 (Yorkfield XE)"),
    fmq(6, 0x17, q::pentium, "Pentium Dual-Core E5000 (Wolfdale-3M)"),
    fmq(6, 0x17, q::celeron, "Celeron E3000 (Wolfdale-3M)"),
    fmq(6, 0x17, q::mobile, "Core 2 Duo Mobile (Penryn)"),
    fms(6, 0x17, 0x6, "Core 2 Duo/Quad (Wolfdale/Yorkfield C0)"),
    fms(6, 0x17, 0x7, "Core 2 Quad (Yorkfield C1)"),
    fms(6, 0x17, 0xa, "Core 2 Duo/Quad (Wolfdale/Yorkfield E0/R0)"),
    fm(6, 0x17, "Core 2 Duo/Quad (Wolfdale/Yorkfield)"),
    // Nehalem / Westmere.
    fmq(6, 0x1a, q::xeon, "Xeon 3500/5500 (Nehalem-EP)"),
    fmq(6, 0x1a, q::extreme, "Core i7-965/975 Extreme (Bloomfield)"),
    fm(6, 0x1a, "Core i7-900 (Bloomfield)"),
    fm(6, 0x1c, "Atom (Silverthorne/Diamondville)"),
    fm(6, 0x1d, "Xeon 7400 (Dunnington)"),
    fmq(6, 0x1e, q::xeon, "Xeon 3400 (Lynnfield)"),
    fmq(6, 0x1e, q::mobile, "Core i7-700/800QM (Clarksfield)"),
    fm(6, 0x1e, "Core i5-700 / i7-800 (Lynnfield)"),
    fmq(6, 0x25, q::xeon, "Xeon L3400 (Clarkdale)"),
    fmq(6, 0x25, q::mobile, "Core i3/i5/i7 Mobile (Arrandale)"),
    fmq(6, 0x25, q::pentium, "Pentium G6950/G6960 (Clarkdale)"),
    fmq(6, 0x25, q::celeron, "Celeron G1101 (Clarkdale)"),
    fm(6, 0x25, "Core i3/i5-600 (Clarkdale)"),
    fm(6, 0x26, "Atom (Lincroft)"),
    fm(6, 0x27, "Atom (Medfield)"),
    fmq(6, 0x2c, q::xeon, "Xeon 3600/5600 (Westmere-EP)"),
    fm(6, 0x2c, "Core i7-970/980/990X (Gulftown)"),
    fm(6, 0x2e, "Xeon 6500/7500 (Nehalem-EX)"),
    fm(6, 0x2f, "Xeon E7 (Westmere-EX)"),
    // Sandy Bridge / Ivy Bridge.
    fmq(6, 0x2a, q::xeon, "Xeon E3-1200 (Sandy Bridge)"),
    fmq(6, 0x2a, q::mobile, "Core i3/i5/i7-2000M (Sandy Bridge)"),
    fmq(6, 0x2a, q::celeron, "Celeron G500 (Sandy Bridge)"),
    fmq(6, 0x2a, q::pentium, "Pentium G600/G800 (Sandy Bridge)"),
    fm(6, 0x2a, "Core i3/i5/i7-2000 (Sandy Bridge)"),
    fmq(6, 0x2d, q::xeon, "Xeon E5-2600/4600 (Sandy Bridge-EP)"),
    fms(6, 0x2d, 0x6, "Core i7-3900 (Sandy Bridge-E C1)"),
    fms(6, 0x2d, 0x7, "Core i7-3900 (Sandy Bridge-E C2)"),
    fm(6, 0x2d, "Core i7-3800/3900 (Sandy Bridge-E)"),
    fm(6, 0x35, "Atom (Cloverview)"),
    fm(6, 0x36, "Atom (Cedarview)"),
    fm(6, 0x37, "Atom Z3000/E3800 (Bay Trail)"),
    fmq(6, 0x3a, q::xeon, "Xeon E3-1200 v2 (Ivy Bridge)"),
    fmq(6, 0x3a, q::mobile, "Core i3/i5/i7-3000M (Ivy Bridge)"),
    fmq(6, 0x3a, q::celeron, "Celeron G1600 (Ivy Bridge)"),
    fmq(6, 0x3a, q::pentium, "Pentium G2000 (Ivy Bridge)"),
    fm(6, 0x3a, "Core i3/i5/i7-3000 (Ivy Bridge)"),
    // Ivy Bridge-E steppings: 4 shipped as EP, 7 as EX.
    fms(6, 0x3e, 0x7, "Xeon E7 v2 (Ivy Bridge-EX)"),
    fmq(6, 0x3e, q::xeon, "Xeon E5-2600 v2 (Ivy Bridge-EP)"),
    fm(6, 0x3e, "Core i7-4800/4900 (Ivy Bridge-E)"),
    // Haswell / Broadwell.
    fmq(6, 0x3c, q::xeon, "Xeon E3-1200 v3 (Haswell)"),
    fmq(6, 0x3c, q::mobile, "Core i3/i5/i7-4000M (Haswell)"),
    fmq(6, 0x3c, q::celeron, "Celeron G1800 (Haswell)"),
    fmq(6, 0x3c, q::pentium, "Pentium G3000 (Haswell)"),
    fm(6, 0x3c, "Core i3/i5/i7-4000 (Haswell)"),
    fm(6, 0x3d, "Core i3/i5/i7-5000U (Broadwell-U)"),
    fmq(6, 0x3f, q::xeon, "Xeon E5-2600 v3 (Haswell-EP)"),
    fm(6, 0x3f, "Core i7-5800/5900 (Haswell-E)"),
    fm(6, 0x45, "Core i3/i5/i7-4000U (Haswell-ULT)"),
    fm(6, 0x46, "Core i7-4700HQ/4900HQ (Crystal Well)"),
    fmq(6, 0x47, q::xeon, "Xeon E3-1200 v4 (Broadwell)"),
    fm(6, 0x47, "Core i5/i7-5000C (Broadwell-H)"),
    fm(6, 0x4a, "Atom Z3400 (Merrifield)"),
    fm(6, 0x4c, "Atom x5/x7 (Cherry Trail/Braswell)"),
    fm(6, 0x4d, "Atom C2000 (Avoton/Rangeley)"),
    fmq(6, 0x4f, q::xeon_mp, "Xeon E7 v4 (Broadwell-EX)"),
    fmq(6, 0x4f, q::xeon, "Xeon E5-2600 v4 (Broadwell-EP)"),
    fm(6, 0x4f, "Core i7-6800/6900 (Broadwell-E)"),
    fm(6, 0x56, "Xeon D-1500 (Broadwell-DE)"),
    // Skylake and derivatives. Model 0x55 spans three server
    // generations told apart only by stepping, plus the W/D
    // workstation lines under the same steppings.
    fm(6, 0x4e, "Core i3/i5/i7-6000U (Skylake-U/Y)"),
    fms(6, 0x55, 0x5, "Xeon Scalable v2 (Cascade Lake-SP)"),
    fms(6, 0x55, 0x6, "Xeon Scalable v2 (Cascade Lake-SP)"),
    fms(6, 0x55, 0x7, "Xeon Scalable v2 (Cascade Lake-SP)"),
    fms(6, 0x55, 0xa, "Xeon Scalable v3 (Cooper Lake)"),
    fms(6, 0x55, 0xb, "Xeon Scalable v3 (Cooper Lake)"),
    fms(6, 0x55, 0x4, "Xeon Scalable (Skylake-SP)"),
    fmq(6, 0x55, q::xeon_scalable, "Xeon Scalable (Skylake-SP)"),
    fm(6, 0x55, "Xeon Scalable / W-2100 (Skylake-SP)"),
    fm(6, 0x57, "Xeon Phi 7200 (Knights Landing)"),
    fm(6, 0x5a, "Atom Z3500 (Moorefield)"),
    fmq(6, 0x5c, q::atom, "Atom x5/x7-E3900 (Apollo Lake)"),
    fmq(6, 0x5c, q::pentium, "Pentium N4200 (Apollo Lake)"),
    fmq(6, 0x5c, q::celeron, "Celeron N3350/N3450 (Apollo Lake)"),
    fm(6, 0x5c, "Atom/Celeron/Pentium (Apollo Lake)"),
    fmq(6, 0x5e, q::xeon, "Xeon E3-1200 v5 (Skylake)"),
    fmq(6, 0x5e, q::pentium, "Pentium G4400/G4500 (Skylake)"),
    fmq(6, 0x5e, q::celeron, "Celeron G3900 (Skylake)"),
    fm(6, 0x5e, "Core i3/i5/i7-6000 (Skylake)"),
    fm(6, 0x5f, "Atom C3000 (Denverton)"),
    fm(6, 0x66, "Core i3-8121U (Cannon Lake-U)"),
    fmq(6, 0x6a, q::xeon_scalable, "Xeon Scalable v3 (Ice Lake-SP)"),
    fm(6, 0x6a, "Xeon Scalable v3 / W-3300 (Ice Lake-SP/W)"),
    fm(6, 0x6c, "Xeon D-1700/2700 (Ice Lake-D)"),
    fm(6, 0x75, "Atom (Lightning Mountain)"),
    fmq(6, 0x7a, q::pentium, "Pentium Silver N5000/J5005 (Gemini Lake)"),
    fmq(6, 0x7a, q::celeron, "Celeron N4000/J4005 (Gemini Lake)"),
    fm(6, 0x7a, "Celeron/Pentium Silver (Gemini Lake)"),
    fm(6, 0x7d, "Core i3/i5/i7-1000G (Ice Lake-Y)"),
    fm(6, 0x7e, "Core i3/i5/i7-1000G (Ice Lake-U)"),
    fm(6, 0x85, "Xeon Phi 7295 (Knights Mill)"),
    fm(6, 0x86, "Atom P5900 (Snow Ridge)"),
    fm(6, 0x8a, "Core i5-L16G7 (Lakefield)"),
    fm(6, 0x8c, "Core i3/i5/i7-1100G (Tiger Lake-U)"),
    fm(6, 0x8d, "Core i5/i7/i9-11000H (Tiger Lake-H)"),
    // Kaby Lake-U and its refreshes reused model 0x8e; steppings are
    // the only split. Stepping 12 is from observed Comet/Whiskey
    // samples, not a specification update.
    fms(6, 0x8e, 0x9, "Core i3/i5/i7-7000U/Y (Kaby Lake-U/Amber Lake-Y)"),
    fms(6, 0x8e, 0xa, "Core i3/i5/i7-8000U (Coffee Lake-U)"),
    fms(6, 0x8e, 0xb, "Core i3/i5/i7-8000U (Whiskey Lake-U)"),
    fms(6, 0x8e, 0xc, "Core i5/i7-10000U/8000U (Comet Lake-U/Whiskey Lake-U)"),
    fm(6, 0x8e, "Core Mobile (Kaby Lake-U derived)"),
    fmq(6, 0x8f, q::xeon_scalable, "Xeon Scalable v4 (Sapphire Rapids)"),
    fm(6, 0x8f, "Xeon Scalable v4 / W-2400/3400 (Sapphire Rapids)"),
    fm(6, 0x96, "Atom x6000E (Elkhart Lake)"),
    fmq(6, 0x97, q::celeron, "Celeron G6900 (Alder Lake-S)"),
    fmq(6, 0x97, q::pentium, "Pentium Gold G7400 (Alder Lake-S)"),
    fm(6, 0x97, "Core i5/i7/i9-12000 (Alder Lake-S)"),
    fmq(6, 0x9a, q::low_power_suffix, "Core i3/i5/i7-1200U (Alder Lake-U)"),
    fm(6, 0x9a, "Core i5/i7-12000P/H (Alder Lake-P)"),
    fm(6, 0x9c, "Celeron/Pentium Silver (Jasper Lake)"),
    fmq(6, 0x9e, q::xeon, "Xeon E3-1200 v6 (Kaby Lake)"),
    fmq(6, 0x9e, q::celeron, "Celeron G3900/G4900 (Kaby/Coffee Lake)"),
    fmq(6, 0x9e, q::pentium, "Pentium Gold G5400 (Coffee Lake)"),
    fms(6, 0x9e, 0x9, "Core i3/i5/i7-7000 (Kaby Lake-S)"),
    fms(6, 0x9e, 0xa, "Core i3/i5/i7-8000 (Coffee Lake-S)"),
    fms(6, 0x9e, 0xb, "Core i3/i5/i7-8000 (Coffee Lake-S)"),
    fms(6, 0x9e, 0xc, "Core i5/i7/i9-9000 (Coffee Lake-R)"),
    fms(6, 0x9e, 0xd, "Core i5/i7/i9-9000 (Coffee Lake-R)"),
    fm(6, 0x9e, "Core (Kaby/Coffee Lake)"),
    fm(6, 0x9d, "Nervana NNP-I 1000 (Spring Hill)"),
    fm(6, 0xa5, "Core i5/i7/i9-10000 (Comet Lake-S)"),
    fm(6, 0xa6, "Core i5/i7-10000U (Comet Lake-U)"),
    fm(6, 0xa7, "Core i5/i7/i9-11000 (Rocket Lake)"),
    fm(6, 0xaa, "Core Ultra 100 (Meteor Lake-P)"),
    fm(6, 0xad, "Xeon 6 P-core (Granite Rapids)"),
    fm(6, 0xaf, "Xeon 6 E-core (Sierra Forest)"),
    fm(6, 0xb5, "Core Ultra 200U (Arrow Lake-U)"),
    fm(6, 0xb6, "Atom C1100 (Grand Ridge)"),
    fm(6, 0xb7, "Core i5/i7/i9-13000/14000 (Raptor Lake-S)"),
    fmq(6, 0xba, q::low_power_suffix, "Core i3/i5/i7-1300U (Raptor Lake-U)"),
    fm(6, 0xba, "Core i5/i7-13000P/H (Raptor Lake-P)"),
    fm(6, 0xbd, "Core Ultra 200V (Lunar Lake)"),
    fmq(6, 0xbe, q::core_line, "Core i3-N300/N305 (Alder Lake-N)"),
    fm(6, 0xbe, "Processor N100/N200 (Alder Lake-N)"),
    // Raptor Lake parts fused from the Alder die keep the older IMC
    // and report model 0xbf.
    fm(6, 0xbf, "Core i5/i7-13000 (Raptor Lake-S, Alder die)"),
    fm(6, 0xc5, "Core Ultra 200 (Arrow Lake-H)"),
    fm(6, 0xc6, "Core Ultra 200S (Arrow Lake-S)"),
    fm(6, 0xcc, "Core Ultra 300 (Panther Lake)"),
    fm(6, 0xcf, "Xeon Scalable v5 (Emerald Rapids)"),
    fm(6, 0xdd, "Xeon 7 E-core (Clearwater Forest)"),
    f(6, "unknown P6-derived model"),
    // Knights Corner kept its own family.
    fm(0xb, 0x01, "Xeon Phi (Knights Corner)"),
    // NetBurst. Brand-line identity comes from the leaf 1 brand index;
    // plain Pentium 4 rows refine to the core revision by stepping.
    fmq(0xf, 0x0, q::xeon, "Xeon (Foster)"),
    fm(0xf, 0x0, "Pentium 4 (Willamette)"),
    fmq(0xf, 0x1, q::xeon, "Xeon (Foster)"),
    fmq(0xf, 0x1, q::celeron_mobile, "Mobile Celeron (Willamette-128)"),
    fmq(0xf, 0x1, q::celeron, "Celeron (Willamette-128)"),
    fms(0xf, 0x1, 0x2, "Pentium 4 (Willamette D0)"),
    fms(0xf, 0x1, 0x3, "Pentium 4 (Willamette E0)"),
    fm(0xf, 0x1, "Pentium 4 (Willamette)"),
    fmq(0xf, 0x2, q::xeon_mp, "Xeon MP (Gallatin)"),
    fmq(0xf, 0x2, q::xeon, "Xeon (Prestonia)"),
    fmq(0xf, 0x2, q::mobile_p4, "Mobile Pentium 4 (Northwood)"),
    fmq(0xf, 0x2, q::celeron_mobile, "Mobile Celeron (Northwood-128)"),
    fmq(0xf, 0x2, q::celeron, "Celeron (Northwood-128)"),
    fms(0xf, 0x2, 0x4, "Pentium 4 (Northwood B0)"),
    fms(0xf, 0x2, 0x5, "Pentium 4 (Northwood M0)"),
    fms(0xf, 0x2, 0x7, "Pentium 4 (Northwood C1)"),
    fms(0xf, 0x2, 0x9, "Pentium 4 (Northwood D1)"),
    fm(0xf, 0x2, "Pentium 4 (Northwood)"),
    fmq(0xf, 0x3, q::xeon, "Xeon (Nocona)"),
    fmq(0xf, 0x3, q::celeron, "Celeron D (Prescott)"),
    fms(0xf, 0x3, 0x3, "Pentium 4 (Prescott C0)"),
    fms(0xf, 0x3, 0x4, "Pentium 4 (Prescott D0)"),
    fm(0xf, 0x3, "Pentium 4 (Prescott)"),
    fmq(0xf, 0x4, q::xeon_mp, "Xeon MP (Potomac)"),
    fmq(0xf, 0x4, q::xeon, "Xeon (Irwindale)"),
    fmq(0xf, 0x4, q::extreme, "Pentium Extreme Edition (Smithfield)"),
    fmq(0xf, 0x4, q::pentium_d, "Pentium D (Smithfield)"),
    fmq(0xf, 0x4, q::celeron, "Celeron D (Prescott-V)"),
    fms(0xf, 0x4, 0x1, "Pentium 4 (Prescott E0)"),
    fms(0xf, 0x4, 0x3, "Pentium 4 (Prescott N0)"),
    fms(0xf, 0x4, 0x9, "Pentium 4 (Prescott G1)"),
    fm(0xf, 0x4, "Pentium 4 (Prescott)"),
    fmq(0xf, 0x6, q::extreme, "Pentium Extreme Edition 965 (Presler)"),
    fmq(0xf, 0x6, q::pentium_d, "Pentium D 900 (Presler)"),
    fmq(0xf, 0x6, q::xeon, "Xeon (Dempsey)"),
    fmq(0xf, 0x6, q::celeron, "Celeron D (Cedar Mill)"),
    fms(0xf, 0x6, 0x2, "Pentium 4 (Cedar Mill B1)"),
    fms(0xf, 0x6, 0x4, "Pentium 4 (Cedar Mill C1)"),
    fms(0xf, 0x6, 0x5, "Pentium 4 (Cedar Mill D0)"),
    fm(0xf, 0x6, "Pentium 4 (Cedar Mill)"),
    f(0xf, "Pentium 4 (unknown model)"),
    fallback("unknown"),
];
