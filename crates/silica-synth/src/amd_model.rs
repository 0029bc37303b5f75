//! AMD processor-name reconstruction from packed BrandId fields.
//!
//! This is numeric-field decoding, not rule matching: the packed
//! sub-fields (BrandTableIndex, NN, PkgType, CmpCap, PwrLmt, String1,
//! String2, PartialModel) come straight out of AMD's revision-guide
//! "Constructing the Processor Name String" sections, and the model
//! arithmetic (22 + NN, 38 + 2·NN, ...) consists of table constants
//! from those documents, not derivable formulas.
//!
//! The decoder serves two callers: the brand analyzer uses it to
//! replace an OEM string that says "model unknown", and the synthesis
//! layer appends its model number to generic matched results. Packed
//! values outside the documented tables produce `None`; later families
//! always ship a real name string, so no tables exist for them.

use silica_core::bits::field;
use silica_core::Stash;

/// A reconstructed brand: the marketing line and the numeric
/// designator, kept separate so callers can append just the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBrand {
    pub prefix: &'static str,
    pub designator: String,
}

impl DecodedBrand {
    fn new(prefix: &'static str, designator: String) -> Self {
        DecodedBrand { prefix, designator }
    }

    /// The full synthesized brand string.
    pub fn full(&self) -> String {
        format!("{} {}", self.prefix, self.designator)
    }

    /// The numeric model token alone ("3200+", "2218 SE" without the
    /// leading "Processor").
    pub fn model_number(&self) -> &str {
        match self.designator.strip_prefix("Processor ") {
            Some(rest) => rest,
            None => &self.designator,
        }
    }
}

/// Decode the packed brand fields for the stash's CPU, when its family
/// has a documented name-string table.
pub fn decode(stash: &Stash) -> Option<DecodedBrand> {
    let sig = stash.signature();
    match sig.family() {
        0xf if sig.model() < 0x40 => pre_npt(stash),
        0xf => npt(stash),
        0x10 => family_10h(stash),
        0x11 => family_11h(stash),
        _ => None,
    }
}

/// Pre-NPT K8: revision guide 25759, "Constructing the Processor Name
/// String". The 8-bit BrandId in leaf 1 EBX packs a 3-bit table index
/// over a 5-bit NN; when zero, the 12-bit form in leaf 0x8000_0001 EBX
/// applies instead.
fn pre_npt(stash: &Stash) -> Option<DecodedBrand> {
    let brand_8 = field(stash.val_1_ebx, 0, 7);
    let brand_16 = field(stash.val_80000001_ebx, 0, 15);
    let (bti, nn) = if brand_8 != 0 {
        (brand_8 >> 5, brand_8 & 0x1f)
    } else if brand_16 != 0 {
        (field(brand_16, 6, 11), field(brand_16, 0, 5))
    } else {
        return None;
    };

    // Table constants, per the document.
    let xx = 22 + nn;
    let yy = 38 + 2 * nn;
    let zz = 24 + nn;
    let tt = 24 + nn;
    let rr = 45 + 5 * nn;
    let ee = 9 + nn;

    let (prefix, designator) = match bti {
        0x04 => ("AMD Athlon(tm) 64", format!("Processor {xx}00+")),
        0x05 => ("AMD Athlon(tm) 64 X2 Dual Core", format!("Processor {xx}00+")),
        0x06 => ("AMD Athlon(tm) 64", format!("FX-{zz}")),
        0x08 | 0x09 => ("Mobile AMD Athlon(tm) 64", format!("Processor {xx}00+")),
        0x0a => ("AMD Turion(tm) 64 Mobile Technology", format!("ML-{xx}")),
        0x0b => ("AMD Turion(tm) 64 Mobile Technology", format!("MT-{xx}")),
        0x0c | 0x0d => ("AMD Opteron(tm)", format!("Processor 1{yy}")),
        0x0e => ("AMD Opteron(tm)", format!("Processor 1{yy} HE")),
        0x0f => ("AMD Opteron(tm)", format!("Processor 1{yy} EE")),
        0x10 | 0x11 => ("AMD Opteron(tm)", format!("Processor 2{yy}")),
        0x12 => ("AMD Opteron(tm)", format!("Processor 2{yy} HE")),
        0x13 => ("AMD Opteron(tm)", format!("Processor 2{yy} EE")),
        0x14 | 0x15 => ("AMD Opteron(tm)", format!("Processor 8{yy}")),
        0x16 => ("AMD Opteron(tm)", format!("Processor 8{yy} HE")),
        0x17 => ("AMD Opteron(tm)", format!("Processor 8{yy} EE")),
        0x18 => ("AMD Athlon(tm) 64", format!("Processor {ee}00+")),
        0x1d | 0x1e => ("Mobile AMD Athlon(tm) XP-M", format!("Processor {xx}00+")),
        0x20 => ("AMD Athlon(tm) XP", format!("Processor {xx}00+")),
        0x21 | 0x23 => ("Mobile AMD Sempron(tm)", format!("Processor {tt}00+")),
        0x22 | 0x26 => ("AMD Sempron(tm)", format!("Processor {tt}00+")),
        0x24 => ("AMD Athlon(tm) 64", format!("FX-{zz}")),
        0x29 => ("Dual Core AMD Opteron(tm)", format!("Processor 1{rr} SE")),
        0x2a => ("Dual Core AMD Opteron(tm)", format!("Processor 2{rr} SE")),
        0x2b => ("Dual Core AMD Opteron(tm)", format!("Processor 8{rr} SE")),
        0x2c => ("Dual Core AMD Opteron(tm)", format!("Processor 1{rr} HE")),
        0x2d => ("Dual Core AMD Opteron(tm)", format!("Processor 2{rr} HE")),
        0x2e => ("Dual Core AMD Opteron(tm)", format!("Processor 8{rr} HE")),
        0x2f => ("Dual Core AMD Opteron(tm)", format!("Processor 1{rr} EE")),
        0x30 => ("Dual Core AMD Opteron(tm)", format!("Processor 2{rr} EE")),
        0x31 => ("Dual Core AMD Opteron(tm)", format!("Processor 8{rr} EE")),
        0x32 => ("Dual Core AMD Opteron(tm)", format!("Processor 1{rr}")),
        0x33 => ("Dual Core AMD Opteron(tm)", format!("Processor 2{rr}")),
        0x34 => ("Dual Core AMD Opteron(tm)", format!("Processor 8{rr}")),
        _ => return None,
    };
    Some(DecodedBrand::new(prefix, designator))
}

/// NPT family 0Fh: revision guide 33610. The brand word moves entirely
/// into leaf 0x8000_0001 EBX and gains a package type in its top
/// nibble; the name tables are keyed by (PkgType, CmpCap, BTI, PwrLmt).
fn npt(stash: &Stash) -> Option<DecodedBrand> {
    let ebx = stash.val_80000001_ebx;
    if field(ebx, 0, 15) == 0 {
        return None;
    }
    let pkg = field(ebx, 28, 31);
    let bti = field(ebx, 9, 13);
    let pwr = (field(ebx, 6, 8) << 1) | field(ebx, 14, 14);
    let nn = (field(ebx, 15, 15) << 6) | field(ebx, 0, 5);
    // CmpCap: leaf 0x8000_0008 ECX[7:0] is cores minus one.
    let cmp = u32::from(field(stash.val_80000008_ecx, 0, 7) >= 1);

    let opteron = |series: u32| format!("Processor {}{:02}", series, nn.saturating_sub(1));

    let (prefix, designator) = match (pkg, cmp, bti, pwr) {
        // AM2.
        (1, 0, 0x01, 0x5) => ("AMD Sempron(tm)", format!("Processor LE-1{nn:02}0")),
        (1, 0, 0x01, 0x6) => ("AMD Athlon(tm)", format!("Processor LE-1{nn:02}0")),
        (1, 0, 0x02, 0x1) => (
            "Energy Efficient AMD Sempron(tm)",
            format!("Processor {}00+", 24 + nn),
        ),
        (1, 0, 0x02, _) => ("AMD Sempron(tm)", format!("Processor {}00+", 24 + nn)),
        (1, 0, 0x03, 0x1) => (
            "Energy Efficient AMD Athlon(tm) 64",
            format!("Processor {}00+", 22 + nn),
        ),
        (1, 0, 0x03, _) => ("AMD Athlon(tm) 64", format!("Processor {}00+", 22 + nn)),
        (1, 1, 0x01, 0xa) => ("Dual-Core AMD Opteron(tm)", format!("{} SE", opteron(12))),
        (1, 1, 0x01, _) => ("Dual-Core AMD Opteron(tm)", opteron(12)),
        (1, 1, 0x04, 0x1) => (
            "Energy Efficient AMD Athlon(tm) 64 X2 Dual Core",
            format!("Processor {}00+", 33 + 2 * nn),
        ),
        (1, 1, 0x04, _) => (
            "AMD Athlon(tm) 64 X2 Dual Core",
            format!("Processor {}00+", 33 + 2 * nn),
        ),
        (1, 1, 0x05, _) => (
            "AMD Athlon(tm) X2 Dual Core",
            format!("Processor BE-2{nn:02}0"),
        ),
        (1, 1, 0x06, _) => ("AMD Athlon(tm) 64", format!("FX-{}", 24 + nn)),
        (1, 1, 0x07, _) => (
            "AMD Sempron(tm) Dual Core",
            format!("Processor 2{nn:02}0"),
        ),
        // S1g1 (mobile).
        (2, 0, 0x01, _) => ("Mobile AMD Sempron(tm)", format!("Processor {}00+", 24 + nn)),
        (2, 0, 0x02, _) => ("AMD Sempron(tm)", format!("Processor {}00+", 24 + nn)),
        (2, 0, 0x03, _) => (
            "AMD Turion(tm) 64 Mobile Technology",
            format!("MK-{}", 26 + nn),
        ),
        (2, 1, 0x01, _) => (
            "AMD Athlon(tm) 64 X2 Dual-Core",
            format!("Processor TK-{}", 14 + 2 * nn),
        ),
        (2, 1, 0x02, _) => (
            "AMD Turion(tm) 64 X2 Mobile Technology",
            format!("TL-{}", 14 + 2 * nn),
        ),
        // Socket F (1207).
        (3, 1, 0x01, 0x2) => ("Dual-Core AMD Opteron(tm)", format!("{} HE", opteron(22))),
        (3, 1, 0x01, 0xa) => ("Dual-Core AMD Opteron(tm)", format!("{} SE", opteron(22))),
        (3, 1, 0x01, _) => ("Dual-Core AMD Opteron(tm)", opteron(22)),
        (3, 1, 0x04, 0x2) => ("Dual-Core AMD Opteron(tm)", format!("{} HE", opteron(82))),
        (3, 1, 0x04, 0xa) => ("Dual-Core AMD Opteron(tm)", format!("{} SE", opteron(82))),
        (3, 1, 0x04, _) => ("Dual-Core AMD Opteron(tm)", opteron(82)),
        (3, 1, 0x06, _) => ("AMD Athlon(tm) 64", format!("FX-{}", 24 + nn)),
        _ => return None,
    };
    Some(DecodedBrand::new(prefix, designator))
}

/// Family 10h: revision guide 41322. The brand word splits into Pg,
/// String1, PartialModel and String2; core count (NC) and package type
/// select the name table.
fn family_10h(stash: &Stash) -> Option<DecodedBrand> {
    let ebx = stash.val_80000001_ebx;
    if field(ebx, 0, 15) == 0 {
        return None;
    }
    let pkg = field(ebx, 28, 31);
    let _pg = field(ebx, 15, 15);
    let str1 = field(ebx, 11, 14);
    let pm = field(ebx, 4, 10);
    let str2 = field(ebx, 0, 3);
    let nc = field(stash.val_80000008_ecx, 0, 7);

    let power = match str2 {
        0 => "",
        1 => " SE",
        2 => " HE",
        3 => " EE",
        _ => return None,
    };

    let (prefix, designator) = match (pkg, nc, str1) {
        // Fr2/Fr5/Fr6 servers.
        (0, 3, 0) => ("Quad-Core AMD Opteron(tm)", format!("Processor 23{pm:02}{power}")),
        (0, 3, 1) => ("Quad-Core AMD Opteron(tm)", format!("Processor 83{pm:02}{power}")),
        (0, 5, 0) => ("Six-Core AMD Opteron(tm)", format!("Processor 24{pm:02}{power}")),
        (0, 5, 1) => ("Six-Core AMD Opteron(tm)", format!("Processor 84{pm:02}{power}")),
        // AM2r2/AM3 desktops.
        (1, 3, 0) => (
            "AMD Phenom(tm)",
            format!("9{pm:02}{} Quad-Core Processor", desktop_suffix(str2)?),
        ),
        (1, 2, 0) => (
            "AMD Phenom(tm)",
            format!("8{pm:02}{} Triple-Core Processor", desktop_suffix(str2)?),
        ),
        (1, 1, 0) => (
            "AMD Athlon(tm)",
            format!("7{pm:02}{} Dual-Core Processor", desktop_suffix(str2)?),
        ),
        (1, 1, 1) => ("AMD Athlon(tm)", format!("Processor LE-1{pm:02}0")),
        (1, 0, 2) => ("AMD Sempron(tm)", format!("Processor LE-1{pm:02}0")),
        (1, 5, 0) | (1, 5, 1) => (
            "AMD Phenom(tm) II X6",
            format!("10{pm:02}T Processor"),
        ),
        (1, 3, 3) => (
            "AMD Phenom(tm) II X4",
            format!("9{pm:02}{} Processor", desktop_suffix(str2)?),
        ),
        (1, 3, 7) => ("AMD Athlon(tm) II X4", format!("6{pm:02} Processor")),
        (1, 2, 3) => (
            "AMD Phenom(tm) II X3",
            format!("7{pm:02}{} Processor", desktop_suffix(str2)?),
        ),
        (1, 2, 4) => ("AMD Athlon(tm) II X3", format!("4{pm:02} Processor")),
        (1, 1, 6) => (
            "AMD Phenom(tm) II X2",
            format!("5{pm:02}{} Processor", desktop_suffix(str2)?),
        ),
        (1, 1, 7) => ("AMD Athlon(tm) II X2", format!("2{pm:02} Processor")),
        // S1g3/S1g4 mobile.
        (2, 1, 0) => (
            "AMD Turion(tm) II Ultra Dual-Core Mobile",
            format!("Processor M6{pm:02}"),
        ),
        (2, 1, 1) => (
            "AMD Turion(tm) II Dual-Core Mobile",
            format!("Processor M5{pm:02}"),
        ),
        (2, 1, 2) => ("AMD Athlon(tm) II Dual-Core", format!("Processor M3{pm:02}")),
        (2, 0, 1) => ("AMD V-Series", format!("Processor V1{pm:02}")),
        (2, 1, 4) => (
            "AMD Phenom(tm) II Dual-Core Mobile",
            format!("Processor N6{pm:02}"),
        ),
        (2, 2, 0) => (
            "AMD Phenom(tm) II Triple-Core Mobile",
            format!("Processor P8{pm:02}"),
        ),
        (2, 3, 0) => (
            "AMD Phenom(tm) II Quad-Core Mobile",
            format!("Processor X9{pm:02}"),
        ),
        // ASB2 (Geneva, BGA).
        (4, 0, 0) => ("AMD Athlon(tm) II Neo", format!("Processor K1{pm:02}")),
        (4, 0, 2) => ("AMD V-Series", format!("Processor V1{pm:02}")),
        (4, 1, 0) => (
            "AMD Athlon(tm) II Neo Dual-Core",
            format!("Processor K3{pm:02}"),
        ),
        (4, 1, 1) => (
            "AMD Turion(tm) II Neo Dual-Core",
            format!("Processor K6{pm:02}"),
        ),
        // G34 and C32 servers.
        (3, 7, 0) | (3, 11, 0) => ("AMD Opteron(tm)", format!("Processor 61{pm:02}{power}")),
        (5, 3, 0) | (5, 5, 0) => ("AMD Opteron(tm)", format!("Processor 41{pm:02}{power}")),
        _ => return None,
    };
    Some(DecodedBrand::new(prefix, designator))
}

/// Desktop String2 values for family 10h: low-power "e" and black
/// edition "B" letters append directly to the model digits.
fn desktop_suffix(str2: u32) -> Option<&'static str> {
    match str2 {
        0 => Some(""),
        1 => Some("e"),
        2 => Some("B"),
        _ => None,
    }
}

/// Family 11h: revision guide 41788. Mobile-only package (S1g2).
fn family_11h(stash: &Stash) -> Option<DecodedBrand> {
    let ebx = stash.val_80000001_ebx;
    if field(ebx, 0, 15) == 0 {
        return None;
    }
    let pkg = field(ebx, 28, 31);
    let str1 = field(ebx, 11, 14);
    let pm = field(ebx, 4, 10);
    let nc = field(stash.val_80000008_ecx, 0, 7);

    let (prefix, designator) = match (pkg, nc, str1) {
        (2, 1, 0) => (
            "AMD Turion(tm) X2 Ultra Dual-Core Mobile",
            format!("ZM-{pm:02}"),
        ),
        (2, 1, 1) => ("AMD Turion(tm) X2 Dual-Core Mobile", format!("RM-{pm:02}")),
        (2, 1, 2) => ("AMD Athlon(tm) X2 Dual-Core", format!("QL-{pm:02}")),
        (2, 0, 0) => ("AMD Sempron(tm)", format!("SI-{pm:02}")),
        (2, 0, 1) => ("AMD Athlon(tm)", format!("QI-{pm:02}")),
        (2, 1, 3) => ("AMD Sempron(tm) X2 Dual-Core", format!("NI-{pm:02}")),
        _ => return None,
    };
    Some(DecodedBrand::new(prefix, designator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_core::{leaf, Registers};

    fn stash(leaves: &[(u32, Registers)]) -> Stash {
        let mut s = Stash::new();
        for (l, regs) in leaves {
            s.absorb(*l, 0, regs);
        }
        s
    }

    #[test]
    fn pre_npt_athlon64() {
        // Family 0xF model 0x4, 8-bit BrandId bti=4, NN=10: 22+10 = 32.
        let s = stash(&[(
            leaf::FEATURES,
            Registers::new(0x0000_0f48, 0x0000_008a, 0, 0),
        )]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.prefix, "AMD Athlon(tm) 64");
        assert_eq!(decoded.designator, "Processor 3200+");
        assert_eq!(decoded.full(), "AMD Athlon(tm) 64 Processor 3200+");
        assert_eq!(decoded.model_number(), "3200+");
    }

    #[test]
    fn pre_npt_falls_back_to_extended_word() {
        // 8-bit BrandId zero; 12-bit form bti=0x10 (Opteron 2YY), NN=4:
        // 38 + 2*4 = 46.
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0000_0f48, 0, 0, 0)),
            (
                leaf::EXTENDED_FEATURES,
                Registers::new(0x0000_0f48, (0x10 << 6) | 4, 0, 0),
            ),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "AMD Opteron(tm) Processor 246");
    }

    #[test]
    fn pre_npt_unknown_bti_decodes_nothing() {
        let s = stash(&[(
            leaf::FEATURES,
            Registers::new(0x0000_0f48, 0x0000_00ff, 0, 0),
        )]);
        assert_eq!(decode(&s), None);
    }

    #[test]
    fn npt_socket_f_opteron() {
        // Family 0xF model 0x41 (NPT). PkgType=3, BTI=1, PwrLmt=0xa
        // (SE), NN=19: Opteron 2218 SE.
        let ebx = (3 << 28) | (0x01 << 9) | (0x5 << 6) | 19;
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0004_0f12, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0004_0f12, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0x0001, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "Dual-Core AMD Opteron(tm) Processor 2218 SE");
        assert_eq!(decoded.model_number(), "2218 SE");
    }

    #[test]
    fn npt_am2_athlon_x2_be() {
        // PkgType=1 (AM2), BTI=5, NN=35, dual core: BE-2350.
        let ebx = (1 << 28) | (0x05 << 9) | 35;
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0004_0f22, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0004_0f22, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0x0001, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "AMD Athlon(tm) X2 Dual Core Processor BE-2350");
    }

    #[test]
    fn family_10h_quad_core_opteron() {
        // PkgType=0 (Fr2), NC=3, Str1=1, PartialModel=0x47, Str2=2 (HE).
        let ebx = (1 << 11) | (0x47 << 4) | 2;
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0010_0f22, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0010_0f22, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0x0003, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "Quad-Core AMD Opteron(tm) Processor 8371 HE");
    }

    #[test]
    fn family_10h_desktop_phenom_ii_x4() {
        // PkgType=1 (AM3), NC=3, Str1=3, PartialModel=45, Str2=0.
        let ebx = (1 << 28) | (3 << 11) | (45 << 4);
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0010_0f42, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0010_0f42, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0x0003, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "AMD Phenom(tm) II X4 945 Processor");
    }

    #[test]
    fn family_10h_neo_single_core() {
        // PkgType=4 (ASB2), NC=0, Str1=0, PartialModel=25: Neo K125.
        let ebx = (4 << 28) | (25 << 4);
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0010_0f62, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0010_0f62, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "AMD Athlon(tm) II Neo Processor K125");
    }

    #[test]
    fn family_11h_single_core_athlon() {
        // Str1=1 with one core: the QI line.
        let ebx = (2 << 28) | (1 << 11) | (46 << 4);
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0020_0f31, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0020_0f31, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(decoded.full(), "AMD Athlon(tm) QI-46");
    }

    #[test]
    fn family_11h_turion_ultra() {
        let ebx: u32 = (2 << 28) | (82 << 4);
        let s = stash(&[
            (leaf::FEATURES, Registers::new(0x0020_0f31, 0, 0, 0)),
            (leaf::EXTENDED_FEATURES, Registers::new(0x0020_0f31, ebx, 0, 0)),
            (leaf::ADDRESS_SIZES, Registers::new(0, 0, 0x0001, 0)),
        ]);
        let decoded = decode(&s).unwrap();
        assert_eq!(
            decoded.full(),
            "AMD Turion(tm) X2 Ultra Dual-Core Mobile ZM-82"
        );
    }

    #[test]
    fn modern_families_have_no_tables() {
        let s = stash(&[(leaf::FEATURES, Registers::new(0x00a2_0f10, 0x1234, 0, 0))]);
        assert_eq!(decode(&s), None);
    }
}
