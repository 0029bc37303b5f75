//! Transmeta model table.

use crate::engine::{f, fallback, fm, lfm, Rule};

pub const MODELS: &[Rule<&'static str>] = &[
    lfm(5, 0x4, "Crusoe TM3x00/TM5x00"),
    fm(0xf, 0x02, "Efficeon TM8000 (130nm)"),
    f(0xf, "Efficeon TM8000"),
    fallback("unknown"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::first_match;
    use silica_core::{Signature, Stash};

    #[test]
    fn crusoe_resolves() {
        let stash = Stash::new();
        let got = first_match(MODELS, &Signature::from_eax(0x0000_0543), &stash);
        assert_eq!(got, Some(&"Crusoe TM3x00/TM5x00"));
    }
}
