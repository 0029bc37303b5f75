//! Hygon model table. Dhyana is a licensed Zen derivative; family 18h
//! is reserved to Hygon by the AMD/Hygon joint venture.

use crate::engine::{f, fallback, fm, Rule};

pub const MODELS: &[Rule<&'static str>] = &[
    fm(0x18, 0x00, "Dhyana (Zen-derived)"),
    fm(0x18, 0x01, "Dhyana Plus"),
    fm(0x18, 0x02, "C86 3000 (Dhyana)"),
    fm(0x18, 0x04, "C86 7000 (Dhyana Plus)"),
    f(0x18, "Dhyana (unknown model)"),
    fallback("unknown"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::first_match;
    use silica_core::{Signature, Stash};

    #[test]
    fn dhyana_resolves() {
        let stash = Stash::new();
        // 0x00900f01: family 0x18, model 0x00.
        let got = first_match(MODELS, &Signature::from_eax(0x0090_0f01), &stash);
        assert_eq!(got, Some(&"Dhyana (Zen-derived)"));
    }
}
