//! The first-match rule engine all vendor tables run on.
//!
//! A table is an ordered slice of [`Rule`]s. Matching walks the slice in
//! declaration order and returns the first rule whose pattern fields all
//! equal the signature's and whose predicate, if any, holds against the
//! stash. Declaration order is the only priority: tables put their most
//! qualified rows (stepping-level, predicate-guarded) ahead of broader
//! rows so the broad rows act as controlled fallbacks, and every table
//! ends with an [`Pattern::Always`] row so matching is total.

use silica_core::{Signature, Stash};

/// Which signature fields a rule compares, and at what width.
///
/// The synthesized variants compare the folded family/model values; the
/// legacy variants compare the raw 4-bit fields, for tables written
/// against pre-extended-encoding parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Family(u32),
    FamilyModel(u32, u32),
    FamilyModelStepping(u32, u32, u32),
    LegacyFamily(u8),
    LegacyFamilyModel(u8, u8),
    LegacyFamilyModelStepping(u8, u8, u8),
    /// Matches any signature. Every table's final row.
    Always,
}

impl Pattern {
    pub fn matches(&self, sig: &Signature) -> bool {
        match *self {
            Pattern::Family(f) => sig.family() == f,
            Pattern::FamilyModel(f, m) => sig.family() == f && sig.model() == m,
            Pattern::FamilyModelStepping(f, m, s) => {
                sig.family() == f && sig.model() == m && sig.stepping as u32 == s
            }
            Pattern::LegacyFamily(f) => sig.base_family == f,
            Pattern::LegacyFamilyModel(f, m) => sig.base_family == f && sig.base_model == m,
            Pattern::LegacyFamilyModelStepping(f, m, s) => {
                sig.base_family == f && sig.base_model == m && sig.stepping == s
            }
            Pattern::Always => true,
        }
    }
}

/// A disambiguating condition evaluated against the stash. Pure and
/// cheap; all inputs were computed before matching began.
pub type Predicate = fn(&Stash) -> bool;

/// One table row: pattern, optional predicate, payload.
///
/// Model tables carry `&'static str` payloads; microarchitecture tables
/// carry [`crate::uarch::Arch`] records.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub pattern: Pattern,
    pub when: Option<Predicate>,
    pub payload: T,
}

/// Return the payload of the first rule that matches, `None` when no
/// row applies (tables with an `Always` row never return `None`).
pub fn first_match<'r, T>(rules: &'r [Rule<T>], sig: &Signature, stash: &Stash) -> Option<&'r T> {
    rules
        .iter()
        .find(|rule| rule.pattern.matches(sig) && rule.when.map_or(true, |p| p(stash)))
        .map(|rule| &rule.payload)
}

// Row constructors. Tables read best as dense one-liners, so the names
// stay short: f/fm/fms for plain rows, a -q suffix for predicate rows,
// an l- prefix for legacy 4-bit comparison.

pub const fn f<T>(family: u32, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::Family(family), when: None, payload }
}

pub const fn fq<T>(family: u32, when: Predicate, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::Family(family), when: Some(when), payload }
}

pub const fn fm<T>(family: u32, model: u32, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::FamilyModel(family, model), when: None, payload }
}

pub const fn fmq<T>(family: u32, model: u32, when: Predicate, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::FamilyModel(family, model), when: Some(when), payload }
}

pub const fn fms<T>(family: u32, model: u32, stepping: u32, payload: T) -> Rule<T> {
    Rule {
        pattern: Pattern::FamilyModelStepping(family, model, stepping),
        when: None,
        payload,
    }
}

pub const fn fmsq<T>(family: u32, model: u32, stepping: u32, when: Predicate, payload: T) -> Rule<T> {
    Rule {
        pattern: Pattern::FamilyModelStepping(family, model, stepping),
        when: Some(when),
        payload,
    }
}

pub const fn lf<T>(family: u8, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::LegacyFamily(family), when: None, payload }
}

pub const fn lfm<T>(family: u8, model: u8, payload: T) -> Rule<T> {
    Rule { pattern: Pattern::LegacyFamilyModel(family, model), when: None, payload }
}

pub const fn lfmq<T>(family: u8, model: u8, when: Predicate, payload: T) -> Rule<T> {
    Rule {
        pattern: Pattern::LegacyFamilyModel(family, model),
        when: Some(when),
        payload,
    }
}

pub const fn lfms<T>(family: u8, model: u8, stepping: u8, payload: T) -> Rule<T> {
    Rule {
        pattern: Pattern::LegacyFamilyModelStepping(family, model, stepping),
        when: None,
        payload,
    }
}

pub const fn fallback<T>(payload: T) -> Rule<T> {
    Rule { pattern: Pattern::Always, when: None, payload }
}
