//! Data model shared by every stage of CPUID decoding.
//!
//! A CPU is examined in three strictly ordered stages: raw leaf words are
//! absorbed into a [`Stash`], brand analysis derives disambiguation hints
//! from the marketing string, and topology resolution fills in the
//! multiprocessing summary. Each field of the stash is written by exactly
//! one stage and read only by later ones.

pub mod bits;
pub mod brand;
pub mod cache;
pub mod registers;
pub mod signature;
pub mod stash;
pub mod vendor;

pub use brand::BrandBuffer;
pub use cache::CacheObservations;
pub use registers::{leaf, Registers};
pub use signature::Signature;
pub use stash::{ApicWidths, BrandHints, MpSummary, Stash};
pub use vendor::{Hypervisor, Vendor};
