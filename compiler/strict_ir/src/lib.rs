//! Strict IR - identifiers shared across the strict-modules analyzer.
//!
//! Attribute names, type names and module-level bindings are interned once
//! and passed around as [`Name`], a 32-bit `Copy` handle. Looking a name back
//! up goes through [`StringLookup`] so that object-model code never depends
//! on the concrete interner.

mod interner;
mod name;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
