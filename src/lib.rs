//! Deterministic contextual flavor-text ("quip") selection.
//!
//! `quip-core` resolves a student's degree-progress snapshot (or one
//! planned semester) into a small set of categorical dimensions, hashes the
//! canonical dimension signature, and walks a prioritized fallback chain —
//! compound rules, then single-dimension lookups, then a fixed floor — to
//! pick one short string from a hand-authored content bank. All selection
//! is deterministic: identical inputs always produce identical output, with
//! no clock, RNG, or I/O in the call path.

pub mod bank;
pub mod dimensions;
pub mod selection;
pub mod types;
