pub mod rules;
pub mod signature;
pub mod weighting;

use crate::bank::{ContentBank, QuipEntry};
use crate::dimensions::{resolve_progress_dimensions, resolve_semester_dimensions};
use crate::types::{Dimension, DimensionMap, ModalKind, ProgressContext, SemesterContext};

pub use rules::{rule_table, CompoundRule, MatchOp, MatchPredicate};
pub use signature::{djb2, signature};
pub use weighting::weighted_pick;

/// Returned when every pool in the fallback chain comes up empty. Selection
/// is total; this is the floor, not an error.
pub const FALLBACK_QUIP: &str = "We move.";

/// Single-dimension lookup order when no compound rule answers. Editorial:
/// overall progress is the most tone-relevant axis, then standing, then the
/// seasonal/semester axes.
const DIMENSION_PRIORITY: [Dimension; 10] = [
    Dimension::Progress,
    Dimension::Standing,
    Dimension::Season,
    Dimension::Remaining,
    Dimension::RecCount,
    Dimension::InProgress,
    Dimension::BucketHealth,
    Dimension::SemesterIndex,
    Dimension::MultiBucket,
    Dimension::HasWarnings,
];

/// The selection engine: an immutable content bank plus the rule table,
/// sorted once at construction. Shareable across threads behind `&`.
pub struct QuipEngine {
    bank: ContentBank,
    rules: Vec<CompoundRule>,
}

impl QuipEngine {
    pub fn new(bank: ContentBank) -> Self {
        QuipEngine {
            bank,
            rules: rules::rule_table(),
        }
    }

    pub fn bank(&self) -> &ContentBank {
        &self.bank
    }

    /// One quip for a whole-degree progress snapshot.
    pub fn progress_quip(&self, ctx: &ProgressContext) -> String {
        let dims = resolve_progress_dimensions(ctx);
        self.select(&dims, ModalKind::Progress)
    }

    /// One quip for a single planned semester.
    pub fn semester_quip(&self, ctx: &SemesterContext) -> String {
        let dims = resolve_semester_dimensions(ctx);
        self.select(&dims, ModalKind::Semester)
    }

    /// The fallback chain. Total: always returns a non-empty string.
    pub fn select(&self, dims: &DimensionMap, kind: ModalKind) -> String {
        // 1. One hash per call, reused for whichever pool answers.
        let hash = signature::djb2(&signature::signature(dims));

        // 2. Compound rules, descending priority. First matching rule with
        // a usable pool wins outright; an empty pool is not a match
        // failure, so the scan continues.
        for rule in &self.rules {
            if !rule.matches(dims) {
                continue;
            }
            let pool = filter_target(self.bank.compound_pool(rule.id), kind);
            if !pool.is_empty() {
                return weighting::weighted_pick(&pool, hash).text.clone();
            }
        }

        // 3. Single-dimension lookups in editorial priority order.
        for dimension in DIMENSION_PRIORITY {
            let Some(slot) = dims.get(dimension) else {
                continue;
            };
            if slot.is_empty() {
                continue;
            }
            let pool = filter_target(self.bank.dimension_pool(dimension, slot), kind);
            if !pool.is_empty() {
                return weighting::weighted_pick(&pool, hash).text.clone();
            }
        }

        // 4. The floor.
        FALLBACK_QUIP.to_string()
    }
}

fn filter_target(pool: &[QuipEntry], kind: ModalKind) -> Vec<&QuipEntry> {
    pool.iter().filter(|entry| entry.target.admits(kind)).collect()
}
