use serde::Deserialize;
use std::collections::BTreeMap;

/// Headline numbers from the upstream credit/progress computation.
///
/// Upstream serializes these in camelCase. Every field may be absent in a
/// partially populated payload, so everything defaults (numeric -> 0,
/// string -> "").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditKpiMetrics {
    pub completed_credits: f64,
    pub in_progress_credits: f64,
    pub remaining_credits: f64,
    pub standing_label: String,
    pub done_percent: f64,
}

/// Per-requirement-bucket progress. Credit-style buckets use `needed` /
/// `completed_done` / `in_progress_increment`; course-count-style buckets
/// use `needed_count` / `completed_courses` / `in_progress_courses`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BucketProgress {
    pub needed: f64,
    pub needed_count: u32,
    pub completed_done: f64,
    pub completed_courses: u32,
    pub in_progress_courses: u32,
    pub in_progress_increment: f64,
    pub done_count: u32,
    pub satisfied: bool,
}

/// Bucket id -> progress, as produced upstream. BTreeMap keeps iteration
/// order deterministic.
pub type BucketProgressMap = BTreeMap<String, BucketProgress>;

/// One recommended course inside a planned semester.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommendedCourse {
    pub fills_buckets: Vec<String>,
    pub warning_text: String,
    pub soft_tags: Vec<String>,
}

/// One planned semester as fetched from the recommendation backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SemesterData {
    pub target_semester: String,
    pub standing_label: String,
    pub recommendations: Vec<RecommendedCourse>,
    pub current_progress: Option<BucketProgressMap>,
}

/// Input to [`QuipEngine::progress_quip`](crate::selection::QuipEngine::progress_quip).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressContext {
    pub metrics: CreditKpiMetrics,
    pub current_progress: Option<BucketProgressMap>,
}

/// Input to [`QuipEngine::semester_quip`](crate::selection::QuipEngine::semester_quip).
///
/// `index` is the zero-based position of the semester in the plan.
/// `requested_count` is how many recommendations the caller asked the
/// backend for; it travels with the context but does not influence any
/// dimension.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SemesterContext {
    pub semester: SemesterData,
    pub index: usize,
    pub requested_count: usize,
}
