use crate::dimensions::buckets::bucket_health;
use crate::dimensions::progress::standing_slot;
use crate::types::{Dimension, DimensionMap, RecommendedCourse, SemesterContext};

/// Resolve one planned semester into its dimensions: `season`,
/// `semesterIndex`, `recCount`, `multiBucket`, `hasWarnings`, `standing`,
/// `bucketHealth`.
///
/// Three neutral placeholders (`progress="building"`, `remaining="chunk"`,
/// `inProgress="none"`) are always included so compound rules authored
/// against the progress vocabulary evaluate cleanly in a semester context.
/// Their literal values are load-bearing for rule precedence; do not change
/// them without re-checking the rule table.
pub fn resolve_semester_dimensions(ctx: &SemesterContext) -> DimensionMap {
    let semester = &ctx.semester;
    let recs = &semester.recommendations;

    let mut dims = DimensionMap::new();
    dims.insert(Dimension::Season, season_slot(&semester.target_semester));
    dims.insert(Dimension::SemesterIndex, semester_index_slot(ctx.index));
    dims.insert(Dimension::RecCount, rec_count_slot(recs.len()));
    dims.insert(Dimension::MultiBucket, multi_bucket_slot(recs));
    dims.insert(Dimension::HasWarnings, warnings_slot(recs));
    dims.insert(Dimension::Standing, standing_slot(&semester.standing_label));
    dims.insert(
        Dimension::BucketHealth,
        bucket_health(semester.current_progress.as_ref()),
    );

    dims.insert(Dimension::Progress, "building");
    dims.insert(Dimension::Remaining, "chunk");
    dims.insert(Dimension::InProgress, "none");
    dims
}

pub(crate) fn season_slot(term_label: &str) -> &'static str {
    let label = term_label.to_lowercase();
    if label.contains("summer") {
        "summer"
    } else if label.contains("spring") {
        "spring"
    } else {
        "fall"
    }
}

pub(crate) fn semester_index_slot(index: usize) -> &'static str {
    if index == 0 {
        "first"
    } else if index <= 5 {
        "middle"
    } else {
        "deep"
    }
}

pub(crate) fn rec_count_slot(count: usize) -> &'static str {
    if count == 0 {
        "empty"
    } else if count <= 2 {
        "light"
    } else if count <= 4 {
        "normal"
    } else {
        "heavy"
    }
}

/// How many recommendations double-count toward two or more buckets.
pub(crate) fn multi_bucket_slot(recs: &[RecommendedCourse]) -> &'static str {
    let multi = recs
        .iter()
        .filter(|rec| rec.fills_buckets.len() >= 2)
        .count();
    if multi >= 3 {
        "many"
    } else if multi >= 1 {
        "some"
    } else {
        "none"
    }
}

pub(crate) fn warnings_slot(recs: &[RecommendedCourse]) -> &'static str {
    let warned = recs
        .iter()
        .any(|rec| !rec.warning_text.is_empty() || !rec.soft_tags.is_empty());
    if warned {
        "warned"
    } else {
        "clean"
    }
}
