use crate::dimensions::buckets::bucket_health;
use crate::types::{Dimension, DimensionMap, ProgressContext};

/// Resolve a whole-degree progress snapshot into its five dimensions:
/// `standing`, `progress`, `remaining`, `inProgress`, `bucketHealth`.
pub fn resolve_progress_dimensions(ctx: &ProgressContext) -> DimensionMap {
    let metrics = &ctx.metrics;

    let mut dims = DimensionMap::new();
    dims.insert(Dimension::Standing, standing_slot(&metrics.standing_label));
    dims.insert(Dimension::Progress, progress_slot(metrics.done_percent));
    dims.insert(
        Dimension::Remaining,
        remaining_slot(metrics.remaining_credits),
    );
    dims.insert(
        Dimension::InProgress,
        in_progress_slot(metrics.in_progress_credits),
    );
    dims.insert(
        Dimension::BucketHealth,
        bucket_health(ctx.current_progress.as_ref()),
    );
    dims
}

/// Case-insensitive substring match on the display label; anything
/// unrecognized is a freshman.
pub(crate) fn standing_slot(label: &str) -> &'static str {
    let label = label.to_lowercase();
    if label.contains("senior") {
        "senior"
    } else if label.contains("junior") {
        "junior"
    } else if label.contains("sophomore") {
        "sophomore"
    } else {
        "freshman"
    }
}

pub(crate) fn progress_slot(done_percent: f64) -> &'static str {
    if done_percent >= 100.0 {
        "done"
    } else if done_percent >= 86.0 {
        "nearDone"
    } else if done_percent >= 66.0 {
        "homestretch"
    } else if done_percent >= 41.0 {
        "midway"
    } else if done_percent >= 16.0 {
        "building"
    } else {
        "early"
    }
}

pub(crate) fn remaining_slot(remaining_credits: f64) -> &'static str {
    if remaining_credits <= 0.0 {
        "zero"
    } else if remaining_credits < 25.0 {
        "handful"
    } else if remaining_credits < 50.0 {
        "manageable"
    } else if remaining_credits <= 80.0 {
        "chunk"
    } else {
        "mountain"
    }
}

pub(crate) fn in_progress_slot(in_progress_credits: f64) -> &'static str {
    if in_progress_credits <= 0.0 {
        "none"
    } else if in_progress_credits < 10.0 {
        "light"
    } else if in_progress_credits < 19.0 {
        "moderate"
    } else {
        "heavy"
    }
}
