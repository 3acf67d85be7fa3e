use crate::types::{BucketProgress, BucketProgressMap};

/// Classify overall requirement-bucket health.
///
/// Only buckets that actually need something (positive `needed` credits or
/// a positive `needed_count`) are tracked; with no map or no tracked
/// buckets the student is simply early days.
///
/// ratio = satisfied / tracked:
/// >= 1.0  -> allSatisfied
/// > 0.75  -> mostDone
/// >= 0.4  -> halfDone
/// else    -> earlyDays
pub fn bucket_health(progress: Option<&BucketProgressMap>) -> &'static str {
    let Some(map) = progress else {
        return "earlyDays";
    };

    let tracked: Vec<&BucketProgress> = map
        .values()
        .filter(|bucket| bucket.needed > 0.0 || bucket.needed_count > 0)
        .collect();

    if tracked.is_empty() {
        return "earlyDays";
    }

    let satisfied = tracked
        .iter()
        .filter(|bucket| bucket_satisfied(bucket))
        .count();
    let ratio = satisfied as f64 / tracked.len() as f64;

    if ratio >= 1.0 {
        "allSatisfied"
    } else if ratio > 0.75 {
        "mostDone"
    } else if ratio >= 0.4 {
        "halfDone"
    } else {
        "earlyDays"
    }
}

/// A bucket counts as satisfied on an explicit flag, or when completed plus
/// in-progress work reaches what the bucket needs (course counts for
/// count-style buckets, credits for credit-style buckets).
fn bucket_satisfied(bucket: &BucketProgress) -> bool {
    if bucket.satisfied {
        return true;
    }
    if bucket.needed_count > 0
        && bucket.completed_courses + bucket.in_progress_courses >= bucket.needed_count
    {
        return true;
    }
    bucket.needed > 0.0 && bucket.completed_done + bucket.in_progress_increment >= bucket.needed
}
