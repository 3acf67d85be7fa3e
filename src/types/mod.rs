pub mod inputs;
pub mod vocab;

pub use inputs::{
    BucketProgress, BucketProgressMap, CreditKpiMetrics, ProgressContext, RecommendedCourse,
    SemesterContext, SemesterData,
};
pub use vocab::{Dimension, DimensionMap, ModalKind, RuleId};
