use std::collections::BTreeMap;

/// Closed set of categorical axes a context resolves into.
///
/// Each dimension has a canonical camelCase wire name used both in the
/// selection signature and as a key into the content bank, so a typo'd
/// dimension is a compile error rather than a silently empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Standing,
    Progress,
    Remaining,
    InProgress,
    Season,
    SemesterIndex,
    RecCount,
    MultiBucket,
    HasWarnings,
    BucketHealth,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Standing => "standing",
            Dimension::Progress => "progress",
            Dimension::Remaining => "remaining",
            Dimension::InProgress => "inProgress",
            Dimension::Season => "season",
            Dimension::SemesterIndex => "semesterIndex",
            Dimension::RecCount => "recCount",
            Dimension::MultiBucket => "multiBucket",
            Dimension::HasWarnings => "hasWarnings",
            Dimension::BucketHealth => "bucketHealth",
        }
    }
}

/// Closed set of compound-rule identifiers.
///
/// The content bank's `compounds` section is keyed by these wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    AllRequirementsDone,
    SummerBreak,
    FreshmanEarly,
    SeniorMountain,
    NearlyThere,
    OverloadedSemester,
    DeepSummer,
    MidwayBalanced,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::AllRequirementsDone => "allRequirementsDone",
            RuleId::SummerBreak => "summerBreak",
            RuleId::FreshmanEarly => "freshmanEarly",
            RuleId::SeniorMountain => "seniorMountain",
            RuleId::NearlyThere => "nearlyThere",
            RuleId::OverloadedSemester => "overloadedSemester",
            RuleId::DeepSummer => "deepSummer",
            RuleId::MidwayBalanced => "midwayBalanced",
        }
    }
}

/// Which entry point produced the context being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Progress,
    Semester,
}

/// Resolved dimensions for one call: dimension -> slot value.
///
/// Keys are fixed per context type; resolvers always produce a value for
/// each of their keys, defaulting to a neutral slot when data is absent.
/// Slot values come from closed per-dimension vocabularies and are always
/// `'static`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionMap {
    inner: BTreeMap<Dimension, &'static str>,
}

impl DimensionMap {
    pub fn new() -> Self {
        DimensionMap {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, dimension: Dimension, slot: &'static str) {
        self.inner.insert(dimension, slot);
    }

    pub fn get(&self, dimension: Dimension) -> Option<&'static str> {
        self.inner.get(&dimension).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &'static str)> + '_ {
        self.inner.iter().map(|(d, slot)| (*d, *slot))
    }
}
