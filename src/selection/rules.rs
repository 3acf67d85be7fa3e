use crate::types::{Dimension, DimensionMap, RuleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOp {
    Equals,
    NotEquals,
}

/// One dimension constraint inside a compound rule.
#[derive(Debug, Clone)]
pub struct MatchPredicate {
    pub dimension: Dimension,
    pub op: MatchOp,
    pub value: &'static str,
}

impl MatchPredicate {
    /// `Equals` requires the dimension to be present with the expected
    /// value. `NotEquals` also holds when the dimension is absent, which is
    /// how progress-only rules stay evaluable against a semester context
    /// and vice versa.
    pub fn holds(&self, dims: &DimensionMap) -> bool {
        let actual = dims.get(self.dimension);
        match self.op {
            MatchOp::Equals => actual == Some(self.value),
            MatchOp::NotEquals => actual != Some(self.value),
        }
    }
}

/// A named conjunction of dimension constraints, tried before any
/// single-dimension lookup.
#[derive(Debug, Clone)]
pub struct CompoundRule {
    pub id: RuleId,
    pub priority: i32,
    pub predicates: Vec<MatchPredicate>,
}

impl CompoundRule {
    pub fn matches(&self, dims: &DimensionMap) -> bool {
        self.predicates.iter().all(|p| p.holds(dims))
    }
}

fn eq(dimension: Dimension, value: &'static str) -> MatchPredicate {
    MatchPredicate {
        dimension,
        op: MatchOp::Equals,
        value,
    }
}

fn ne(dimension: Dimension, value: &'static str) -> MatchPredicate {
    MatchPredicate {
        dimension,
        op: MatchOp::NotEquals,
        value,
    }
}

/// The shipped rule table, sorted descending by priority. Priorities are
/// distinct so the descending walk is a total order.
pub fn rule_table() -> Vec<CompoundRule> {
    let mut rules = vec![
        CompoundRule {
            id: RuleId::AllRequirementsDone,
            priority: 100,
            predicates: vec![
                eq(Dimension::Progress, "done"),
                eq(Dimension::BucketHealth, "allSatisfied"),
            ],
        },
        CompoundRule {
            id: RuleId::SummerBreak,
            priority: 90,
            predicates: vec![
                eq(Dimension::Season, "summer"),
                eq(Dimension::RecCount, "empty"),
            ],
        },
        CompoundRule {
            id: RuleId::FreshmanEarly,
            priority: 80,
            predicates: vec![
                eq(Dimension::Standing, "freshman"),
                eq(Dimension::Progress, "early"),
            ],
        },
        CompoundRule {
            id: RuleId::SeniorMountain,
            priority: 75,
            predicates: vec![
                eq(Dimension::Standing, "senior"),
                ne(Dimension::Progress, "done"),
                eq(Dimension::Remaining, "mountain"),
            ],
        },
        CompoundRule {
            id: RuleId::NearlyThere,
            priority: 70,
            predicates: vec![
                eq(Dimension::Progress, "nearDone"),
                ne(Dimension::Remaining, "zero"),
            ],
        },
        CompoundRule {
            id: RuleId::OverloadedSemester,
            priority: 60,
            predicates: vec![
                eq(Dimension::RecCount, "heavy"),
                eq(Dimension::HasWarnings, "warned"),
            ],
        },
        CompoundRule {
            id: RuleId::DeepSummer,
            priority: 55,
            predicates: vec![
                eq(Dimension::Season, "summer"),
                eq(Dimension::SemesterIndex, "deep"),
            ],
        },
        CompoundRule {
            id: RuleId::MidwayBalanced,
            priority: 50,
            predicates: vec![
                eq(Dimension::Progress, "midway"),
                eq(Dimension::BucketHealth, "halfDone"),
            ],
        },
    ];
    rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    rules
}
