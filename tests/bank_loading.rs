use std::fs;

use quip_core::bank::{BankError, ContentBank};
use quip_core::types::{Dimension, RuleId};
use tempfile::tempdir;

const GOOD_BANK: &str = r#"{
  "dimensions": {
    "progress": {
      "early": [
        { "text": "Step one of many. Welcome aboard.", "weight": 1.0, "target": "both" },
        { "text": "Blank canvas. Intimidating, sure, but yours.", "weight": 0.5, "target": "progress" }
      ]
    },
    "season": {
      "summer": [
        { "text": "Summer session: speedrun mode.", "weight": 1.0, "target": "semester" }
      ]
    }
  },
  "compounds": {
    "summerBreak": [
      { "text": "Summer: officially yours.", "weight": 2.0, "target": "semester" }
    ]
  }
}"#;

#[test]
fn parses_and_exposes_pools() {
    let bank = ContentBank::from_json_str(GOOD_BANK).unwrap();

    let early = bank.dimension_pool(Dimension::Progress, "early");
    assert_eq!(early.len(), 2);
    assert_eq!(early[0].text, "Step one of many. Welcome aboard.");

    let summer = bank.compound_pool(RuleId::SummerBreak);
    assert_eq!(summer.len(), 1);
    assert!((summer[0].weight - 2.0).abs() < f64::EPSILON);

    // Absent keys are empty pools, not errors.
    assert!(bank.dimension_pool(Dimension::Progress, "done").is_empty());
    assert!(bank.dimension_pool(Dimension::HasWarnings, "warned").is_empty());
    assert!(bank.compound_pool(RuleId::FreshmanEarly).is_empty());
}

#[test]
fn empty_object_is_a_valid_empty_bank() {
    let bank = ContentBank::from_json_str("{}").unwrap();
    assert!(bank.dimension_pool(Dimension::Progress, "early").is_empty());
    assert!(bank.compound_pool(RuleId::AllRequirementsDone).is_empty());
}

#[test]
fn rejects_zero_weight_with_location() {
    let bad = r#"{
      "dimensions": {
        "progress": {
          "early": [
            { "text": "fine", "weight": 1.0, "target": "both" },
            { "text": "weightless", "weight": 0.0, "target": "both" }
          ]
        }
      }
    }"#;
    let err = ContentBank::from_json_str(bad).unwrap_err();
    match err {
        BankError::InvalidWeight { ref pool, index, weight } => {
            assert_eq!(pool, "progress/early");
            assert_eq!(index, 1);
            assert_eq!(weight, 0.0);
        }
        other => panic!("expected InvalidWeight, got {other:?}"),
    }
}

#[test]
fn rejects_negative_weight_in_compounds() {
    let bad = r#"{
      "compounds": {
        "summerBreak": [
          { "text": "nope", "weight": -0.5, "target": "semester" }
        ]
      }
    }"#;
    let err = ContentBank::from_json_str(bad).unwrap_err();
    assert!(
        matches!(err, BankError::InvalidWeight { index: 0, .. }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("summerBreak"));
}

#[test]
fn rejects_unknown_target_tag() {
    let bad = r#"{
      "dimensions": {
        "progress": {
          "early": [
            { "text": "who is this for", "weight": 1.0, "target": "everyone" }
          ]
        }
      }
    }"#;
    let err = ContentBank::from_json_str(bad).unwrap_err();
    assert!(matches!(err, BankError::Parse(_)), "got {err:?}");
}

#[test]
fn loads_from_file_with_stable_content_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.json");
    fs::write(&path, GOOD_BANK).unwrap();

    let from_file = ContentBank::from_path(&path).unwrap();
    let from_str = ContentBank::from_json_str(GOOD_BANK).unwrap();

    assert!(from_file.version().starts_with("sha256:"));
    assert_eq!(from_file.version(), from_str.version());

    // Any content edit moves the version.
    let edited = GOOD_BANK.replace("speedrun", "marathon");
    let reloaded = ContentBank::from_json_str(&edited).unwrap();
    assert_ne!(from_file.version(), reloaded.version());
}
