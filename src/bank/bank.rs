use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::types::{Dimension, ModalKind, RuleId};

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid weight {weight} for entry {index} in pool {pool}")]
    InvalidWeight {
        pool: String,
        index: usize,
        weight: f64,
    },
}

/// Which entry point a quip is authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuipTarget {
    Progress,
    Semester,
    Both,
}

impl QuipTarget {
    pub fn admits(self, kind: ModalKind) -> bool {
        match (self, kind) {
            (QuipTarget::Both, _) => true,
            (QuipTarget::Progress, ModalKind::Progress) => true,
            (QuipTarget::Semester, ModalKind::Semester) => true,
            _ => false,
        }
    }
}

/// One authored quip. Weight scales how many virtual slots the entry
/// occupies in the deterministic pick (1.0 -> 10 slots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuipEntry {
    pub text: String,
    pub weight: f64,
    pub target: QuipTarget,
}

/// The authored content bank, loaded once per process and read-only after.
///
/// `dimensions` is keyed dimension name -> slot value -> entries;
/// `compounds` is keyed by compound-rule id. An absent key or an empty list
/// means "no content here", never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBank {
    #[serde(default)]
    dimensions: BTreeMap<String, BTreeMap<String, Vec<QuipEntry>>>,
    #[serde(default)]
    compounds: BTreeMap<String, Vec<QuipEntry>>,
    #[serde(skip)]
    version: String,
}

impl ContentBank {
    /// Parse a bank from its raw JSON asset, stamping the content-hash
    /// version and validating entry weights.
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let mut bank: ContentBank = serde_json::from_str(raw)?;
        bank.version = content_version(raw.as_bytes());
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Content-hash of the raw asset bytes, `sha256:<hex>`. Stable for
    /// identical bytes; lets callers pin which content revision answered.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dimension_pool(&self, dimension: Dimension, slot: &str) -> &[QuipEntry] {
        self.dimensions
            .get(dimension.as_str())
            .and_then(|slots| slots.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn compound_pool(&self, id: RuleId) -> &[QuipEntry] {
        self.compounds
            .get(id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weights must be positive and finite; zero or negative weights would
    /// silently distort every pick downstream, so they are rejected at the
    /// only fallible surface.
    fn validate(&self) -> Result<(), BankError> {
        for (dimension, slots) in &self.dimensions {
            for (slot, entries) in slots {
                check_weights(&format!("{dimension}/{slot}"), entries)?;
            }
        }
        for (rule_id, entries) in &self.compounds {
            check_weights(rule_id, entries)?;
        }
        Ok(())
    }
}

fn check_weights(pool: &str, entries: &[QuipEntry]) -> Result<(), BankError> {
    for (index, entry) in entries.iter().enumerate() {
        if !(entry.weight.is_finite() && entry.weight > 0.0) {
            return Err(BankError::InvalidWeight {
                pool: pool.to_string(),
                index,
                weight: entry.weight,
            });
        }
    }
    Ok(())
}

fn content_version(raw: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    let hash = hasher.finalize();
    format!("sha256:{}", hex::encode(hash))
}
