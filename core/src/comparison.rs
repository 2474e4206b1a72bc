//! Comparison-mode summary over a set of validation results.
//!
//! Amounts are compared as raw numbers across currencies, the same
//! simplification the advisory thresholds use.

use crate::{
    types::{Amount, JurisdictionCode},
    validator::ValidationResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Jurisdiction with the highest protected amount; first wins ties.
    pub best_protection_code:  JurisdictionCode,
    pub best_protection_name:  String,
    pub max_protected_amount:  Amount,
    pub fully_protected_count: usize,
    pub evaluated_count:       usize,
}

impl ComparisonSummary {
    /// `None` when there is nothing to compare.
    pub fn from_results(results: &[ValidationResult]) -> Option<Self> {
        let best = results
            .iter()
            .reduce(|best, r| if r.protected_amount > best.protected_amount { r } else { best })?;

        Some(Self {
            best_protection_code:  best.jurisdiction_code.clone(),
            best_protection_name:  best.scheme.jurisdiction_name.clone(),
            max_protected_amount:  best.protected_amount,
            fully_protected_count: results.iter().filter(|r| r.is_fully_protected).count(),
            evaluated_count:       results.len(),
        })
    }

    pub fn all_fully_protected(&self) -> bool {
        self.fully_protected_count == self.evaluated_count
    }
}
