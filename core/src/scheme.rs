//! Deposit-guarantee scheme reference data.
//!
//! One scheme per jurisdiction. Schemes are immutable once the
//! registry is built; nothing in the engine mutates them.

use crate::types::{Amount, CurrencyCode, JurisdictionCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositProtectionScheme {
    pub jurisdiction_code: JurisdictionCode,
    pub jurisdiction_name: String,
    pub scheme_name:       String,
    /// Protection ceiling per depositor per bank, in `currency`.
    pub limit:             Amount,
    pub currency:          CurrencyCode,
    #[serde(default = "default_true")]
    pub per_depositor:     bool,
    #[serde(default = "default_true")]
    pub per_bank:          bool,
    #[serde(default)]
    pub coverage_notes:    Vec<String>,
    #[serde(default)]
    pub exclusions:        Vec<String>,
    pub reimbursement_timeframe: String,
}

fn default_true() -> bool {
    true
}

impl DepositProtectionScheme {
    /// Short "Germany - EdB (...)" label used by selection lists.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.jurisdiction_name, self.scheme_name)
    }
}
