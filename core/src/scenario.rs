//! Validation inputs.
//!
//! `ValidationScenario` is the engine's input. `ValidationRequest` is the
//! transport shape a calling layer deserializes (single or comparison
//! mode); it converts into a scenario with `TryFrom`.

use crate::{
    error::{ValidatorError, ValidatorResult},
    types::{Amount, JurisdictionCode},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationScenario {
    pub total_deposit_amount: Amount,
    /// The deposit is split evenly across this many banks in the
    /// same jurisdiction.
    pub number_of_banks:      u32,
    /// Joint accounts double the effective per-bank limit.
    pub is_joint_account:     bool,
    /// Evaluated in order; one code for single mode, many for comparison.
    pub jurisdiction_codes:   Vec<JurisdictionCode>,
}

impl ValidationScenario {
    /// Single-jurisdiction scenario.
    pub fn new(
        total_deposit_amount: Amount,
        jurisdiction_code: impl Into<JurisdictionCode>,
        number_of_banks: u32,
        is_joint_account: bool,
    ) -> Self {
        Self {
            total_deposit_amount,
            number_of_banks,
            is_joint_account,
            jurisdiction_codes: vec![jurisdiction_code.into()],
        }
    }

    /// Comparison-mode scenario across several jurisdictions.
    pub fn compare<I, S>(
        total_deposit_amount: Amount,
        jurisdiction_codes: I,
        number_of_banks: u32,
        is_joint_account: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<JurisdictionCode>,
    {
        Self {
            total_deposit_amount,
            number_of_banks,
            is_joint_account,
            jurisdiction_codes: jurisdiction_codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Reject inputs that would produce a misleading result.
    pub fn check(&self) -> ValidatorResult<()> {
        if self.number_of_banks < 1 {
            return Err(ValidatorError::invalid_input(
                "number_of_banks must be at least 1",
            ));
        }
        if !self.total_deposit_amount.is_finite() {
            return Err(ValidatorError::invalid_input(format!(
                "total_deposit_amount must be a finite number, got {}",
                self.total_deposit_amount
            )));
        }
        if self.total_deposit_amount < 0.0 {
            return Err(ValidatorError::invalid_input(format!(
                "total_deposit_amount must not be negative, got {}",
                self.total_deposit_amount
            )));
        }
        if self.jurisdiction_codes.is_empty() {
            return Err(ValidatorError::invalid_input(
                "at least one jurisdiction code is required",
            ));
        }
        Ok(())
    }

    /// Codes with duplicates removed, first occurrence kept.
    pub fn distinct_codes(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.jurisdiction_codes.len());
        for code in &self.jurisdiction_codes {
            if !seen.contains(&code.as_str()) {
                seen.push(code.as_str());
            }
        }
        seen
    }
}

/// Request as received from a calling layer (HTTP handler, IPC line, form).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub deposit_amount:   Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction:     Option<JurisdictionCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdictions:    Option<Vec<JurisdictionCode>>,
    pub number_of_banks:  i64,
    #[serde(default)]
    pub is_joint_account: bool,
}

impl TryFrom<ValidationRequest> for ValidationScenario {
    type Error = ValidatorError;

    fn try_from(req: ValidationRequest) -> ValidatorResult<Self> {
        let number_of_banks = u32::try_from(req.number_of_banks)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| {
                ValidatorError::invalid_input(format!(
                    "number_of_banks must be a positive integer, got {}",
                    req.number_of_banks
                ))
            })?;

        let jurisdiction_codes = match (req.jurisdiction, req.jurisdictions) {
            (Some(code), None) => vec![code],
            (None, Some(codes)) => codes,
            (Some(_), Some(_)) => {
                return Err(ValidatorError::invalid_input(
                    "specify either jurisdiction or jurisdictions, not both",
                ))
            }
            (None, None) => {
                return Err(ValidatorError::invalid_input(
                    "a jurisdiction or a list of jurisdictions is required",
                ))
            }
        };

        let scenario = ValidationScenario {
            total_deposit_amount: req.deposit_amount,
            number_of_banks,
            is_joint_account: req.is_joint_account,
            jurisdiction_codes,
        };
        scenario.check()?;
        Ok(scenario)
    }
}
