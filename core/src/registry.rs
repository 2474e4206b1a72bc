//! Scheme registry: immutable lookup from jurisdiction code to scheme.
//!
//! RULE: The registry is built once (built-in table or a JSON file)
//! and never mutated afterwards. Lookups of unknown codes return
//! `None`; callers decide whether to skip or report them.

use crate::{
    error::{ValidatorError, ValidatorResult},
    scheme::DepositProtectionScheme,
};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    schemes: Vec<DepositProtectionScheme>,
    index:   HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct SchemeRegistryFile {
    schemes: Vec<DepositProtectionScheme>,
}

impl SchemeRegistry {
    /// Build a registry, enforcing `limit > 0` and unique, non-empty codes.
    /// Registry order is the order of `schemes`.
    pub fn from_schemes(schemes: Vec<DepositProtectionScheme>) -> ValidatorResult<Self> {
        let mut index = HashMap::with_capacity(schemes.len());

        for (i, scheme) in schemes.iter().enumerate() {
            let code = &scheme.jurisdiction_code;
            if code.trim().is_empty() {
                return Err(ValidatorError::invalid_registry(format!(
                    "scheme #{i} has an empty jurisdiction code"
                )));
            }
            if !scheme.limit.is_finite() || scheme.limit <= 0.0 {
                return Err(ValidatorError::invalid_registry(format!(
                    "{code}: limit must be a positive amount, got {}",
                    scheme.limit
                )));
            }
            if index.insert(code.clone(), i).is_some() {
                return Err(ValidatorError::invalid_registry(format!(
                    "duplicate jurisdiction code {code}"
                )));
            }
        }

        Ok(Self { schemes, index })
    }

    /// Load `{ "schemes": [...] }` from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ValidatorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: SchemeRegistryFile = serde_json::from_str(&content)?;
        let registry = Self::from_schemes(file.schemes)?;
        log::info!(
            "registry: loaded {} schemes from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// The reference deposit-guarantee schemes.
    pub fn builtin() -> Self {
        let schemes = builtin_schemes();
        let index = schemes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.jurisdiction_code.clone(), i))
            .collect();
        Self { schemes, index }
    }

    /// Exact, case-sensitive lookup.
    pub fn get_scheme(&self, code: &str) -> Option<&DepositProtectionScheme> {
        self.index.get(code).map(|&i| &self.schemes[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Jurisdiction codes in registry order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(|s| s.jurisdiction_code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepositProtectionScheme> {
        self.schemes.iter()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// The scheme with the highest raw limit; the first one wins ties.
    pub fn highest_limit(&self) -> Option<&DepositProtectionScheme> {
        self.schemes
            .iter()
            .reduce(|best, s| if s.limit > best.limit { s } else { best })
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn scheme(
    code: &str,
    name: &str,
    scheme_name: &str,
    limit: f64,
    currency: &str,
    coverage_notes: &[&str],
    exclusions: &[&str],
    timeframe: &str,
) -> DepositProtectionScheme {
    DepositProtectionScheme {
        jurisdiction_code:       code.into(),
        jurisdiction_name:       name.into(),
        scheme_name:             scheme_name.into(),
        limit,
        currency:                currency.into(),
        per_depositor:           true,
        per_bank:                true,
        coverage_notes:          coverage_notes.iter().map(|s| s.to_string()).collect(),
        exclusions:              exclusions.iter().map(|s| s.to_string()).collect(),
        reimbursement_timeframe: timeframe.into(),
    }
}

fn builtin_schemes() -> Vec<DepositProtectionScheme> {
    vec![
        scheme(
            "DE",
            "Germany",
            "EdB (Entschädigungseinrichtung deutscher Banken)",
            100_000.0,
            "EUR",
            &[
                "Covers all deposits up to €100,000",
                "Additional temporary high balances up to €500,000",
                "Covers current accounts, savings accounts, and fixed deposits",
            ],
            &[
                "Deposits by financial institutions",
                "Deposits by governments",
                "Anonymous deposits",
                "Debt securities issued by the bank",
            ],
            "7 working days (20 days until 2024)",
        ),
        scheme(
            "GB",
            "United Kingdom",
            "FSCS (Financial Services Compensation Scheme)",
            85_000.0,
            "GBP",
            &[
                "Covers up to £85,000 per person per institution",
                "Temporary high balances up to £1 million for 6 months",
                "Joint accounts covered up to £170,000",
            ],
            &[
                "Deposits by credit institutions",
                "Deposits by investment firms",
                "Deposits by insurance companies",
                "Deposits by collective investment schemes",
            ],
            "7 working days (complex cases up to 15 days)",
        ),
        scheme(
            "US",
            "United States",
            "FDIC (Federal Deposit Insurance Corporation)",
            250_000.0,
            "USD",
            &[
                "Standard coverage of $250,000 per depositor, per bank",
                "Separate coverage for different ownership categories",
                "Joint accounts insured up to $250,000 per co-owner",
            ],
            &[
                "Stock investments",
                "Bond investments",
                "Mutual funds",
                "Crypto assets",
                "Contents of safe deposit boxes",
            ],
            "Within 2 business days of bank failure",
        ),
        scheme(
            "FR",
            "France",
            "FGDR (Fonds de Garantie des Dépôts et de Résolution)",
            100_000.0,
            "EUR",
            &[
                "Coverage up to €100,000 per depositor per bank",
                "Temporary high balances up to €500,000 for 3 months",
                "All types of deposits in euros and other currencies",
            ],
            &[
                "Financial institution deposits",
                "Insurance company deposits",
                "Pension fund deposits",
                "Deposits from public authorities",
            ],
            "7 working days (up to 20 days in exceptional cases)",
        ),
        scheme(
            "ES",
            "Spain",
            "FGD (Fondo de Garantía de Depósitos)",
            100_000.0,
            "EUR",
            &[
                "Guaranteed up to €100,000 per depositor per entity",
                "Securities guaranteed up to €100,000",
                "Covers deposits in any EU currency",
            ],
            &[
                "Deposits by credit institutions",
                "Deposits by investment services companies",
                "Government deposits",
                "Deposits linked to money laundering",
            ],
            "7 working days (maximum 20 working days)",
        ),
        scheme(
            "IT",
            "Italy",
            "FITD (Fondo Interbancario di Tutela dei Depositi)",
            100_000.0,
            "EUR",
            &[
                "Maximum coverage of €100,000 per depositor per bank",
                "Covers deposits in all EU currencies",
                "Joint accounts divided equally among holders",
            ],
            &[
                "Bearer deposits",
                "Banks and financial institutions deposits",
                "Insurance companies deposits",
                "Deposits arising from illegal transactions",
            ],
            "7 working days (extended to 20 in special circumstances)",
        ),
        scheme(
            "NL",
            "Netherlands",
            "DGS (Dutch Deposit Guarantee Scheme)",
            100_000.0,
            "EUR",
            &[
                "Guarantees up to €100,000 per account holder per bank",
                "Temporary coverage up to €500,000 for special life events",
                "Covers all deposit accounts including savings and current accounts",
            ],
            &[
                "Deposits from financial enterprises",
                "Deposits from governments",
                "Anonymous accounts",
                "Deposits related to criminal activities",
            ],
            "7 working days (15 days maximum)",
        ),
    ]
}
