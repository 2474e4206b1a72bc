//! Protection validator: evaluates a scenario against one or more
//! deposit-guarantee schemes.
//!
//! EVALUATION ORDER (per jurisdiction code, in input order):
//!   1. Resolve the scheme; unknown codes are skipped, not errors.
//!   2. Compute coverage (effective limit, per-bank split).
//!   3. Derive protected / unprotected totals.
//!   4. Run the advisory rule list, unless the deposit is zero.
//!
//! RULES:
//!   - Pure and synchronous: no I/O, no clock, no randomness.
//!   - Jurisdictions are evaluated independently of each other.
//!   - Identical scenarios produce identical results.

use crate::{
    config::ValidatorConfig,
    error::ValidatorResult,
    registry::SchemeRegistry,
    rules::{default_rules, Advisory, AdvisoryRule, Coverage, RuleContext},
    scenario::ValidationScenario,
    scheme::DepositProtectionScheme,
    types::{Amount, JurisdictionCode},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub jurisdiction_code:    JurisdictionCode,
    pub scheme:               DepositProtectionScheme,
    pub protected_amount:     Amount,
    pub unprotected_amount:   Amount,
    pub is_fully_protected:   bool,
    pub effective_limit:      Amount,
    pub amount_per_bank:      Amount,
    pub unprotected_per_bank: Amount,
    /// Banks required for full cover; `None` when already fully protected
    /// or when the count is too large to represent.
    pub banks_needed:         Option<u64>,
    pub warnings:             Vec<String>,
    pub recommendations:      Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    Full,    // 100 %
    Partial, // >= 80 %
    Low,
}

impl ValidationResult {
    /// Share of the deposit that is protected, 0..=100.
    /// A zero deposit reports 0.
    pub fn protection_percentage(&self) -> f64 {
        let total = self.protected_amount + self.unprotected_amount;
        if total > 0.0 {
            self.protected_amount / total * 100.0
        } else {
            0.0
        }
    }

    pub fn coverage_level(&self) -> CoverageLevel {
        if self.is_fully_protected {
            return CoverageLevel::Full;
        }
        if self.protection_percentage() >= 80.0 {
            CoverageLevel::Partial
        } else {
            CoverageLevel::Low
        }
    }
}

pub struct ProtectionValidator<'r> {
    registry: &'r SchemeRegistry,
    config:   ValidatorConfig,
    rules:    Vec<Box<dyn AdvisoryRule>>,
}

impl<'r> ProtectionValidator<'r> {
    /// Validator with the standard advisory rule list.
    pub fn new(registry: &'r SchemeRegistry, config: ValidatorConfig) -> Self {
        Self {
            registry,
            config,
            rules: default_rules(),
        }
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: Box<dyn AdvisoryRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn registry(&self) -> &SchemeRegistry {
        self.registry
    }

    /// One result per resolvable jurisdiction code, in input order.
    /// Fails only on invalid input; unknown codes are skipped.
    pub fn validate(
        &self,
        scenario: &ValidationScenario,
    ) -> ValidatorResult<Vec<ValidationResult>> {
        scenario.check()?;

        let mut results = Vec::with_capacity(scenario.jurisdiction_codes.len());
        for code in scenario.distinct_codes() {
            let Some(scheme) = self.registry.get_scheme(code) else {
                log::warn!("validator: unknown jurisdiction {code:?} skipped");
                continue;
            };
            results.push(self.evaluate(scenario, scheme));
        }

        Ok(results)
    }

    fn evaluate(
        &self,
        scenario: &ValidationScenario,
        scheme: &DepositProtectionScheme,
    ) -> ValidationResult {
        let coverage = Coverage::compute(scenario, scheme, self.config.joint_account_multiplier);
        let banks = f64::from(scenario.number_of_banks);
        let protected_amount = coverage.protected_per_bank * banks;
        let unprotected_amount = coverage.unprotected_per_bank * banks;
        let is_fully_protected = unprotected_amount == 0.0;

        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();

        // Nothing to protect, nothing to advise.
        if scenario.total_deposit_amount > 0.0 {
            let ctx = RuleContext {
                scenario,
                scheme,
                coverage: &coverage,
                config: &self.config,
                registry: self.registry,
            };
            for rule in &self.rules {
                for advisory in rule.evaluate(&ctx) {
                    log::trace!(
                        "validator: {} rule {} -> {advisory:?}",
                        scheme.jurisdiction_code,
                        rule.name()
                    );
                    match advisory {
                        Advisory::Warning(w) => warnings.push(w),
                        Advisory::Recommendation(r) => recommendations.push(r),
                    }
                }
            }
        }

        let banks_needed = if is_fully_protected {
            None
        } else {
            coverage.banks_needed(scenario.total_deposit_amount)
        };

        log::debug!(
            "validator: {} protected={:.2} unprotected={:.2} warnings={} recommendations={}",
            scheme.jurisdiction_code,
            protected_amount,
            unprotected_amount,
            warnings.len(),
            recommendations.len()
        );

        ValidationResult {
            jurisdiction_code: scheme.jurisdiction_code.clone(),
            scheme: scheme.clone(),
            protected_amount,
            unprotected_amount,
            is_fully_protected,
            effective_limit: coverage.effective_limit,
            amount_per_bank: coverage.amount_per_bank,
            unprotected_per_bank: coverage.unprotected_per_bank,
            banks_needed,
            warnings,
            recommendations,
        }
    }
}
