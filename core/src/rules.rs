//! Advisory rules: warnings and recommendations attached to a result.
//!
//! RULE: Rules are evaluated in list order against an already-computed
//! coverage. A rule never changes the protected/unprotected figures; it
//! only appends advisories. Order within each category (warnings,
//! recommendations) is the order of the rule list.

use crate::{
    config::ValidatorConfig,
    money::format_currency,
    registry::SchemeRegistry,
    scenario::ValidationScenario,
    scheme::DepositProtectionScheme,
    types::Amount,
};

/// Per-jurisdiction coverage figures the rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub effective_limit:      Amount,
    pub amount_per_bank:      Amount,
    pub protected_per_bank:   Amount,
    pub unprotected_per_bank: Amount,
}

impl Coverage {
    pub fn compute(
        scenario: &ValidationScenario,
        scheme: &DepositProtectionScheme,
        joint_multiplier: f64,
    ) -> Self {
        let effective_limit = if scenario.is_joint_account {
            scheme.limit * joint_multiplier
        } else {
            scheme.limit
        };
        let amount_per_bank = scenario.total_deposit_amount / f64::from(scenario.number_of_banks);

        Self {
            effective_limit,
            amount_per_bank,
            protected_per_bank:   amount_per_bank.min(effective_limit),
            unprotected_per_bank: (amount_per_bank - effective_limit).max(0.0),
        }
    }

    /// Banks needed so that no share exceeds the effective limit.
    /// `None` when the count does not fit in a `u64`.
    pub fn banks_needed(&self, total_deposit_amount: Amount) -> Option<u64> {
        let needed = (total_deposit_amount / self.effective_limit).ceil();
        // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive.
        if needed.is_finite() && needed >= 0.0 && needed < u64::MAX as f64 {
            Some(needed as u64)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Warning(String),
    Recommendation(String),
}

pub struct RuleContext<'a> {
    pub scenario: &'a ValidationScenario,
    pub scheme:   &'a DepositProtectionScheme,
    pub coverage: &'a Coverage,
    pub config:   &'a ValidatorConfig,
    pub registry: &'a SchemeRegistry,
}

/// The contract every advisory rule fulfils.
pub trait AdvisoryRule: Send + Sync {
    /// Unique stable name, used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory>;
}

/// The standard rule list, in evaluation order.
pub fn default_rules() -> Vec<Box<dyn AdvisoryRule>> {
    vec![
        // Warnings
        Box::new(UncoveredPerBank),
        Box::new(SingleBankConcentration),
        Box::new(JurisdictionNotices),
        // Recommendations
        Box::new(SplitForFullCover),
        Box::new(HigherLimitJurisdiction),
        Box::new(JointHolderRegistration),
        Box::new(TemporaryHighBalance),
    ]
}

pub struct UncoveredPerBank;

impl AdvisoryRule for UncoveredPerBank {
    fn name(&self) -> &'static str { "uncovered_per_bank" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        if ctx.coverage.unprotected_per_bank <= 0.0 {
            return Vec::new();
        }
        vec![Advisory::Warning(format!(
            "{} exceeds protection limit per bank",
            format_currency(ctx.coverage.unprotected_per_bank, &ctx.scheme.currency)
        ))]
    }
}

pub struct SingleBankConcentration;

impl AdvisoryRule for SingleBankConcentration {
    fn name(&self) -> &'static str { "single_bank_concentration" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        if ctx.scenario.number_of_banks == 1 && ctx.scenario.total_deposit_amount > ctx.scheme.limit {
            vec![Advisory::Warning(
                "Consider splitting deposits across multiple banks".into(),
            )]
        } else {
            Vec::new()
        }
    }
}

pub struct JurisdictionNotices;

impl AdvisoryRule for JurisdictionNotices {
    fn name(&self) -> &'static str { "jurisdiction_notice" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        ctx.config
            .notices_for(&ctx.scheme.jurisdiction_code)
            .map(|msg| Advisory::Warning(msg.to_string()))
            .collect()
    }
}

pub struct SplitForFullCover;

impl AdvisoryRule for SplitForFullCover {
    fn name(&self) -> &'static str { "split_for_full_cover" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        if ctx.coverage.unprotected_per_bank <= 0.0 {
            return Vec::new();
        }
        let Some(banks) = ctx.coverage.banks_needed(ctx.scenario.total_deposit_amount) else {
            return Vec::new();
        };
        vec![Advisory::Recommendation(format!(
            "Split deposits across {banks} banks for full protection"
        ))]
    }
}

/// Raw-number comparison: the threshold and the scheme limit are not
/// converted to a common currency.
pub struct HigherLimitJurisdiction;

impl AdvisoryRule for HigherLimitJurisdiction {
    fn name(&self) -> &'static str { "higher_limit_jurisdiction" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        let threshold = ctx.config.high_balance_threshold;
        if ctx.scenario.total_deposit_amount <= threshold || ctx.scheme.limit >= threshold {
            return Vec::new();
        }
        let msg = match ctx.registry.highest_limit() {
            Some(best) if best.limit > ctx.scheme.limit => format!(
                "Consider {} banks for higher protection limits ({})",
                best.jurisdiction_name,
                format_currency(best.limit, &best.currency)
            ),
            _ => "Consider a jurisdiction with a higher protection limit".to_string(),
        };
        vec![Advisory::Recommendation(msg)]
    }
}

pub struct JointHolderRegistration;

impl AdvisoryRule for JointHolderRegistration {
    fn name(&self) -> &'static str { "joint_holder_registration" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        if ctx.scenario.is_joint_account {
            vec![Advisory::Recommendation(
                "Ensure all account holders are properly registered".into(),
            )]
        } else {
            Vec::new()
        }
    }
}

pub struct TemporaryHighBalance;

impl AdvisoryRule for TemporaryHighBalance {
    fn name(&self) -> &'static str { "temporary_high_balance" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        let total = ctx.scenario.total_deposit_amount;
        if total > ctx.scheme.limit && total <= ctx.config.temporary_high_balance_ceiling {
            vec![Advisory::Recommendation(
                "May qualify for temporary high balance protection (property sale, inheritance, etc.)"
                    .into(),
            )]
        } else {
            Vec::new()
        }
    }
}
