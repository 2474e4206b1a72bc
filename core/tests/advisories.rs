use depguard_core::{
    config::JurisdictionNotice,
    rules::{Advisory, AdvisoryRule, RuleContext},
    ProtectionValidator, SchemeRegistry, ValidationResult, ValidationScenario, ValidatorConfig,
};

fn run(amount: f64, code: &str, banks: u32, joint: bool) -> ValidationResult {
    let registry = SchemeRegistry::builtin();
    let validator = ProtectionValidator::new(&registry, ValidatorConfig::default());
    validator
        .validate(&ValidationScenario::new(amount, code, banks, joint))
        .unwrap()
        .remove(0)
}

#[test]
fn gb_carries_exchange_rate_notice_after_core_warnings() {
    let r = run(100_000.0, "GB", 1, false);

    assert_eq!(
        r.warnings,
        vec![
            "£15,000 exceeds protection limit per bank".to_string(),
            "Consider splitting deposits across multiple banks".to_string(),
            "GBP protection limit may vary with exchange rates".to_string(),
        ]
    );
}

#[test]
fn gb_notice_applies_even_when_fully_protected() {
    let r = run(50_000.0, "GB", 1, false);
    assert!(r.is_fully_protected);
    assert_eq!(r.warnings, vec!["GBP protection limit may vary with exchange rates".to_string()]);
}

#[test]
fn large_deposit_in_lower_limit_scheme_points_to_highest_limit() {
    let r = run(300_000.0, "DE", 3, false);

    assert!(
        r.recommendations
            .contains(&"Consider United States banks for higher protection limits ($250,000)".to_string()),
        "recommendations: {:?}",
        r.recommendations
    );
}

#[test]
fn high_balance_threshold_is_exclusive() {
    let r = run(250_000.0, "DE", 3, false);
    assert!(!r.recommendations.iter().any(|rec| rec.contains("higher protection limits")));
}

#[test]
fn scheme_at_threshold_gets_no_higher_limit_advice() {
    let r = run(300_000.0, "US", 1, false);

    assert!(!r.recommendations.iter().any(|rec| rec.contains("higher protection limits")));
    assert_eq!(
        r.recommendations,
        vec![
            "Split deposits across 2 banks for full protection".to_string(),
            "May qualify for temporary high balance protection (property sale, inheritance, etc.)"
                .to_string(),
        ]
    );
}

#[test]
fn temporary_high_balance_window_is_inclusive_at_ceiling() {
    let at_ceiling = run(500_000.0, "DE", 1, false);
    assert!(at_ceiling
        .recommendations
        .iter()
        .any(|rec| rec.contains("temporary high balance")));

    let above_ceiling = run(500_001.0, "DE", 1, false);
    assert!(!above_ceiling
        .recommendations
        .iter()
        .any(|rec| rec.contains("temporary high balance")));

    // At the limit itself there is nothing to extend.
    let at_limit = run(100_000.0, "DE", 1, false);
    assert!(at_limit.recommendations.is_empty());
}

#[test]
fn recommendations_follow_rule_order() {
    // Uncovered, above 250k, joint, within 500k window: every rule fires.
    let r = run(450_000.0, "FR", 1, true);

    assert_eq!(
        r.recommendations,
        vec![
            "Split deposits across 3 banks for full protection".to_string(),
            "Consider United States banks for higher protection limits ($250,000)".to_string(),
            "Ensure all account holders are properly registered".to_string(),
            "May qualify for temporary high balance protection (property sale, inheritance, etc.)"
                .to_string(),
        ]
    );
}

#[test]
fn split_count_uses_the_effective_limit() {
    // Joint FR limit is 200k; 450k needs 3 banks, single would need 5.
    let joint = run(450_000.0, "FR", 1, true);
    assert_eq!(joint.banks_needed, Some(3));

    let single = run(450_000.0, "FR", 1, false);
    assert_eq!(single.banks_needed, Some(5));
}

#[test]
fn configured_notices_replace_builtin_ones() {
    let registry = SchemeRegistry::builtin();
    let config = ValidatorConfig {
        jurisdiction_notices: vec![
            JurisdictionNotice {
                jurisdiction_code: "NL".into(),
                message: "Check DNB register".into(),
            },
            JurisdictionNotice {
                jurisdiction_code: "NL".into(),
                message: "Second notice".into(),
            },
        ],
        ..ValidatorConfig::default()
    };
    let validator = ProtectionValidator::new(&registry, config);

    let results = validator
        .validate(&ValidationScenario::compare(10_000.0, ["NL", "GB"], 1, false))
        .unwrap();
    assert_eq!(results[0].warnings, vec!["Check DNB register", "Second notice"]);
    assert!(results[1].warnings.is_empty());
}

struct SanctionsCheck;

impl AdvisoryRule for SanctionsCheck {
    fn name(&self) -> &'static str { "sanctions_check" }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Advisory> {
        if ctx.scheme.currency == "USD" {
            vec![Advisory::Recommendation("Run OFAC screening".into())]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn custom_rules_run_after_builtin_rules() {
    let registry = SchemeRegistry::builtin();
    let validator = ProtectionValidator::new(&registry, ValidatorConfig::default())
        .with_rule(Box::new(SanctionsCheck));

    let results = validator
        .validate(&ValidationScenario::compare(100_000.0, ["US", "DE"], 1, true))
        .unwrap();

    assert_eq!(
        results[0].recommendations.last().map(String::as_str),
        Some("Run OFAC screening")
    );
    assert!(!results[1]
        .recommendations
        .contains(&"Run OFAC screening".to_string()));
}

#[test]
fn custom_rules_do_not_fire_for_zero_deposits() {
    let registry = SchemeRegistry::builtin();
    let validator = ProtectionValidator::new(&registry, ValidatorConfig::default())
        .with_rule(Box::new(SanctionsCheck));

    let r = validator
        .validate(&ValidationScenario::new(0.0, "US", 1, false))
        .unwrap()
        .remove(0);
    assert!(r.recommendations.is_empty());
}

#[test]
fn sub_unit_shortfall_rounds_to_zero_in_the_warning() {
    // 0.40 over the limit: still a shortfall, displayed in whole units.
    let r = run(100_000.4, "DE", 1, false);

    assert!(!r.is_fully_protected);
    assert!((r.unprotected_amount - 0.4).abs() < 1e-6);
    assert_eq!(r.warnings[0], "€0 exceeds protection limit per bank");
    assert_eq!(r.banks_needed, Some(2));
}
