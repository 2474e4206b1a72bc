use depguard_core::{ValidationRequest, ValidationScenario, ValidatorError};

fn parse(json: &str) -> Result<ValidationScenario, ValidatorError> {
    let request: ValidationRequest = serde_json::from_str(json).expect("well-formed request");
    ValidationScenario::try_from(request)
}

#[test]
fn single_mode_request_converts() {
    let scenario = parse(
        r#"{"deposit_amount": 150000, "jurisdiction": "DE", "number_of_banks": 1}"#,
    )
    .unwrap();

    assert_eq!(scenario, ValidationScenario::new(150_000.0, "DE", 1, false));
}

#[test]
fn comparison_mode_request_converts() {
    let scenario = parse(
        r#"{"deposit_amount": 300000, "jurisdictions": ["DE", "GB", "US"],
            "number_of_banks": 2, "is_joint_account": true}"#,
    )
    .unwrap();

    assert_eq!(scenario.jurisdiction_codes, vec!["DE", "GB", "US"]);
    assert_eq!(scenario.number_of_banks, 2);
    assert!(scenario.is_joint_account);
}

#[test]
fn non_positive_bank_counts_are_rejected() {
    for banks in [0, -1, -100] {
        let err = parse(&format!(
            r#"{{"deposit_amount": 1000, "jurisdiction": "DE", "number_of_banks": {banks}}}"#
        ))
        .unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidInput { .. }), "banks={banks}: {err}");
    }
}

#[test]
fn oversized_bank_counts_are_rejected() {
    let err = parse(
        r#"{"deposit_amount": 1000, "jurisdiction": "DE", "number_of_banks": 99999999999}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidInput { .. }));
}

#[test]
fn negative_amount_is_rejected() {
    let err = parse(r#"{"deposit_amount": -5, "jurisdiction": "DE", "number_of_banks": 1}"#)
        .unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidInput { .. }));
}

#[test]
fn jurisdiction_fields_are_mutually_exclusive() {
    let both = parse(
        r#"{"deposit_amount": 1000, "jurisdiction": "DE", "jurisdictions": ["GB"],
            "number_of_banks": 1}"#,
    )
    .unwrap_err();
    assert!(matches!(both, ValidatorError::InvalidInput { .. }));

    let neither = parse(r#"{"deposit_amount": 1000, "number_of_banks": 1}"#).unwrap_err();
    assert!(matches!(neither, ValidatorError::InvalidInput { .. }));

    let empty = parse(r#"{"deposit_amount": 1000, "jurisdictions": [], "number_of_banks": 1}"#)
        .unwrap_err();
    assert!(matches!(empty, ValidatorError::InvalidInput { .. }));
}

#[test]
fn error_messages_name_the_problem() {
    let err = parse(r#"{"deposit_amount": 1000, "jurisdiction": "DE", "number_of_banks": 0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("number_of_banks"), "{err}");
}
