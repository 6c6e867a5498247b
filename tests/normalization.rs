//! Integration tests for the normalization pipeline.
//!
//! These tests run the validator, country inference, cursor adjuster and
//! max-length policy together against the bundled catalog and the
//! libphonenumber metadata.

use intl_tel_input::{
    CountryCatalog, FormatKind, LibPhoneNumber, NumberValidator, RegionCode, ValidationOutcome,
    ValidatorConfig, adjust_cursor, max_length,
};

fn rc(code: &str) -> RegionCode {
    RegionCode::new(code).unwrap()
}

/// International input without a selection resolves the country.
#[test]
fn test_spanish_number_without_selection() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();

    let result = validator.validate(Some("+34678906543"), None, catalog.countries());

    assert_eq!(result.outcome, ValidationOutcome::Valid);
    assert_eq!(result.display, "678 90 65 43");
    assert_eq!(result.output.as_deref(), Some("+34 678 90 65 43"));
    assert_eq!(result.country, Some(rc("ES")));
}

/// National input gets the selected calling code prepended.
#[test]
fn test_spanish_national_number() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();

    let result = validator.validate(Some("678906543"), Some(&rc("ES")), catalog.countries());

    assert_eq!(result.outcome, ValidationOutcome::Valid);
    assert_eq!(result.output.as_deref(), Some("+34 678 90 65 43"));
}

/// Every output format is produced from the same parse.
#[test]
fn test_output_formats() {
    let catalog = CountryCatalog::bundled();
    let es = rc("ES");

    let expected = [
        (FormatKind::E164, "+34678906543"),
        (FormatKind::International, "+34 678 90 65 43"),
        (FormatKind::National, "678 90 65 43"),
        (FormatKind::Rfc3966, "tel:+34-678-90-65-43"),
    ];

    for (format, output) in expected {
        let validator = NumberValidator::new(
            LibPhoneNumber::new(),
            ValidatorConfig::default().with_output_format(format),
        );
        let result = validator.validate(Some("678906543"), Some(&es), catalog.countries());
        assert_eq!(result.output.as_deref(), Some(output), "{format}");
    }
}

/// Garbage is reported, not thrown, and the text is left alone.
#[test]
fn test_invalid_text_is_kept() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();

    let result = validator.validate(Some("invalid"), Some(&rc("GB")), catalog.countries());

    assert_eq!(result.outcome, ValidationOutcome::InvalidNumber);
    assert_eq!(result.display, "invalid");
    assert_eq!(result.output, None);
}

/// Numbers sharing +1 land on the right country.
#[test]
fn test_nanp_disambiguation() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::new(
        LibPhoneNumber::new(),
        ValidatorConfig::default().with_include_dial_code(true),
    );
    let us = rc("US");

    let cases = [
        ("+17672251234", "DM"),
        ("+14734031234", "GD"),
        ("+12015550123", "US"),
        ("+16702345678", "MP"),
    ];

    for (raw, iso) in cases {
        let result = validator.validate(Some(raw), Some(&us), catalog.countries());
        assert_eq!(result.outcome, ValidationOutcome::Valid, "{raw}");
        assert_eq!(result.country, Some(rc(iso)), "{raw}");
        assert_eq!(result.country_changed, iso != "US", "{raw}");
    }
}

/// +7 goes to Kazakhstan only on its area codes.
#[test]
fn test_russia_and_kazakhstan() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();

    let russia = validator.validate(Some("+79123456789"), None, catalog.countries());
    assert_eq!(russia.country, Some(rc("RU")));

    let kazakhstan = validator.validate(Some("+77710009998"), None, catalog.countries());
    assert_eq!(kazakhstan.country, Some(rc("KZ")));
}

/// The caret follows the digit it was next to while typing.
#[test]
fn test_caret_after_reformatting() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();

    let typed = "678906543";
    let result = validator.validate(Some(typed), Some(&rc("ES")), catalog.countries());

    assert_eq!(adjust_cursor(9, typed, &result.display), 12);
    assert_eq!(adjust_cursor(5, typed, &result.display), 6);
    assert_eq!(adjust_cursor(0, typed, &result.display), 0);
}

/// The field limit never undercuts the national digit limit.
#[test]
fn test_max_length_bounds_digit_limit() {
    let catalog = CountryCatalog::bundled();
    let grammar = LibPhoneNumber::new();

    for country in catalog.iter() {
        let base = max_length::base_max_digits(&grammar, Some(&country.iso2));
        let typing = max_length::adaptive_max_length(
            &grammar,
            Some(country),
            "1",
            false,
            FormatKind::International,
        );
        assert!(typing >= base, "{}: {typing} < {base}", country.iso2);
    }
}

/// The field grows once the number is complete and formatted.
#[test]
fn test_max_length_grows_for_formatted_value() {
    let catalog = CountryCatalog::bundled();
    let validator = NumberValidator::default();
    let spain = catalog.find("ES");

    let raw = validator.max_length(spain, "678906543");
    let formatted = validator.max_length(spain, "678 90 65 43");

    assert!(formatted > raw);
    assert!(formatted >= "678 90 65 43".len());
    assert_eq!(validator.max_length(None, "678906543"), max_length::DEFAULT_MAX_LENGTH);
}
