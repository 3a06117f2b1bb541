//! Catalog and end-to-end scenarios
//!
//! Drives the whole stack the way a consumer would: pre-built catalog
//! types, user-defined types layered on the roots, and the validation
//! messages a caller sees on rejection.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tautype_types::*;

#[test]
fn zipcode_end_to_end() {
    let zipcode =
        TypeDescriptor::derive("zipcode", catalog::text(), [Constraint::max_length(5)]).unwrap();

    let typed = zipcode.cast(Value::from("90210")).unwrap();
    assert!(TypeDescriptor::same(typed.type_def(), &zipcode));
    assert_eq!(typed.into_inner(), Value::from("90210"));

    let err = zipcode.cast(Value::from("Too long!")).unwrap_err();
    match err {
        TautError::Validation {
            type_name,
            message,
            value,
            ..
        } => {
            assert_eq!(type_name, "zipcode");
            assert_eq!(message, "length exceeds 5");
            assert_eq!(value, "\"Too long!\"");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn byte_end_to_end() {
    let byte = sized_int(1).unwrap();

    assert!(byte.check(&Value::from(100i64)).is_ok());

    let err = byte.check(&Value::from(250i64)).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("int8"), "message must name the type: {}", text);
    assert!(
        text.contains("-128..=127"),
        "message must report the valid range: {}",
        text
    );
}

#[rstest]
#[case("", true)]
#[case("12345", true)]
#[case("123456", false)]
fn varchar5_boundaries(#[case] candidate: &str, #[case] accepted: bool) {
    let v5 = varchar(5).unwrap();
    assert_eq!(v5.is(&Value::from(candidate)), accepted);
}

#[rstest]
#[case(-129, false)]
#[case(-128, true)]
#[case(0, true)]
#[case(127, true)]
#[case(128, false)]
fn int8_boundaries(#[case] candidate: i64, #[case] accepted: bool) {
    let int8 = catalog::lookup("int8").unwrap();
    assert_eq!(int8.is(&Value::from(candidate)), accepted);
}

#[test]
fn boolean_root_validates_kind() {
    let boolean = catalog::boolean();
    assert!(boolean.is(&Value::from(true)));
    assert!(!boolean.is(&Value::from("true")));
    assert!(!boolean.is(&Value::from(1i64)));
}

#[test]
fn catalog_types_are_process_wide() {
    let first = catalog::lookup("varchar").unwrap();
    let second = catalog::lookup("varchar").unwrap();
    assert!(TypeDescriptor::same(first, second));
}

#[test]
fn user_types_layer_on_catalog_families() {
    // A state code is a two-char fixed string with a custom uppercase rule
    let state = TypeDescriptor::derive(
        "state-code",
        &fixed_chars(2).unwrap(),
        [Constraint::new("uppercase", |_, value| {
            match value.as_text() {
                Some(s) if s.chars().all(|c| c.is_ascii_uppercase()) => {
                    ConstraintOutcome::Accepted
                }
                Some(_) => ConstraintOutcome::rejected("not uppercase"),
                None => ConstraintOutcome::rejected("not text"),
            }
        })],
    )
    .unwrap();

    assert!(state.is(&Value::from("CA")));
    assert!(!state.is(&Value::from("ca")));
    assert!(!state.is(&Value::from("CAL")));
    assert!(state.is_descendant_of(catalog::text()));
}

#[test]
fn validation_failures_leave_no_broken_state() {
    let memo = catalog::lookup("memo").unwrap();
    let oversized = Value::from("x".repeat(2000).as_str());
    assert!(memo.check(&oversized).is_err());
    // The descriptor keeps validating normally afterwards
    assert!(memo.check(&Value::from("fine")).is_ok());
}
