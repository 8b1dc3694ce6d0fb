//! Black-box tests: only the public API of the value object crates.

use serde_json::{Value, json};

use valueobjects_core::{Boolean, FromNative, StringLiteral, ValueObject, ValueObjectError};
use valueobjects_geography::{Address, Country, CountryCode, Street};

fn setup() {
    valueobjects_observability::init();
}

fn natives(country_code: &str) -> Vec<Value> {
    vec![
        json!("Jane Doe"),
        json!("Main"),
        json!("123"),
        json!("Downtown"),
        json!("Springfield"),
        json!("IL"),
        json!("62704"),
        json!(country_code),
    ]
}

#[test]
fn address_from_native_renders_four_line_us_format() {
    setup();

    let address = Address::from_native(&natives("US")).unwrap();

    assert_eq!(
        address.to_string(),
        "Jane Doe\n123 Main\nSpringfield IL 62704\nUS"
    );
}

#[test]
fn address_arity_is_fixed_at_eight() {
    setup();
    assert_eq!(<Address as FromNative>::ARITY, 8);

    let mut natives = natives("US");
    natives.truncate(7);

    let err = Address::from_native(&natives).unwrap_err();
    assert!(matches!(
        err,
        ValueObjectError::ArgumentCountMismatch { expected: 8, actual: 7, .. }
    ));
    assert!(err.to_string().contains("exactly 8"));
}

#[test]
fn unknown_country_code_propagates_unchanged() {
    setup();

    let err = Address::from_native(&natives("QQ")).unwrap_err();
    assert_eq!(err, ValueObjectError::UnknownCountryCode("QQ".to_string()));
}

#[test]
fn heterogeneous_value_objects_compare_through_trait_objects() {
    setup();

    let address = Address::from_native(&natives("US")).unwrap();
    let objects: Vec<Box<dyn ValueObject>> = vec![
        Box::new(Boolean::new(true)),
        Box::new(StringLiteral::new("US")),
        Box::new(CountryCode::US),
        Box::new(Country::new(CountryCode::US)),
        Box::new(Street::new(StringLiteral::new("Main"), StringLiteral::new("123"))),
        Box::new(address.clone()),
    ];

    for (i, a) in objects.iter().enumerate() {
        for (j, b) in objects.iter().enumerate() {
            assert_eq!(a.same_value_as(&**b), i == j, "{a} vs {b}");
        }
    }
}

#[test]
fn value_objects_are_shareable_across_threads() {
    setup();

    let address = std::sync::Arc::new(Address::from_native(&natives("US")).unwrap());
    let rendered = address.to_string();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let address = std::sync::Arc::clone(&address);
            std::thread::spawn(move || address.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), rendered);
    }
}
