//! Street value object: a street name plus a house number.

use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use valueobjects_core::{
    FromNative, StringLiteral, ValueObject, ValueObjectResult, expect_arity, same_variant,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Street {
    name: StringLiteral,
    number: StringLiteral,
}

impl Street {
    pub fn new(name: StringLiteral, number: StringLiteral) -> Self {
        Self { name, number }
    }

    pub fn name(&self) -> &StringLiteral {
        &self.name
    }

    pub fn number(&self) -> &StringLiteral {
        &self.number
    }
}

impl FromNative for Street {
    const ARITY: usize = 2;

    /// Natives: street name, street number.
    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [name, number] = expect_arity::<2>(natives, "Street::from_native")?;
        Ok(Self::new(
            StringLiteral::try_from(name)?,
            StringLiteral::try_from(number)?,
        ))
    }
}

impl ValueObject for Street {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| {
            self.name.same_value_as(&other.name) && self.number.same_value_as(&other.number)
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `"{number} {name}"`, e.g. `123 Main`.
impl core::fmt::Display for Street {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use valueobjects_core::ValueObjectError;

    fn main_street() -> Street {
        Street::new(StringLiteral::new("Main"), StringLiteral::new("123"))
    }

    #[test]
    fn from_native_builds_equal_street() {
        let street = Street::from_native(&[json!("Main"), json!("123")]).unwrap();
        assert!(street.same_value_as(&main_street()));
        assert_eq!(street.name().to_native(), "Main");
        assert_eq!(street.number().to_native(), "123");
    }

    #[test]
    fn from_native_requires_two_natives() {
        let err = Street::from_native(&[json!("Main")]).unwrap_err();
        match err {
            ValueObjectError::ArgumentCountMismatch { expected: 2, actual: 1, .. } => {}
            _ => panic!("Expected ArgumentCountMismatch"),
        }
    }

    #[test]
    fn from_native_rejects_numeric_house_number() {
        let is_invalid_native = matches!(
            Street::from_native(&[json!("Main"), json!(123)]),
            Err(ValueObjectError::InvalidNativeArgument { .. })
        );
        assert!(is_invalid_native);
    }

    #[test]
    fn same_value_as_requires_both_parts() {
        let other_number = Street::new(StringLiteral::new("Main"), StringLiteral::new("124"));
        let other_name = Street::new(StringLiteral::new("Elm"), StringLiteral::new("123"));

        assert!(!main_street().same_value_as(&other_number));
        assert!(!main_street().same_value_as(&other_name));
        assert!(!main_street().same_value_as(&StringLiteral::new("123 Main")));
    }

    #[test]
    fn to_string_puts_number_first() {
        assert_eq!(main_street().to_string(), "123 Main");
    }
}
