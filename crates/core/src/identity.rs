//! UUID identity scalar.

use core::any::Any;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValueObjectError, ValueObjectResult};
use crate::native::{FromNative, expect_arity, expect_str};
use crate::util::same_variant;
use crate::value_object::ValueObject;

/// A UUID wrapped as a value object.
///
/// Compared by value like every other value object; it carries no entity
/// semantics of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Generate a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Hyphenated lower-case text form.
    pub fn to_native(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl FromNative for Uuid {
    const ARITY: usize = 1;

    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [value] = expect_arity::<1>(natives, "Uuid::from_native")?;
        Self::try_from(value)
    }
}

impl TryFrom<&Value> for Uuid {
    type Error = ValueObjectError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        expect_str(value)?.parse()
    }
}

impl FromStr for Uuid {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = uuid::Uuid::from_str(s)
            .map_err(|e| ValueObjectError::invalid_uuid(format!("{s}: {e}")))?;
        Ok(Self(uuid))
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl ValueObject for Uuid {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| self.0 == other.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl core::fmt::Display for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringLiteral;
    use serde_json::json;

    const SAMPLE: &str = "5ba4f2d4-2c6b-4e2c-9d5c-1c7f4f1a2b3c";

    #[test]
    fn from_native_parses_hyphenated_text() {
        let uuid = Uuid::from_native(&[json!(SAMPLE)]).unwrap();
        assert_eq!(uuid.to_native(), SAMPLE);
        assert_eq!(uuid.to_string(), SAMPLE);
    }

    #[test]
    fn upper_case_input_renders_lower_case() {
        let uuid: Uuid = SAMPLE.to_uppercase().parse().unwrap();
        assert_eq!(uuid.to_native(), SAMPLE);
        assert!(uuid.same_value_as(&Uuid::try_from(&json!(SAMPLE)).unwrap()));
    }

    #[test]
    fn malformed_text_is_rejected() {
        match Uuid::try_from(&json!("not-a-uuid")).unwrap_err() {
            ValueObjectError::InvalidUuid(msg) => assert!(msg.starts_with("not-a-uuid")),
            _ => panic!("Expected InvalidUuid"),
        }
    }

    #[test]
    fn non_string_native_is_rejected() {
        let is_invalid_native = matches!(
            Uuid::try_from(&json!(42)),
            Err(ValueObjectError::InvalidNativeArgument { .. })
        );
        assert!(is_invalid_native);
    }

    #[test]
    fn generated_ids_differ() {
        let a = Uuid::generate();
        let b = Uuid::generate();
        assert!(a.same_value_as(&a));
        assert!(!a.same_value_as(&b));
    }

    #[test]
    fn same_text_in_another_variant_is_not_equal() {
        let uuid: Uuid = SAMPLE.parse().unwrap();
        assert!(!uuid.same_value_as(&StringLiteral::new(SAMPLE)));
    }

    #[test]
    fn serializes_as_hyphenated_string() {
        let uuid: Uuid = SAMPLE.parse().unwrap();
        assert_eq!(serde_json::to_value(uuid).unwrap(), json!(SAMPLE));

        let back: Uuid = serde_json::from_value(json!(SAMPLE)).unwrap();
        assert!(back.same_value_as(&uuid));
        assert!(serde_json::from_value::<Uuid>(json!("not-a-uuid")).is_err());
    }
}
