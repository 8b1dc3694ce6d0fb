//! Country value object, resolved from a country code.

use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use valueobjects_core::{
    FromNative, StringLiteral, ValueObject, ValueObjectResult, expect_arity, same_variant,
};

use crate::country_code::CountryCode;

/// A country, identified by its ISO 3166-1 alpha-2 code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    code: CountryCode,
}

impl Country {
    pub fn new(code: CountryCode) -> Self {
        Self { code }
    }

    pub fn code(&self) -> CountryCode {
        self.code
    }

    pub fn name(&self) -> StringLiteral {
        StringLiteral::new(self.code.name())
    }
}

impl FromNative for Country {
    const ARITY: usize = 1;

    /// Resolves a native country code; unknown codes fail with
    /// [`valueobjects_core::ValueObjectError::UnknownCountryCode`].
    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [code] = expect_arity::<1>(natives, "Country::from_native")?;
        CountryCode::try_from(code).map(Self::new)
    }
}

impl From<CountryCode> for Country {
    fn from(code: CountryCode) -> Self {
        Self::new(code)
    }
}

impl ValueObject for Country {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| self.code.same_value_as(&other.code))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Renders the country code, e.g. `US`.
impl core::fmt::Display for Country {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.code, f)
    }
}
