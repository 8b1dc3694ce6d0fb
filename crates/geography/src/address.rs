//! Postal address, composed of other value objects.

use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use valueobjects_core::{
    FromNative, StringLiteral, ValueObject, ValueObjectResult, expect_arity, same_variant,
};

use crate::country::Country;
use crate::country_code::CountryCode;
use crate::street::Street;

const FROM_NATIVE_SIGNATURE: &str = "Address::from_native(name, street_name, street_number, \
     district, city, region, postal_code, country_code)";

/// Native parts of an address, named so the compiler checks the arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeAddress<'a> {
    pub name: &'a str,
    pub street_name: &'a str,
    pub street_number: &'a str,
    pub district: &'a str,
    pub city: &'a str,
    pub region: &'a str,
    pub postal_code: &'a str,
    pub country_code: &'a str,
}

/// Composite value object: addressee, street, district, city, region, postal
/// code and country.
///
/// The fields are value objects that were validated when they were built;
/// `Address` only requires them to be present and of the right type. Two
/// addresses are the same value iff every pair of corresponding fields is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Natural person or company.
    name: StringLiteral,
    street: Street,
    /// District or city area.
    district: StringLiteral,
    /// City, town or village.
    city: StringLiteral,
    /// Region, county or state.
    region: StringLiteral,
    /// Postal code, P.O. box or ZIP code.
    postal_code: StringLiteral,
    country: Country,
}

impl Address {
    pub fn new(
        name: StringLiteral,
        street: Street,
        district: StringLiteral,
        city: StringLiteral,
        region: StringLiteral,
        postal_code: StringLiteral,
        country: Country,
    ) -> Self {
        Self {
            name,
            street,
            district,
            city,
            region,
            postal_code,
            country,
        }
    }

    /// Builds an address from named native parts.
    ///
    /// Only the country code can fail here: the remaining parts are already
    /// strings.
    pub fn from_native_parts(parts: NativeAddress<'_>) -> ValueObjectResult<Self> {
        let country = Country::new(parts.country_code.parse::<CountryCode>()?);

        Ok(Self::new(
            StringLiteral::new(parts.name),
            Street::new(
                StringLiteral::new(parts.street_name),
                StringLiteral::new(parts.street_number),
            ),
            StringLiteral::new(parts.district),
            StringLiteral::new(parts.city),
            StringLiteral::new(parts.region),
            StringLiteral::new(parts.postal_code),
            country,
        ))
    }

    pub fn name(&self) -> &StringLiteral {
        &self.name
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn district(&self) -> &StringLiteral {
        &self.district
    }

    pub fn city(&self) -> &StringLiteral {
        &self.city
    }

    pub fn region(&self) -> &StringLiteral {
        &self.region
    }

    pub fn postal_code(&self) -> &StringLiteral {
        &self.postal_code
    }

    pub fn country(&self) -> &Country {
        &self.country
    }
}

impl FromNative for Address {
    const ARITY: usize = 8;

    /// Natives, in order: addressee name, street name, street number, district,
    /// city, region, postal code, country code.
    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [
            name,
            street_name,
            street_number,
            district,
            city,
            region,
            postal_code,
            country_code,
        ] = expect_arity::<8>(natives, FROM_NATIVE_SIGNATURE)?;

        let name = StringLiteral::try_from(name)?;
        let street = Street::from_native(&[street_name.clone(), street_number.clone()])?;
        let district = StringLiteral::try_from(district)?;
        let city = StringLiteral::try_from(city)?;
        let region = StringLiteral::try_from(region)?;
        let postal_code = StringLiteral::try_from(postal_code)?;
        let country = Country::from_native(core::slice::from_ref(country_code))?;

        Ok(Self::new(
            name,
            street,
            district,
            city,
            region,
            postal_code,
            country,
        ))
    }
}

impl ValueObject for Address {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        let Some(other) = same_variant(self, other) else {
            return false;
        };

        self.name.same_value_as(&other.name)
            && self.street.same_value_as(&other.street)
            && self.district.same_value_as(&other.district)
            && self.city.same_value_as(&other.city)
            && self.region.same_value_as(&other.region)
            && self.postal_code.same_value_as(&other.postal_code)
            && self.country.same_value_as(&other.country)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// US postal format: name, street, `city region postal_code`, country. The
/// district is not rendered and the output is not meant to be parsed back.
impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}\n{}\n{} {} {}\n{}",
            self.name, self.street, self.city, self.region, self.postal_code, self.country
        )
    }
}
