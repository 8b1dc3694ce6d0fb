//! `valueobjects-geography` — composite value objects for postal addresses.
//!
//! Built purely from the contract in `valueobjects-core`: every type here is
//! immutable, constructed through a primary constructor or `from_native`, and
//! compared with `same_value_as`.

pub mod address;
pub mod country;
pub mod country_code;
pub mod street;

pub use address::{Address, NativeAddress};
pub use country::Country;
pub use country_code::CountryCode;
pub use street::Street;
