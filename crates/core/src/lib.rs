//! `valueobjects-core` — the value object contract and its scalar building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod boolean;
pub mod error;
pub mod identity;
pub mod native;
pub mod string;
pub mod util;
pub mod value_object;

pub use boolean::Boolean;
pub use error::{ValueObjectError, ValueObjectResult};
pub use identity::Uuid;
pub use native::{FromNative, expect_arity, expect_bool, expect_str};
pub use string::StringLiteral;
pub use util::{class_equals, same_variant};
pub use value_object::ValueObject;
