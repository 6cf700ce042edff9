//! Classifying host values.
//!
//! The host runtime owns introspection. This module only maps the type name a
//! host reports back onto the closed registry.

use crate::error::{Result, SexpError, TagKey};
use crate::registry;
use crate::tag::SexpType;

/// Host introspection: reports the `typeof` name of a value.
pub trait TypeOf {
    fn type_of(&self) -> &str;
}

impl<T: TypeOf + ?Sized> TypeOf for &T {
    fn type_of(&self) -> &str {
        (**self).type_of()
    }
}

/// Returns the tag the host reports for `value`.
///
/// Fails if the host reports a name outside the registry, or the name of a
/// tag only memory management uses.
pub fn classify<V: TypeOf + ?Sized>(value: &V) -> Result<SexpType> {
    let name = value.type_of();
    match registry::lookup_by_name(name) {
        Ok(tag) if !tag.is_memory_management() => Ok(tag),
        _ => {
            tracing::debug!("host reported unknown type name: {}", name);
            Err(SexpError::UnknownTag(TagKey::Name(name.to_string())))
        }
    }
}

/// JSON values, classified the way the runtime converts parsed JSON.
///
/// Integral numbers that fit a 32-bit integer become `integer`, other numbers
/// `double`. `i32::MIN` is the integer `NA`, so it is a `double` too. Arrays
/// and objects both become `list`.
impl TypeOf for serde_json::Value {
    fn type_of(&self) -> &str {
        use serde_json::Value;

        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "logical",
            Value::Number(n) if is_int32(n) => "integer",
            Value::Number(_) => "double",
            Value::String(_) => "character",
            Value::Array(_) | Value::Object(_) => "list",
        }
    }
}

fn is_int32(n: &serde_json::Number) -> bool {
    n.as_i64()
        .and_then(|i| i32::try_from(i).ok())
        .is_some_and(|i| i != i32::MIN)
}
