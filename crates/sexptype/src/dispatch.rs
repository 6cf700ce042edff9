//! Switch-style dispatch on a tag's type name.
//!
//! Mirrors the runtime convention of switching on `typeof(x)` with a fallback:
//!
//! ```
//! use rhizome_sexptype::{Arms, SexpType, dispatch};
//!
//! let bytes = Arms::new()
//!     .arm("integer", Some(4))
//!     .arm("numeric", Some(8))
//!     .arm("logical", Some(4));
//!
//! assert_eq!(dispatch(SexpType::Integer, &bytes, None), Some(4));
//! // There is no arm named "double", so the default is taken.
//! assert_eq!(dispatch(SexpType::Double, &bytes, None), None);
//! ```

use std::collections::HashMap;

use crate::classify::{TypeOf, classify};
use crate::error::{Result, SexpError};
use crate::tag::SexpType;

/// A mapping from type name to result.
///
/// Keys are matched exactly against [`SexpType::name`]. Aliases such as
/// `numeric` are not expanded. Keys that name no tag are allowed; they simply
/// never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arms<T> {
    arms: HashMap<String, T>,
}

impl<T> Default for Arms<T> {
    fn default() -> Self {
        Self {
            arms: HashMap::new(),
        }
    }
}

impl<T> Arms<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arm. A later arm for the same name replaces the earlier one.
    pub fn arm(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Add an arm in place, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.arms.insert(name.into(), value)
    }

    /// Build arms, rejecting a name that appears twice.
    pub fn strict<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut arms = Self::new();
        for (name, value) in pairs {
            let name = name.into();
            if arms.arms.contains_key(&name) {
                return Err(SexpError::DuplicateArm(name));
            }
            arms.arms.insert(name, value);
        }
        Ok(arms)
    }

    /// Returns the arm for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.arms.get(name)
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Arms<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut arms = Self::new();
        for (name, value) in iter {
            arms.insert(name, value);
        }
        arms
    }
}

/// Returns the arm matching `tag`'s type name, or `default`.
pub fn dispatch<T: Clone>(tag: SexpType, arms: &Arms<T>, default: T) -> T {
    match arms.get(tag.name()) {
        Some(value) => value.clone(),
        None => default,
    }
}

/// Classify `value` and dispatch on the result.
///
/// A host reporting an unknown type name takes the default arm.
pub fn dispatch_value<V, T>(value: &V, arms: &Arms<T>, default: T) -> T
where
    V: TypeOf + ?Sized,
    T: Clone,
{
    match classify(value) {
        Ok(tag) => dispatch(tag, arms, default),
        Err(_) => default,
    }
}
