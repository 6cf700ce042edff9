//! Error types.

use std::fmt;
use thiserror::Error;

/// The key a failed registry lookup was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKey {
    /// A type name, e.g. `integer`.
    Name(String),
    /// A constant name, e.g. `INTSXP`.
    Symbol(String),
    /// A numeric id.
    Id(u32),
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKey::Name(name) => write!(f, "name '{}'", name),
            TagKey::Symbol(symbol) => write!(f, "symbol '{}'", symbol),
            TagKey::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum SexpError {
    #[error("unknown tag: {0}")]
    UnknownTag(TagKey),

    #[error("duplicate dispatch arm: {0}")]
    DuplicateArm(String),

    #[error("tag schema does not match the registry: {0}")]
    SchemaMismatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tag schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot serialize tag schema: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl SexpError {
    /// Returns true if this is an unknown tag lookup.
    pub fn is_unknown_tag(&self) -> bool {
        matches!(self, SexpError::UnknownTag(_))
    }
}

pub type Result<T> = std::result::Result<T, SexpError>;
