//! Representation tags and their static metadata table.
//!
//! Every value the runtime hands out is stored as one of a closed set of
//! representations. The set is fixed here; new tags are only ever added by
//! editing this file (and `tags.toml` alongside it).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SexpError;

/// Conceptual grouping of tags.
///
/// Grouping is for display only. It plays no part in equality or dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagGroup {
    /// The absence of a value.
    Absence,
    /// Atomic vectors: every element has the same primitive type.
    Atomic,
    /// Language objects and program structure.
    Language,
    /// Implementation details rarely seen from user code.
    Internal,
}

impl TagGroup {
    /// All groups, in display order.
    pub const ALL: [TagGroup; 4] = [
        TagGroup::Absence,
        TagGroup::Atomic,
        TagGroup::Language,
        TagGroup::Internal,
    ];

    /// Returns the snake case name used in `tags.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            TagGroup::Absence => "absence",
            TagGroup::Atomic => "atomic",
            TagGroup::Language => "language",
            TagGroup::Internal => "internal",
        }
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TagGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| format!("unknown tag group: {}", s))
    }
}

/// A representation tag.
///
/// Discriminants are the historical numeric ids. They are not contiguous.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SexpType {
    Nil = 0,
    Symbol = 1,
    Pairlist = 2,
    Closure = 3,
    Environment = 4,
    Promise = 5,
    Language = 6,
    Special = 7,
    Builtin = 8,
    Char = 9,
    Logical = 10,
    Integer = 13,
    Double = 14,
    Complex = 15,
    Character = 16,
    Dots = 17,
    Any = 18,
    List = 19,
    Expression = 20,
    Bytecode = 21,
    ExternalPtr = 22,
    WeakRef = 23,
    Raw = 24,
    S4 = 25,
    New = 30,
    Free = 31,
    Function = 99,
}

/// Static metadata for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    /// The tag itself.
    #[serde(skip)]
    pub tag: SexpType,
    /// C-level constant name, e.g. `INTSXP`.
    pub symbol: &'static str,
    /// Stable numeric id.
    pub id: u8,
    /// Name reported by `typeof`, e.g. `integer`.
    pub name: &'static str,
    /// Conceptual group.
    pub group: TagGroup,
    /// Short human-readable description.
    pub description: &'static str,
}

const fn info(
    tag: SexpType,
    symbol: &'static str,
    name: &'static str,
    group: TagGroup,
    description: &'static str,
) -> TagInfo {
    TagInfo {
        tag,
        symbol,
        id: tag as u8,
        name,
        group,
        description,
    }
}

/// The registry, in display order.
///
/// Tags are grouped for readability, so later-numbered tags (e.g. `RAWSXP`)
/// can appear before earlier ones.
pub static TAGS: &[TagInfo] = &[
    // absence
    info(SexpType::Nil, "NILSXP", "NULL", TagGroup::Absence, "the null object"),
    // atomic vectors
    info(SexpType::Logical, "LGLSXP", "logical", TagGroup::Atomic, "logical vector"),
    info(SexpType::Integer, "INTSXP", "integer", TagGroup::Atomic, "integer vector"),
    info(SexpType::Double, "REALSXP", "double", TagGroup::Atomic, "numeric (double precision) vector"),
    info(SexpType::Complex, "CPLXSXP", "complex", TagGroup::Atomic, "complex vector"),
    info(SexpType::Character, "STRSXP", "character", TagGroup::Atomic, "character vector"),
    info(SexpType::Raw, "RAWSXP", "raw", TagGroup::Atomic, "raw byte vector"),
    // language and program structure
    info(SexpType::List, "VECSXP", "list", TagGroup::Language, "generic vector (list)"),
    info(SexpType::Expression, "EXPRSXP", "expression", TagGroup::Language, "expression vector"),
    info(SexpType::Symbol, "SYMSXP", "symbol", TagGroup::Language, "symbol (name)"),
    info(SexpType::Pairlist, "LISTSXP", "pairlist", TagGroup::Language, "pairlist"),
    info(SexpType::Language, "LANGSXP", "language", TagGroup::Language, "language object (call)"),
    info(SexpType::Dots, "DOTSXP", "...", TagGroup::Language, "dot-dot-dot object"),
    info(SexpType::Closure, "CLOSXP", "closure", TagGroup::Language, "closure (user function)"),
    info(SexpType::Special, "SPECIALSXP", "special", TagGroup::Language, "special (primitive, unevaluated args)"),
    info(SexpType::Builtin, "BUILTINSXP", "builtin", TagGroup::Language, "builtin (primitive, evaluated args)"),
    info(SexpType::Environment, "ENVSXP", "environment", TagGroup::Language, "environment"),
    info(SexpType::Promise, "PROMSXP", "promise", TagGroup::Language, "promise (lazily evaluated argument)"),
    info(SexpType::S4, "S4SXP", "S4", TagGroup::Language, "S4 object that is not a simple type"),
    // internal
    info(SexpType::Char, "CHARSXP", "char", TagGroup::Internal, "internal scalar character string"),
    info(SexpType::Any, "ANYSXP", "any", TagGroup::Internal, "placeholder matching any type"),
    info(SexpType::Bytecode, "BCODESXP", "bytecode", TagGroup::Internal, "byte code"),
    info(SexpType::ExternalPtr, "EXTPTRSXP", "externalptr", TagGroup::Internal, "external pointer"),
    info(SexpType::WeakRef, "WEAKREFSXP", "weakref", TagGroup::Internal, "weak reference"),
    info(SexpType::New, "NEWSXP", "new", TagGroup::Internal, "fresh node created in a new page (memory management)"),
    info(SexpType::Free, "FREESXP", "free", TagGroup::Internal, "node released by the collector (memory management)"),
    info(SexpType::Function, "FUNSXP", "function", TagGroup::Internal, "closure or builtin or special (pseudo-type)"),
];

impl SexpType {
    /// Returns the metadata row for this tag.
    pub fn info(self) -> &'static TagInfo {
        // Every variant has exactly one row; `tests::every_variant_has_a_row` checks it.
        match TAGS.iter().find(|row| row.tag == self) {
            Some(row) => row,
            None => unreachable!("tag {:?} missing from TAGS", self),
        }
    }

    /// Returns the numeric id.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the name `typeof` reports, e.g. `integer`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the C-level constant name, e.g. `INTSXP`.
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn group(self) -> TagGroup {
        self.info().group
    }

    /// Returns true for the two tags used only by memory management.
    ///
    /// Values carrying these tags are never observable from user code.
    pub fn is_memory_management(self) -> bool {
        matches!(self, SexpType::New | SexpType::Free)
    }
}

impl fmt::Display for SexpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SexpType {
    type Err = SexpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::lookup_by_name(s)
    }
}

impl TryFrom<u8> for SexpType {
    type Error = SexpError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        crate::registry::lookup_by_id(u32::from(id))
    }
}

impl From<SexpType> for u8 {
    fn from(tag: SexpType) -> Self {
        tag as u8
    }
}
