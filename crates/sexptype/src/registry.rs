//! Registry lookups over the static tag table.

use std::collections::BTreeMap;

use crate::error::{Result, SexpError, TagKey};
use crate::tag::{SexpType, TAGS, TagGroup, TagInfo};

/// Names the runtime's type parser accepts in addition to the `typeof` names.
///
/// `dispatch` never consults these; only [`resolve`] does.
pub const ALIASES: &[(&str, SexpType)] = &[
    ("numeric", SexpType::Double),
    ("name", SexpType::Symbol),
];

/// Returns every tag, in registry order.
pub fn all() -> impl Iterator<Item = SexpType> + Clone {
    TAGS.iter().map(|row| row.tag)
}

/// Returns the metadata rows, in registry order.
pub fn rows() -> &'static [TagInfo] {
    TAGS
}

/// Find a tag by the name `typeof` reports for it.
pub fn lookup_by_name(name: &str) -> Result<SexpType> {
    TAGS.iter()
        .find(|row| row.name == name)
        .map(|row| row.tag)
        .ok_or_else(|| SexpError::UnknownTag(TagKey::Name(name.to_string())))
}

/// Find a tag by its numeric id.
pub fn lookup_by_id(id: u32) -> Result<SexpType> {
    TAGS.iter()
        .find(|row| u32::from(row.id) == id)
        .map(|row| row.tag)
        .ok_or(SexpError::UnknownTag(TagKey::Id(id)))
}

/// Find a tag by its constant name, e.g. `REALSXP`.
pub fn lookup_by_symbol(symbol: &str) -> Result<SexpType> {
    TAGS.iter()
        .find(|row| row.symbol == symbol)
        .map(|row| row.tag)
        .ok_or_else(|| SexpError::UnknownTag(TagKey::Symbol(symbol.to_string())))
}

/// Find a tag by type name or alias.
///
/// `numeric` resolves to `double` and `name` to `symbol`.
pub fn resolve(name: &str) -> Result<SexpType> {
    lookup_by_name(name).or_else(|err| {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, tag)| *tag)
            .ok_or(err)
    })
}

/// Get all tags grouped by [`TagGroup`], each group in registry order.
pub fn by_group() -> BTreeMap<TagGroup, Vec<SexpType>> {
    let mut map = BTreeMap::new();
    for row in TAGS {
        map.entry(row.group).or_insert_with(Vec::new).push(row.tag);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup_by_name("integer").unwrap(), SexpType::Integer);
        assert_eq!(lookup_by_name("NULL").unwrap(), SexpType::Nil);
        assert_eq!(lookup_by_name("...").unwrap(), SexpType::Dots);
    }

    #[test]
    fn test_lookup_by_name_is_exact() {
        for name in ["Integer", "numeric", "int", "", "INTSXP", "null"] {
            let err = lookup_by_name(name).unwrap_err();
            assert!(err.is_unknown_tag(), "{}", name);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(lookup_by_id(0).unwrap(), SexpType::Nil);
        assert_eq!(lookup_by_id(99).unwrap(), SexpType::Function);
        assert!(matches!(
            lookup_by_id(11),
            Err(SexpError::UnknownTag(TagKey::Id(11)))
        ));
        assert!(lookup_by_id(256).is_err());
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(lookup_by_symbol("REALSXP").unwrap(), SexpType::Double);
        assert!(matches!(
            lookup_by_symbol("OBJSXP"),
            Err(SexpError::UnknownTag(TagKey::Symbol(_)))
        ));
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(resolve("numeric").unwrap(), SexpType::Double);
        assert_eq!(resolve("name").unwrap(), SexpType::Symbol);
        assert_eq!(resolve("double").unwrap(), SexpType::Double);
        assert!(matches!(
            resolve("vector"),
            Err(SexpError::UnknownTag(TagKey::Name(name))) if name == "vector"
        ));
    }

    #[test]
    fn test_by_group() {
        let groups = by_group();
        assert_eq!(groups[&TagGroup::Absence], vec![SexpType::Nil]);
        assert_eq!(groups[&TagGroup::Atomic].len(), 6);
        assert!(groups[&TagGroup::Internal].contains(&SexpType::New));
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, rows().len());
    }

    #[test]
    fn test_all_is_stable() {
        let first: Vec<SexpType> = all().collect();
        let second: Vec<SexpType> = all().collect();
        assert_eq!(first, second);
        // Display order, not id order.
        assert_ne!(first, {
            let mut sorted = first.clone();
            sorted.sort();
            sorted
        });
    }
}
