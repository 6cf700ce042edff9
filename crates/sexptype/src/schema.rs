//! Tag schema definitions.
//!
//! `tags.toml` is the declarative form of the registry. It is used to:
//! - Check the static table against a reviewed listing
//! - Export the registry as TOML or JSON for other tooling
//!
//! The static table in [`crate::tag`] stays authoritative; a schema that
//! disagrees with it is reported, never applied.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SexpError};
use crate::registry;
use crate::tag::TagGroup;

/// One tag entry in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Constant name (e.g., "INTSXP")
    pub symbol: String,
    /// Numeric id
    pub id: u32,
    /// Type name reported by `typeof` (e.g., "integer")
    pub name: String,
    /// Group
    pub group: TagGroup,
    /// Human-readable description
    pub description: String,
}

/// Root schema containing all tag entries, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSchema {
    pub tag: Vec<TagEntry>,
}

impl TagSchema {
    /// Load schema from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading tag schema from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse schema from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load the default schema from tags.toml.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tags.toml");
        Self::from_file(path)
    }

    /// Build the schema the static table describes.
    pub fn from_registry() -> Self {
        let tag = registry::rows()
            .iter()
            .map(|row| TagEntry {
                symbol: row.symbol.to_string(),
                id: u32::from(row.id),
                name: row.name.to_string(),
                group: row.group,
                description: row.description.to_string(),
            })
            .collect();
        Self { tag }
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find an entry by type name.
    pub fn find(&self, name: &str) -> Option<&TagEntry> {
        self.tag.iter().find(|entry| entry.name == name)
    }

    /// Check that this schema lists exactly the registry, in the same order.
    pub fn check(&self) -> Result<()> {
        let expected = Self::from_registry();
        if self.tag.len() != expected.tag.len() {
            return Err(SexpError::SchemaMismatch(format!(
                "expected {} tags, found {}",
                expected.tag.len(),
                self.tag.len()
            )));
        }
        for (position, (found, want)) in self.tag.iter().zip(&expected.tag).enumerate() {
            if found != want {
                tracing::warn!("schema entry {} differs: {:?}", position, found);
                return Err(SexpError::SchemaMismatch(format!(
                    "entry {} is {} ({}), expected {} ({})",
                    position, found.symbol, found.id, want.symbol, want.id
                )));
            }
        }
        Ok(())
    }
}
