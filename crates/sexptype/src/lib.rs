//! Representation tags for an R-style runtime.
//!
//! Every runtime value is stored as one of a closed set of representations
//! (its `SEXPTYPE`). This crate defines that set, classifies host values into
//! it, and dispatches on a tag's type name with a fallback arm.
//!
//! # Example
//!
//! ```
//! use rhizome_sexptype::{SexpType, registry};
//!
//! let tag = registry::lookup_by_name("integer").unwrap();
//! assert_eq!(tag, SexpType::Integer);
//! assert_eq!(tag.symbol(), "INTSXP");
//! assert_eq!(registry::lookup_by_id(13).unwrap(), tag);
//! ```

mod classify;
mod dispatch;
mod error;
mod tag;
pub mod registry;
pub mod schema;

pub use classify::{TypeOf, classify};
pub use dispatch::{Arms, dispatch, dispatch_value};
pub use error::{Result, SexpError, TagKey};
pub use registry::{all, lookup_by_id, lookup_by_name};
pub use schema::{TagEntry, TagSchema};
pub use tag::{SexpType, TAGS, TagGroup, TagInfo};
