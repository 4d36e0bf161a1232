//! Item catalog: data model and file ingestion.
//!
//! A catalog is a flat, ordered list of [`Item`]s. Each item occupies one
//! equipment slot and carries:
//!
//! - **groups**: labels the item belongs to,
//! - **exclusions**: group labels the item forbids elsewhere in a loadout,
//! - **stats**: signed integer modifiers, unique by name within the item.
//!
//! # Catalog file format
//!
//! One item per line, semicolon separated:
//!
//! ```text
//! name;slot;group,group;exclusion,exclusion;stat;amount;stat;amount;...
//! ```
//!
//! The group and exclusion fields may be empty. Lines that are missing
//! their group, exclusion, or stat sections describe items with no stat
//! modifications and are skipped rather than rejected. See [`parse_line`].

mod parse;
mod types;

pub use parse::parse_line;
pub use types::{Catalog, Item, Stat};
