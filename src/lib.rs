//! Equipment loadout optimization.
//!
//! Given a catalog of items — each with a slot, group labels, group
//! exclusions, and signed integer stat modifiers — this crate selects the
//! one-item-per-slot combination that maximizes a chosen subset of stats:
//!
//! - **Dominance filter**: before searching, items that are strictly
//!   inferior to another item in the same slot are pruned (missing stats
//!   count with their sign: lacking a penalty is an advantage).
//! - **Exhaustive search**: every remaining combination is enumerated with
//!   a mixed-radix odometer, split across parallel workers by slicing the
//!   first slot's index range. Combinations pairing an item with another
//!   item from a group it excludes are rejected outright.
//! - **Two-level tie-break**: candidates tied on the key stats prefer the
//!   smaller stat spread (max − min), then the larger overall total, then
//!   the first one found — the result is deterministic for any worker count.
//!
//! # Modules
//!
//! - [`catalog`]: item/stat data model and the semicolon catalog format
//! - [`dominance`]: pairwise dominance rule and slot-wise filtering
//! - [`search`]: lanes, stat indexing, the odometer, workers, aggregation
//! - [`report`]: plain-text rendering and persistence of a search outcome
//! - [`shuffle`]: standalone catalog line-shuffling utility
//!
//! # Example
//!
//! ```
//! use loadopt::catalog::{Catalog, Item, Stat};
//! use loadopt::search::{SearchConfig, SearchRunner};
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("Longsword", "Weapon", &[], &[], [Stat::new("str", 5)]),
//!     Item::new("Club", "Weapon", &[], &[], [Stat::new("str", 3), Stat::new("vit", 10)]),
//!     Item::new("Iron Band", "Ring", &[], &[], [Stat::new("str", 2)]),
//!     Item::new("Opal Ring", "Ring", &[], &[], [Stat::new("vit", 1)]),
//! ]);
//!
//! let config = SearchConfig::default().with_workers(2);
//! let outcome = SearchRunner::run_catalog(catalog, &["str"], &config).unwrap();
//!
//! assert_eq!(outcome.key_stat_total, 7); // Longsword + Iron Band
//! ```

pub mod catalog;
pub mod dominance;
mod error;
pub mod report;
pub mod search;
pub mod shuffle;

pub use error::{OptimizeError, Result};
