//! Parallel exhaustive loadout search.
//!
//! The search enumerates the full Cartesian product of lane sizes with a
//! mixed-radix [`Odometer`], one candidate loadout per step. Work is
//! partitioned statically: the first lane's index range is sliced into
//! one contiguous window per worker, and each worker cycles every other
//! lane completely over its window. Workers share one immutable compiled
//! snapshot of the lanes and never touch shared mutable state; the runner
//! joins them all before aggregating, so results are deterministic for
//! any worker count.
//!
//! # Key Types
//!
//! - [`Lane`] / [`build_lanes`]: per-slot item lists in canonical order
//! - [`StatIndex`]: stat name ↔ dense position bijection
//! - [`SearchConfig`]: worker count
//! - [`SearchRunner`]: orchestration entry points
//! - [`SearchOutcome`] / [`Pick`]: the winning loadout, resolved to names
//! - [`WorkerResult`]: one worker's local best
//! - [`Odometer`]: the combination counter, usable on its own

mod config;
mod odometer;
mod partition;
mod runner;
mod types;
mod worker;

pub use config::SearchConfig;
pub use odometer::Odometer;
pub use runner::{Pick, SearchOutcome, SearchRunner};
pub use types::{build_lanes, Lane, StatIndex, WorkerResult};
