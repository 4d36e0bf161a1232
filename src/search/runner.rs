//! Search orchestration: fan out workers, aggregate their results.

use super::config::SearchConfig;
use super::partition;
use super::types::{build_lanes, Lane, SearchSpace, StatIndex, WorkerResult};
use super::worker::{challenger_wins, SearchWorker};
use crate::catalog::Catalog;
use crate::dominance::filter_dominated;
use crate::{OptimizeError, Result};
use rayon::prelude::*;

/// One chosen item in the winning loadout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pick {
    /// The slot being filled.
    pub slot: String,
    /// The chosen item's name.
    pub item: String,
}

/// The globally best loadout of a completed search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The chosen item per slot, in slot order.
    pub picks: Vec<Pick>,
    /// Chosen item index per lane, in lane order.
    pub loadout: Vec<usize>,
    /// Final `(stat name, amount)` totals, in stat-index order.
    pub totals: Vec<(String, i64)>,
    /// Sum of the key stats in `totals`.
    pub key_stat_total: i64,
    /// Sum of every amount in `totals`.
    pub all_stat_total: i64,
}

/// Runs the parallel exhaustive search.
///
/// # Usage
///
/// ```
/// use loadopt::catalog::{Catalog, Item, Stat};
/// use loadopt::search::{SearchConfig, SearchRunner};
///
/// let catalog = Catalog::from_items(vec![
///     Item::new("Longsword", "Weapon", &[], &[], [Stat::new("str", 5)]),
///     Item::new("Iron Band", "Ring", &[], &[], [Stat::new("str", 2)]),
/// ]);
/// let outcome =
///     SearchRunner::run_catalog(catalog, &["str"], &SearchConfig::default()).unwrap();
/// assert_eq!(outcome.key_stat_total, 7);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Searches the given lanes for the best loadout.
    ///
    /// This is the core entry point: the lanes are taken as-is (no
    /// dominance filtering), `key_stats` name the stats to maximize, and
    /// `config.workers` windows of lane 0 are searched in parallel.
    ///
    /// The result is deterministic: the same lanes, key stats, and any
    /// worker count produce the same winner.
    ///
    /// If every combination scores below the zero-initialized starting
    /// best (only possible when the catalog is net-negative for the key
    /// stats), the all-zero loadout is reported as-is; that fallback is
    /// never exclusion-checked, so its items may be mutually exclusive.
    ///
    /// # Errors
    ///
    /// - [`OptimizeError::Config`] for an invalid configuration or an
    ///   empty lane list,
    /// - [`OptimizeError::EmptySlot`] if any lane holds no items,
    /// - [`OptimizeError::NoKeyStats`] / [`OptimizeError::UnknownKeyStat`]
    ///   for a bad objective,
    /// - [`OptimizeError::StatOverflow`] if accumulation leaves 64-bit
    ///   range; any worker failure aborts the whole search.
    pub fn run<S: AsRef<str>>(
        lanes: &[Lane],
        key_stats: &[S],
        config: &SearchConfig,
    ) -> Result<SearchOutcome> {
        config.validate().map_err(OptimizeError::Config)?;
        if lanes.is_empty() {
            return Err(OptimizeError::Config("no slots to search".into()));
        }
        for lane in lanes {
            if lane.is_empty() {
                return Err(OptimizeError::EmptySlot(lane.slot().to_string()));
            }
        }

        let stat_index = StatIndex::from_lanes(lanes);
        let key_positions = stat_index.resolve(key_stats)?;
        let space = SearchSpace::compile(lanes, &stat_index, key_positions);

        let windows: Vec<(usize, usize)> = partition::windows(lanes[0].len(), config.workers)
            .into_iter()
            .filter(|&(lo, hi)| lo < hi)
            .collect();

        // Workers share the space read-only; a panic or Err in any of
        // them aborts the whole run instead of being swallowed.
        let results: Vec<WorkerResult> = windows
            .into_par_iter()
            .map(|(lo, hi)| SearchWorker::new(&space, lo, hi).run())
            .collect::<Result<_>>()?;

        let winner = &results[select_winner(&results, &space.key_stats)];
        let picks = lanes
            .iter()
            .zip(&winner.loadout)
            .map(|(lane, &index)| Pick {
                slot: lane.slot().to_string(),
                item: lane.items()[index].name().to_string(),
            })
            .collect();
        let totals = stat_index
            .names()
            .iter()
            .cloned()
            .zip(winner.stats.iter().copied())
            .collect();

        Ok(SearchOutcome {
            picks,
            loadout: winner.loadout.clone(),
            totals,
            key_stat_total: winner.key_stat_total,
            all_stat_total: winner.all_stat_total,
        })
    }

    /// Convenience pipeline: dominance-filter the catalog, build lanes,
    /// and run the search.
    pub fn run_catalog<S: AsRef<str>>(
        catalog: Catalog,
        key_stats: &[S],
        config: &SearchConfig,
    ) -> Result<SearchOutcome> {
        let survivors = filter_dominated(catalog.into_items());
        let lanes = build_lanes(survivors);
        Self::run(&lanes, key_stats, config)
    }
}

/// Picks the global best among worker results, folding in worker order
/// with the exact comparison the workers use locally. Windows cover
/// lane 0 in enumeration order, so this fold lands on the same winner a
/// single worker scanning the whole space would.
pub(crate) fn select_winner(results: &[WorkerResult], key_stats: &[usize]) -> usize {
    let mut best = 0;
    for (index, result) in results.iter().enumerate().skip(1) {
        if challenger_wins(&result.stats, &results[best].stats, key_stats) {
            best = index;
        }
    }
    best
}
