//! A single search worker: exhaustive evaluation of one lane-0 window.

use super::odometer::Odometer;
use super::types::{SearchSpace, WorkerResult};
use crate::{OptimizeError, Result};

/// Enumerates every combination in one window of the search space and
/// tracks the locally best loadout.
///
/// The best pair starts as the all-zero loadout with a zero stat vector;
/// the first candidate that does not lose to it takes over. Candidates
/// are compared on the key-stat delta first; exact ties fall through to
/// the spread/total tie-break (see [`challenger_wins`]).
pub(crate) struct SearchWorker<'a> {
    space: &'a SearchSpace,
    lo: usize,
    hi: usize,
}

impl<'a> SearchWorker<'a> {
    /// Creates a worker for the lane-0 window `lo..hi`.
    pub(crate) fn new(space: &'a SearchSpace, lo: usize, hi: usize) -> Self {
        Self { space, lo, hi }
    }

    /// Runs the worker to completion over its whole window.
    pub(crate) fn run(&self) -> Result<WorkerResult> {
        let sizes = self.space.lane_sizes();
        let mut odometer = Odometer::with_window(&sizes, self.lo, self.hi);

        let mut best_loadout = vec![0usize; sizes.len()];
        let mut best_stats = vec![0i64; self.space.stat_count];
        let mut current = vec![0i64; self.space.stat_count];

        loop {
            let loadout = odometer.digits();
            if self.space.is_compatible(loadout) {
                self.space.accumulate(loadout, &mut current)?;
                if challenger_wins(&current, &best_stats, &self.space.key_stats) {
                    best_loadout.copy_from_slice(loadout);
                    best_stats.copy_from_slice(&current);
                }
            }
            odometer.advance();
            if odometer.at_start() {
                break;
            }
        }

        let key_stat_total = checked_sum(self.space.key_stats.iter().map(|&k| best_stats[k]))?;
        let all_stat_total = checked_sum(best_stats.iter().copied())?;
        Ok(WorkerResult {
            loadout: best_loadout,
            stats: best_stats,
            key_stat_total,
            all_stat_total,
        })
    }
}

/// Whether `candidate` displaces `best` under the objective.
///
/// 1. Larger key-stat sum wins; smaller loses.
/// 2. On an exact key tie, the smaller spread (max − min over the whole
///    stat vector) wins: a more balanced loadout is preferred.
/// 3. On an equal spread, the larger overall total wins.
/// 4. Still equal: the incumbent stays, so the first loadout found in
///    enumeration order is kept.
///
/// Comparisons run in `i128`, which cannot overflow on `i64` inputs.
pub(crate) fn challenger_wins(candidate: &[i64], best: &[i64], key_stats: &[usize]) -> bool {
    let delta: i128 = key_stats
        .iter()
        .map(|&k| candidate[k] as i128 - best[k] as i128)
        .sum();
    if delta != 0 {
        return delta > 0;
    }

    let candidate_spread = spread(candidate);
    let best_spread = spread(best);
    if candidate_spread != best_spread {
        return candidate_spread < best_spread;
    }

    let candidate_total: i128 = candidate.iter().map(|&v| v as i128).sum();
    let best_total: i128 = best.iter().map(|&v| v as i128).sum();
    candidate_total > best_total
}

/// Range of a stat vector: max − min over all entries.
fn spread(stats: &[i64]) -> i128 {
    let max = stats.iter().max().copied().unwrap_or(0);
    let min = stats.iter().min().copied().unwrap_or(0);
    max as i128 - min as i128
}

fn checked_sum(values: impl Iterator<Item = i64>) -> Result<i64> {
    let mut total = 0i64;
    for value in values {
        total = total
            .checked_add(value)
            .ok_or(OptimizeError::StatOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::super::types::{build_lanes, SearchSpace, StatIndex};
    use super::*;
    use crate::catalog::{Item, Stat};

    fn space(items: Vec<Item>, keys: &[&str]) -> SearchSpace {
        let lanes = build_lanes(items);
        let index = StatIndex::from_lanes(&lanes);
        let keys = index.resolve(keys).unwrap();
        SearchSpace::compile(&lanes, &index, keys)
    }

    fn item(name: &str, slot: &str, stats: Vec<Stat>) -> Item {
        Item::new(name, slot, &[], &[], stats)
    }

    // ---- challenger_wins ----

    #[test]
    fn test_key_delta_decides() {
        assert!(challenger_wins(&[5, 0], &[3, 99], &[0]));
        assert!(!challenger_wins(&[3, 99], &[5, 0], &[0]));
    }

    #[test]
    fn test_key_tie_smaller_spread_wins() {
        // Key stat (index 0) ties at 5; candidate spread 4 < best spread 5.
        assert!(challenger_wins(&[5, 1], &[5, 0], &[0]));
        assert!(!challenger_wins(&[5, 0], &[5, 1], &[0]));
    }

    #[test]
    fn test_key_and_spread_tie_larger_total_wins() {
        // Spread is 4 for both; totals 9 vs 10.
        assert!(challenger_wins(&[5, 4, 1], &[5, 1, 3], &[0]));
        assert!(!challenger_wins(&[5, 1, 3], &[5, 4, 1], &[0]));
    }

    #[test]
    fn test_full_tie_keeps_incumbent() {
        assert!(!challenger_wins(&[5, 2], &[5, 2], &[0]));
    }

    #[test]
    fn test_multiple_key_stats_sum_equally_weighted() {
        // Keys 0 and 1: 3+4=7 beats 5+1=6.
        assert!(challenger_wins(&[3, 4], &[5, 1], &[0, 1]));
    }

    #[test]
    fn test_extreme_values_do_not_overflow_comparison() {
        assert!(challenger_wins(&[i64::MAX], &[i64::MIN], &[0]));
        assert!(!challenger_wins(&[i64::MIN], &[i64::MAX], &[0]));
    }

    // ---- worker runs ----

    #[test]
    fn test_worker_finds_best_in_window() {
        let space = space(
            vec![
                item("W1", "Weapon", vec![Stat::new("str", 5)]),
                item("W2", "Weapon", vec![Stat::new("str", 3), Stat::new("vit", 10)]),
                item("R1", "Ring", vec![Stat::new("str", 2)]),
                item("R2", "Ring", vec![Stat::new("vit", 1)]),
            ],
            &["str"],
        );
        let result = SearchWorker::new(&space, 0, 2).run().unwrap();
        assert_eq!(result.loadout, vec![0, 0]); // W1 + R1
        assert_eq!(result.key_stat_total, 7);
        assert_eq!(result.all_stat_total, 7);
    }

    #[test]
    fn test_worker_respects_window() {
        let space = space(
            vec![
                item("W1", "Weapon", vec![Stat::new("str", 5)]),
                item("W2", "Weapon", vec![Stat::new("str", 3)]),
                item("R1", "Ring", vec![Stat::new("str", 2)]),
            ],
            &["str"],
        );
        // Window 1..2 only sees W2.
        let result = SearchWorker::new(&space, 1, 2).run().unwrap();
        assert_eq!(result.loadout, vec![1, 0]);
        assert_eq!(result.key_stat_total, 5);
    }

    #[test]
    fn test_worker_skips_excluded_combinations() {
        let space = {
            let lanes = build_lanes(vec![
                Item::new(
                    "W2",
                    "Weapon",
                    &["Cursed"],
                    &[],
                    [Stat::new("str", 30)],
                ),
                Item::new("W1", "Weapon", &[], &[], [Stat::new("str", 5)]),
                Item::new("R1", "Ring", &[], &["Cursed"], [Stat::new("str", 2)]),
            ]);
            let index = StatIndex::from_lanes(&lanes);
            let keys = index.resolve(&["str"]).unwrap();
            SearchSpace::compile(&lanes, &index, keys)
        };
        let result = SearchWorker::new(&space, 0, 2).run().unwrap();
        // W2+R1 would give 32 but is invalid; W1+R1 (7) is the best legal pick.
        assert_eq!(result.loadout, vec![1, 0]);
        assert_eq!(result.key_stat_total, 7);
    }

    #[test]
    fn test_worker_overflow_surfaces() {
        let space = space(
            vec![
                item("A", "SlotA", vec![Stat::new("str", i64::MAX)]),
                item("B", "SlotB", vec![Stat::new("str", 1)]),
            ],
            &["str"],
        );
        let err = SearchWorker::new(&space, 0, 1).run().unwrap_err();
        assert!(matches!(err, OptimizeError::StatOverflow));
    }
}
