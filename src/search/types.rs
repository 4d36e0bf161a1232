//! Search-side data types: lanes, the stat-name index, the compiled
//! search space shared by workers, and per-worker results.

use crate::catalog::Item;
use crate::{OptimizeError, Result};
use std::collections::HashMap;

/// The ordered list of items eligible for one slot.
///
/// Lane order is the canonical slot order: every loadout index vector has
/// one entry per lane, in this order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    slot: String,
    items: Vec<Item>,
}

impl Lane {
    /// Creates a lane for a slot.
    pub fn new(slot: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            slot: slot.into(),
            items,
        }
    }

    /// The slot name.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The eligible items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of eligible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item is eligible for this slot.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups items by slot, preserving first-seen slot order.
///
/// The result defines the canonical slot order for the whole search.
pub fn build_lanes(items: Vec<Item>) -> Vec<Lane> {
    let mut lanes: Vec<Lane> = Vec::new();
    for item in items {
        match lanes.iter_mut().find(|lane| lane.slot == item.slot()) {
            Some(lane) => lane.items.push(item),
            None => lanes.push(Lane {
                slot: item.slot().to_string(),
                items: vec![item],
            }),
        }
    }
    lanes
}

/// A fixed bijection between stat names and dense vector positions.
///
/// Built once from the union of stat names across all items in the
/// search, in first-seen order. Every stat vector in the search is a
/// fixed-length `i64` array indexed through this bijection.
#[derive(Debug, Clone)]
pub struct StatIndex {
    names: Vec<String>,
}

impl StatIndex {
    /// Builds the index from all items across the given lanes.
    pub fn from_lanes(lanes: &[Lane]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for lane in lanes {
            for item in &lane.items {
                for stat in item.stats() {
                    if !names.iter().any(|n| n == stat.name()) {
                        names.push(stat.name().to_string());
                    }
                }
            }
        }
        Self { names }
    }

    /// Number of distinct stat names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no stat name occurs anywhere.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The stat names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The dense position of a stat name, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Resolves key stat names to dense positions.
    ///
    /// Duplicates are collapsed. An empty selection or a name absent from
    /// the index is an error: a silent no-op objective would make every
    /// combination tie.
    pub fn resolve<S: AsRef<str>>(&self, key_stats: &[S]) -> Result<Vec<usize>> {
        if key_stats.is_empty() {
            return Err(OptimizeError::NoKeyStats);
        }
        let mut positions = Vec::with_capacity(key_stats.len());
        for key in key_stats {
            let key = key.as_ref();
            let position = self
                .position(key)
                .ok_or_else(|| OptimizeError::UnknownKeyStat(key.to_string()))?;
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
        Ok(positions)
    }
}

/// The best loadout one worker found in its share of the search space.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerResult {
    /// Chosen item index per lane, in lane order.
    pub loadout: Vec<usize>,
    /// Aggregated stat vector of the chosen loadout.
    pub stats: Vec<i64>,
    /// Sum of the key-stat entries of `stats`.
    pub key_stat_total: i64,
    /// Sum of all entries of `stats`.
    pub all_stat_total: i64,
}

/// An item compiled for the hot loop: dense stat vector plus interned
/// group labels.
#[derive(Debug, Clone)]
pub(crate) struct CompiledItem {
    pub(crate) stats: Vec<i64>,
    pub(crate) groups: Vec<u32>,
    pub(crate) exclusions: Vec<u32>,
}

/// Immutable, compiled snapshot of everything a worker needs.
///
/// One instance is shared read-only by all workers; workers own nothing
/// but their odometer and best-so-far state.
#[derive(Debug)]
pub(crate) struct SearchSpace {
    pub(crate) items: Vec<Vec<CompiledItem>>,
    pub(crate) key_stats: Vec<usize>,
    pub(crate) stat_count: usize,
}

impl SearchSpace {
    /// Compiles lanes into dense per-item stat vectors and interned group
    /// ids. `key_stats` are positions into `stat_index`.
    pub(crate) fn compile(lanes: &[Lane], stat_index: &StatIndex, key_stats: Vec<usize>) -> Self {
        // Two passes: intern label ids, then compile items against them.
        let mut labels: HashMap<&str, u32> = HashMap::new();
        for lane in lanes {
            for item in &lane.items {
                for label in item.groups().iter().chain(item.exclusions()) {
                    let next = labels.len() as u32;
                    labels.entry(label.as_str()).or_insert(next);
                }
            }
        }

        let items = lanes
            .iter()
            .map(|lane| {
                lane.items
                    .iter()
                    .map(|item| {
                        let mut stats = vec![0i64; stat_index.len()];
                        for stat in item.stats() {
                            // Index membership is guaranteed by construction.
                            if let Some(position) = stat_index.position(stat.name()) {
                                stats[position] = stat.amount();
                            }
                        }
                        let mut groups: Vec<u32> =
                            item.groups().iter().map(|g| labels[g.as_str()]).collect();
                        let mut exclusions: Vec<u32> = item
                            .exclusions()
                            .iter()
                            .map(|g| labels[g.as_str()])
                            .collect();
                        groups.sort_unstable();
                        groups.dedup();
                        exclusions.sort_unstable();
                        exclusions.dedup();
                        CompiledItem {
                            stats,
                            groups,
                            exclusions,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            items,
            key_stats,
            stat_count: stat_index.len(),
        }
    }

    /// Sizes of each lane, in lane order.
    pub(crate) fn lane_sizes(&self) -> Vec<usize> {
        self.items.iter().map(Vec::len).collect()
    }

    /// Whether the combination violates no exclusion constraint.
    ///
    /// A pair of chosen items conflicts when either one's exclusions
    /// intersect the other's groups.
    pub(crate) fn is_compatible(&self, loadout: &[usize]) -> bool {
        for i in 0..loadout.len() {
            let first = &self.items[i][loadout[i]];
            for j in (i + 1)..loadout.len() {
                let second = &self.items[j][loadout[j]];
                if intersects(&first.exclusions, &second.groups)
                    || intersects(&second.exclusions, &first.groups)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Sums the chosen items' stat vectors into `out`.
    ///
    /// Fails with [`OptimizeError::StatOverflow`] instead of wrapping.
    pub(crate) fn accumulate(&self, loadout: &[usize], out: &mut [i64]) -> Result<()> {
        out.fill(0);
        for (lane, &index) in self.items.iter().zip(loadout) {
            for (total, &amount) in out.iter_mut().zip(&lane[index].stats) {
                *total = total
                    .checked_add(amount)
                    .ok_or(OptimizeError::StatOverflow)?;
            }
        }
        Ok(())
    }
}

/// Whether two sorted, deduplicated id lists share an element.
fn intersects(left: &[u32], right: &[u32]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}
