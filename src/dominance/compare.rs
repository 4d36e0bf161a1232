//! Pairwise signed-comparison rule.

use crate::catalog::Item;

/// Outcome of comparing two items stat by stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first item is at least as good everywhere and strictly better
    /// somewhere: the second is dominated.
    FirstBetter,
    /// The second item is at least as good everywhere and strictly better
    /// somewhere: the first is dominated.
    SecondBetter,
    /// Every stat ties; either item could stand in for the other.
    Equal,
    /// Each item beats the other on at least one stat.
    Incomparable,
}

/// Compares two items over the union of their stat names.
///
/// For a name present on both items, the larger amount flags an advantage
/// for its owner. For a name present on only one item, a non-negative
/// amount flags its owner, a negative amount flags the other item.
pub fn compare(first: &Item, second: &Item) -> Dominance {
    let mut first_better = false;
    let mut second_better = false;

    for stat in first.stats() {
        match second.stat(stat.name()) {
            Some(other) => {
                if stat.amount() > other {
                    first_better = true;
                } else if other > stat.amount() {
                    second_better = true;
                }
            }
            None => {
                if stat.amount() < 0 {
                    second_better = true;
                } else {
                    first_better = true;
                }
            }
        }
    }
    for stat in second.stats() {
        if first.stat(stat.name()).is_none() {
            if stat.amount() < 0 {
                first_better = true;
            } else {
                second_better = true;
            }
        }
    }

    match (first_better, second_better) {
        (true, true) => Dominance::Incomparable,
        (true, false) => Dominance::FirstBetter,
        (false, true) => Dominance::SecondBetter,
        (false, false) => Dominance::Equal,
    }
}
