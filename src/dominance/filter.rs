//! Slot-wise removal of dominated items.

use super::compare::{compare, Dominance};
use crate::catalog::Item;

/// Removes every item that is dominated by another item in the same slot.
///
/// Items of different slots never affect each other. Within a slot, a
/// fully tied pair keeps the earlier item, so catalog order decides ties
/// deterministically. Passes repeat until no removal fires; running the
/// filter on its own output changes nothing.
pub fn filter_dominated(items: Vec<Item>) -> Vec<Item> {
    let mut items = items;
    while sweep(&mut items) {}
    items
}

/// One full pass over all same-slot pairs. Returns whether anything was
/// removed.
fn sweep(items: &mut Vec<Item>) -> bool {
    let mut removed = false;
    let mut i = 0;
    while i < items.len() {
        let mut removed_first = false;
        let mut j = i + 1;
        while j < items.len() {
            if items[i].slot() != items[j].slot() {
                j += 1;
                continue;
            }
            match compare(&items[i], &items[j]) {
                Dominance::SecondBetter => {
                    // The earlier item lost; restart comparisons from the
                    // item that slides into its position.
                    items.remove(i);
                    removed = true;
                    removed_first = true;
                    break;
                }
                Dominance::FirstBetter | Dominance::Equal => {
                    items.remove(j);
                    removed = true;
                }
                Dominance::Incomparable => {
                    j += 1;
                }
            }
        }
        if !removed_first {
            i += 1;
        }
    }
    removed
}
