//! Dominance filtering: pruning items that can never be the right pick.
//!
//! Two items competing for the same slot are compared stat by stat with
//! the **signed-comparison rule**: over the union of their stat names,
//! each name awards an advantage flag to the item with the larger amount;
//! a stat present on only one item awards the advantage to its owner when
//! the amount is non-negative, and to the *other* item when it is negative
//! (lacking a penalty is an advantage).
//!
//! An item flagged on no stat while its rival is flagged on at least one
//! is dominated and removed; a fully tied pair deterministically drops the
//! later item. Filtering runs slot-wise until no removal fires, so the
//! surviving items of each slot form an antichain under dominance.

mod compare;
mod filter;

pub use compare::{compare, Dominance};
pub use filter::filter_dominated;
