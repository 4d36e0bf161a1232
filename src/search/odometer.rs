//! Mixed-radix combination counter.

/// A mixed-radix counter over lane sizes: one digit per lane, the last
/// digit incrementing fastest, with carry toward digit 0.
///
/// Digit 0 may be confined to a window `lo..hi` of its full range; it
/// wraps from `hi - 1` back to `lo`, so a counter with a window cycles
/// through exactly `(hi - lo) × size(1) × … × size(n-1)` states. This is
/// how the search space is split across workers: each worker owns a
/// disjoint window of lane 0 and cycles every other lane completely.
///
/// Enumeration is the do-while shape: visit the current state, then
/// [`advance`](Odometer::advance), and stop once
/// [`at_start`](Odometer::at_start) reports that the counter has wrapped
/// all the way around to its starting state. Checking for wraparound
/// against the start (rather than against a precomputed end boundary)
/// keeps the single-window, whole-range case from terminating early.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    sizes: Vec<usize>,
    lo: usize,
    hi: usize,
}

impl Odometer {
    /// Creates a counter over the full range of every digit.
    ///
    /// # Panics
    /// Panics if `sizes` is empty or any size is zero.
    pub fn new(sizes: &[usize]) -> Self {
        assert!(!sizes.is_empty(), "odometer needs at least one lane");
        Self::with_window(sizes, 0, sizes[0])
    }

    /// Creates a counter whose digit 0 is confined to `lo..hi`.
    ///
    /// # Panics
    /// Panics if `sizes` is empty, any size is zero, or the window is
    /// empty or out of bounds.
    pub fn with_window(sizes: &[usize], lo: usize, hi: usize) -> Self {
        assert!(!sizes.is_empty(), "odometer needs at least one lane");
        assert!(sizes.iter().all(|&s| s > 0), "lane sizes must be nonzero");
        assert!(lo < hi && hi <= sizes[0], "window {lo}..{hi} is invalid");
        let mut digits = vec![0; sizes.len()];
        digits[0] = lo;
        Self {
            digits,
            sizes: sizes.to_vec(),
            lo,
            hi,
        }
    }

    /// The current state: one index per lane.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Steps to the next state: the last digit increments first, and a
    /// digit reaching its bound resets and carries leftward.
    pub fn advance(&mut self) {
        for lane in (0..self.digits.len()).rev() {
            let (lo, hi) = if lane == 0 {
                (self.lo, self.hi)
            } else {
                (0, self.sizes[lane])
            };
            self.digits[lane] += 1;
            if self.digits[lane] < hi {
                return;
            }
            self.digits[lane] = lo;
        }
    }

    /// Whether the counter has returned to its starting state, i.e. a
    /// full cycle over its window is complete.
    pub fn at_start(&self) -> bool {
        self.digits[0] == self.lo && self.digits[1..].iter().all(|&d| d == 0)
    }
}
