//! Cellular-automaton smoothing driven by neighbor-count thresholds
//!
//! Each pass classifies every cell once, stores the result in a bit
//! snapshot, and only then rewrites cells. Every count in a pass therefore
//! sees the grid as it stood when the pass began, independent of scan order.

use std::cmp::Ordering;

use bitvec::vec::BitVec;

use crate::algorithm::neighbors::count_with_walled_border;
use crate::io::configuration::DEFAULT_SMOOTHING_THRESHOLD;
use crate::spatial::grid::Grid;

/// Classification and transforms applied by a smoothing pass
///
/// For each cell the Moore neighbors satisfying `predicate` are counted
/// (off-grid neighbors count as satisfying it) and compared to `threshold`:
/// strictly above applies `above`, strictly below applies `below`, equal
/// applies `equal`.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingRules<P, A, B, E> {
    predicate: P,
    above: A,
    below: B,
    equal: E,
    threshold: u8,
}

impl<P, A, B, E> SmoothingRules<P, A, B, E> {
    /// Create rules with the default threshold
    pub const fn new(predicate: P, above: A, below: B, equal: E) -> Self {
        Self {
            predicate,
            above,
            below,
            equal,
            threshold: DEFAULT_SMOOTHING_THRESHOLD,
        }
    }

    /// Replace the neighbor-count threshold
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Neighbor-count threshold the transforms are selected by
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl<T> Grid<T> {
    /// Run `iterations` smoothing passes over the whole grid
    pub fn smooth<P, A, B, E>(&mut self, iterations: usize, rules: &SmoothingRules<P, A, B, E>)
    where
        P: Fn(&T) -> bool,
        A: Fn(&T) -> T,
        B: Fn(&T) -> T,
        E: Fn(&T) -> T,
    {
        for pass in 0..iterations {
            let matching = self.smoothing_pass(rules);
            tracing::debug!(pass, matching, threshold = rules.threshold, "smoothing pass");
        }
    }

    /// Single pass; returns how many cells matched the predicate beforehand
    fn smoothing_pass<P, A, B, E>(&mut self, rules: &SmoothingRules<P, A, B, E>) -> usize
    where
        P: Fn(&T) -> bool,
        A: Fn(&T) -> T,
        B: Fn(&T) -> T,
        E: Fn(&T) -> T,
    {
        let snapshot: BitVec = self.iter().map(&rules.predicate).collect();
        let dimensions = self.dimensions();
        let width = self.width();

        for ((x, y), cell) in self.indexed_iter_mut() {
            let count = count_with_walled_border(dimensions, x, y, |nx, ny| {
                snapshot.get(ny * width + nx).as_deref() == Some(&true)
            });

            *cell = match count.cmp(&rules.threshold) {
                Ordering::Greater => (rules.above)(&*cell),
                Ordering::Less => (rules.below)(&*cell),
                Ordering::Equal => (rules.equal)(&*cell),
            };
        }

        snapshot.count_ones()
    }
}
