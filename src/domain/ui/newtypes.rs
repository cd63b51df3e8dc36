// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Framework-independent wrappers that keep UI state valid by construction.

// =============================================================================
// CyclicIndex
// =============================================================================

/// Position in a fixed-length list, moving with wrap-around.
///
/// The index is always `< len` when `len > 0`. An empty list is
/// representable: every move is a no-op and [`CyclicIndex::get`] is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    /// Creates an index at the first position of a list of `len` items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current position, or `None` for an empty list.
    #[must_use]
    pub fn get(self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Moves one step forward, wrapping to the start.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Moves one step backward, wrapping to the end.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`. Out-of-range positions are ignored.
    ///
    /// Returns whether the position changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len && index != self.index {
            self.index = index;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// RevealThreshold
// =============================================================================

/// Visible fraction at which a tracked element counts as seen, within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold(f32);

impl RevealThreshold {
    /// Creates a threshold, clamping to `0.0..=1.0`. NaN maps to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether `visible_fraction` crosses this threshold.
    ///
    /// A zero threshold still requires some intersection.
    #[must_use]
    pub fn is_crossed_by(self, visible_fraction: f32) -> bool {
        visible_fraction > 0.0 && visible_fraction >= self.0
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self(0.3)
    }
}

// =============================================================================
// RevealLatch
// =============================================================================

/// One-way visibility flag: starts hidden, becomes revealed once, stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds an observation. Returns `true` only on the hidden to revealed transition.
    pub fn observe(&mut self, visible_fraction: f32, threshold: RevealThreshold) -> bool {
        if self.revealed || !threshold.is_crossed_by(visible_fraction) {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_then_previous_returns_to_start_for_any_count() {
        for len in 1..=7 {
            for start in 0..len {
                for n in 0..(3 * len) {
                    let mut index = CyclicIndex::new(len);
                    index.jump_to(start);
                    for _ in 0..n {
                        index.next();
                    }
                    for _ in 0..n {
                        index.previous();
                    }
                    assert_eq!(index.get(), Some(start), "len={len} start={start} n={n}");
                }
            }
        }
    }

    #[test]
    fn next_wraps_to_first() {
        let mut index = CyclicIndex::new(3);
        index.jump_to(2);
        index.next();
        assert_eq!(index.get(), Some(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut index = CyclicIndex::new(12);
        index.previous();
        assert_eq!(index.get(), Some(11));
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut index = CyclicIndex::new(4);
        index.jump_to(1);
        assert!(!index.jump_to(4));
        assert_eq!(index.get(), Some(1));
    }

    #[test]
    fn empty_index_is_inert() {
        let mut index = CyclicIndex::new(0);
        index.next();
        index.previous();
        assert!(!index.jump_to(0));
        assert!(index.is_empty());
        assert_eq!(index.get(), None);
    }

    #[test]
    fn threshold_clamps_and_handles_nan() {
        assert_eq!(RevealThreshold::new(2.0).value(), 1.0);
        assert_eq!(RevealThreshold::new(-0.5).value(), 0.0);
        assert_eq!(RevealThreshold::new(f32::NAN), RevealThreshold::default());
    }

    #[test]
    fn zero_threshold_needs_some_intersection() {
        let threshold = RevealThreshold::new(0.0);
        assert!(!threshold.is_crossed_by(0.0));
        assert!(threshold.is_crossed_by(0.01));
    }

    #[test]
    fn latch_reveals_once_and_never_reverts() {
        let threshold = RevealThreshold::default();
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(0.1, threshold));
        assert!(!latch.is_revealed());

        assert!(latch.observe(0.3, threshold));
        assert!(latch.is_revealed());

        assert!(!latch.observe(1.0, threshold));
        assert!(!latch.observe(0.0, threshold));
        assert!(latch.is_revealed());
    }
}
