//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser<'_> {
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    /// Every token covers at least one byte, so a repetition can't run more
    /// times than the source is long.
    #[inline]
    pub(super) fn ensure_bounded(&self, iterations: usize) {
        assert!(
            iterations <= self.source.len(),
            "parser is stuck: repetition ran {iterations} times over {} bytes",
            self.source.len()
        );
    }
}
