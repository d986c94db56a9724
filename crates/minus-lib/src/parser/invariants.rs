//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser {
    /// Every lookahead burns debug fuel; consuming a token refills it.
    /// Running dry means a production is looping without making progress.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads at token {}",
            self.pos
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }
}
