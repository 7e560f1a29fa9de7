//! One-shot visibility latch.

use crate::config::{REVEAL_THRESHOLD, SECTION_ROOT_MARGIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Unrevealed,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The latch just flipped. The caller should stop observing.
    Revealed,
    Unchanged,
}

impl RevealLatch {
    /// Feeds one intersection report into the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> Transition {
        match (*self, is_intersecting) {
            (RevealLatch::Unrevealed, true) => {
                *self = RevealLatch::Revealed;
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }
}

/// Options handed to the browser's `IntersectionObserver`.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl RevealOptions {
    /// Page sections: fire slightly before the region scrolls fully into view.
    pub fn section() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: Some(SECTION_ROOT_MARGIN),
        }
    }

    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::threshold(REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrevealed() {
        assert_eq!(RevealLatch::default(), RevealLatch::Unrevealed);
    }

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(false), Transition::Unchanged);
        assert_eq!(latch, RevealLatch::Unrevealed);

        assert_eq!(latch.observe(true), Transition::Revealed);
        assert_eq!(latch, RevealLatch::Revealed);

        assert_eq!(latch.observe(true), Transition::Unchanged);
        assert_eq!(latch.observe(false), Transition::Unchanged);
        assert_eq!(latch, RevealLatch::Revealed);
    }

    #[test]
    fn never_reverts_under_any_report_sequence() {
        let reports = [false, true, false, false, true, false, true, true, false];
        let mut latch = RevealLatch::default();
        let mut flips = 0;
        let mut seen_revealed = false;

        for report in reports {
            if latch.observe(report) == Transition::Revealed {
                flips += 1;
            }
            if seen_revealed {
                assert_eq!(latch, RevealLatch::Revealed);
            }
            seen_revealed |= latch == RevealLatch::Revealed;
        }

        assert_eq!(flips, 1);
    }

    #[test]
    fn section_options_trigger_early() {
        let options = RevealOptions::section();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, Some("0px 0px -50px 0px"));
        assert_eq!(RevealOptions::default().root_margin, None);
    }
}
