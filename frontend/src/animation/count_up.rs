//! Frame-stepped counter used by the achievement statistics.
//!
//! The counter is plain data: whoever owns it decides how ticks are driven.
//! In the page that is a `gloo_timers` interval (see `components::count_up`),
//! in tests it is a loop.

use crate::config::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    total_frames: u32,
    frame: u32,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        // A zero duration still gets one frame so the target is always emitted.
        let total_frames = (f64::from(duration_ms) / FRAME_MS).round().max(1.0) as u32;
        Self {
            target,
            total_frames,
            frame: 0,
            value: 0,
        }
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Value currently on display. Zero until the first tick.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.total_frames
    }

    /// Advances one frame and returns the value to display, or `None` once the
    /// final frame has been emitted.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }

        self.frame += 1;
        self.value = if self.frame == self.total_frames {
            self.target
        } else {
            let progress = f64::from(self.frame) / f64::from(self.total_frames);
            (f64::from(self.target) * progress).round() as u32
        };

        Some(self.value)
    }
}

impl Iterator for CountUp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total_frames - self.frame) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(target: u32, duration_ms: u32) {
        let counter = CountUp::new(target, duration_ms);
        assert_eq!(counter.value(), 0);

        let values: Vec<u32> = counter.collect();
        assert!(!values.is_empty(), "target {target} over {duration_ms}ms emitted nothing");
        assert!(
            values.windows(2).all(|w| w[0] <= w[1]),
            "sequence for {target}/{duration_ms} went backwards: {values:?}"
        );
        assert!(values.iter().all(|v| *v <= target));
        assert_eq!(values.last(), Some(&target));
    }

    #[test]
    fn clients_stat_counts_to_exactly_150() {
        let mut counter = CountUp::new(150, 2000);
        assert_eq!(counter.total_frames(), 120);

        let mut emitted = Vec::new();
        while let Some(value) = counter.tick() {
            emitted.push(value);
        }

        assert_eq!(emitted.len(), 120);
        assert_eq!(emitted.last(), Some(&150));
        assert!(emitted.iter().all(|v| *v <= 150));
        assert!(emitted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn stops_emitting_after_final_frame() {
        let mut counter = CountUp::new(3, 100);
        let last = counter.by_ref().last();
        assert_eq!(last, Some(3));
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn degenerate_inputs_finish_in_one_frame() {
        assert_eq!(CountUp::new(0, 0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(CountUp::new(2000, 0).collect::<Vec<_>>(), vec![2000]);
        // Shorter than half a frame rounds to zero frames, clamped to one.
        assert_eq!(CountUp::new(7, 5).total_frames(), 1);
    }

    #[test]
    fn sequences_are_monotone_and_land_on_target() {
        for target in [0, 1, 3, 150, 2000, 1_000_000] {
            for duration_ms in [0, 1, 16, 17, 100, 2000, 5000] {
                assert_well_formed(target, duration_ms);
            }
        }
    }

    #[test]
    fn intermediate_values_follow_elapsed_fraction() {
        let values: Vec<u32> = CountUp::new(2000, 2000).collect();
        // Frame 60 of 120 is the midpoint.
        assert_eq!(values[59], 1000);
        assert_eq!(values[0], 17);
    }

    #[test]
    fn size_hint_tracks_remaining_frames() {
        let mut counter = CountUp::new(10, 2000);
        assert_eq!(counter.size_hint(), (120, Some(120)));
        counter.tick();
        assert_eq!(counter.size_hint(), (119, Some(119)));
    }
}
