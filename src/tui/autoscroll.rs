// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Idle autoscroll for boards taller than the viewport.
//!
//! The cycle is: ease down to the bottom, pause, ease back to the top, pause, repeat. With no
//! overflow it re-checks after a pause. Manual scrolling suspends the cycle until the keyboard
//! has been idle for [`IDLE_RESUME`]. Time is always passed in, so the state machine is
//! deterministic under test.

use std::time::{Duration, Instant};

pub(crate) const SCROLL_DURATION: Duration = Duration::from_secs(18);
pub(crate) const PAUSE: Duration = Duration::from_secs(2);
pub(crate) const IDLE_RESUME: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Waiting { until: Instant },
    Scrolling { from: f64, to: f64, started: Instant },
    Pausing { until: Instant, then: NextLeg },
    Suspended { last_input: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextLeg {
    Up,
    Restart,
}

#[derive(Debug, Clone)]
pub(crate) struct AutoScroll {
    enabled: bool,
    offset: f64,
    phase: Phase,
}

impl AutoScroll {
    pub(crate) fn new(enabled: bool, now: Instant) -> Self {
        Self { enabled, offset: 0.0, phase: Phase::Waiting { until: now } }
    }

    pub(crate) fn offset(&self) -> u16 {
        self.offset.round().clamp(0.0, f64::from(u16::MAX)) as u16
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.enabled && matches!(self.phase, Phase::Scrolling { .. })
    }

    /// Advances the animation to `now` and returns the row offset to show.
    pub(crate) fn tick(&mut self, now: Instant, max_offset: u16) -> u16 {
        let max = f64::from(max_offset);
        self.offset = self.offset.clamp(0.0, max);
        if !self.enabled {
            return self.offset();
        }

        match self.phase {
            Phase::Waiting { until } if now >= until => self.begin_cycle(now, max),
            Phase::Suspended { last_input }
                if now.saturating_duration_since(last_input) >= IDLE_RESUME =>
            {
                tracing::debug!(offset = self.offset(), "autoscroll resumed");
                self.begin_cycle(now, max)
            }
            Phase::Pausing { until, then } if now >= until => match then {
                NextLeg::Up => self.start_scroll(now, 0.0),
                NextLeg::Restart => self.begin_cycle(now, max),
            },
            _ => {}
        }

        if let Phase::Scrolling { from, to, started } = self.phase {
            let from = from.min(max);
            let to = to.min(max);
            let elapsed = now.saturating_duration_since(started).as_secs_f64();
            let t = (elapsed / SCROLL_DURATION.as_secs_f64()).min(1.0);
            self.offset = from + (to - from) * ease_in_out_cubic(t);
            if t >= 1.0 {
                self.offset = to;
                let then = if to > 0.0 { NextLeg::Up } else { NextLeg::Restart };
                self.phase = Phase::Pausing { until: now + PAUSE, then };
            }
        }

        self.offset()
    }

    /// Records a manual scroll to `offset`, suspending the cycle.
    pub(crate) fn scroll_manually(&mut self, now: Instant, offset: u16, max_offset: u16) {
        self.offset = f64::from(offset.min(max_offset));
        self.phase = Phase::Suspended { last_input: now };
    }

    fn begin_cycle(&mut self, now: Instant, max: f64) {
        if max <= 0.0 {
            self.phase = Phase::Waiting { until: now + PAUSE };
        } else if self.offset >= max {
            self.start_scroll(now, 0.0);
        } else {
            self.start_scroll(now, max);
        }
    }

    fn start_scroll(&mut self, now: Instant, to: f64) {
        self.phase = Phase::Scrolling { from: self.offset, to, started: now };
    }
}

pub(crate) fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rstest::rstest;

    use super::{ease_in_out_cubic, AutoScroll};

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.5, 0.5)]
    #[case(1.0, 1.0)]
    #[case(0.25, 0.0625)]
    #[case(0.75, 0.9375)]
    fn easing_curve_matches_cubic(#[case] t: f64, #[case] expected: f64) {
        assert!((ease_in_out_cubic(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn full_cycle_goes_down_pauses_and_comes_back() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(true, base);

        assert_eq!(scroll.tick(base, 20), 0);
        assert!(scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(9), 20), 10);
        assert_eq!(scroll.tick(base + secs(18), 20), 20);
        assert!(!scroll.is_animating());

        assert_eq!(scroll.tick(base + secs(19), 20), 20);
        assert_eq!(scroll.tick(base + secs(20), 20), 20);
        assert!(scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(29), 20), 10);
        assert_eq!(scroll.tick(base + secs(38), 20), 0);

        assert_eq!(scroll.tick(base + secs(39), 20), 0);
        assert!(!scroll.is_animating());
        scroll.tick(base + secs(40), 20);
        assert!(scroll.is_animating());
    }

    #[test]
    fn without_overflow_it_rechecks_after_a_pause() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(true, base);

        assert_eq!(scroll.tick(base, 0), 0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(1), 12), 0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(2), 12), 0);
        assert!(scroll.is_animating());
    }

    #[test]
    fn manual_scroll_suspends_then_resumes_from_current_position() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(true, base);
        scroll.tick(base, 20);
        scroll.tick(base + secs(5), 20);

        scroll.scroll_manually(base + secs(5), 7, 20);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(10), 20), 7);
        assert_eq!(scroll.tick(base + secs(14), 20), 7);

        assert_eq!(scroll.tick(base + secs(15), 20), 7);
        assert!(scroll.is_animating());
        assert_eq!(scroll.tick(base + secs(33), 20), 20);
    }

    #[test]
    fn resuming_at_the_bottom_scrolls_up() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(true, base);
        scroll.scroll_manually(base, 20, 20);

        assert_eq!(scroll.tick(base + secs(10), 20), 20);
        assert_eq!(scroll.tick(base + secs(28), 20), 0);
    }

    #[test]
    fn shrinking_board_clamps_offset() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(true, base);
        scroll.scroll_manually(base, 15, 20);
        assert_eq!(scroll.tick(base + secs(1), 4), 4);
    }

    #[test]
    fn disabled_autoscroll_only_follows_manual_input() {
        let base = Instant::now();
        let mut scroll = AutoScroll::new(false, base);

        assert_eq!(scroll.tick(base + secs(30), 20), 0);
        assert!(!scroll.is_animating());
        scroll.scroll_manually(base + secs(30), 6, 20);
        assert_eq!(scroll.tick(base + secs(60), 20), 6);
    }
}
