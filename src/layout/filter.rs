// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::Weekday;

use super::window::TimeWindow;
use crate::model::Event;

/// Shortest duration an event is drawn with, in minutes.
pub const MIN_EVENT_MINUTES: u16 = 5;

/// An event that applies to the reference day, with its time range clipped to the window.
///
/// `end` may exceed the window end by up to [`MIN_EVENT_MINUTES`] when a short event sits at the
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClippedEvent {
    /// Position of the source event in the input list.
    pub index: usize,
    pub start: u16,
    pub end: u16,
}

impl ClippedEvent {
    pub fn duration(&self) -> u16 {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Clips `[start, end)` to the window and pads it to the minimum duration.
///
/// Returns `None` when the range has no overlap with the window.
pub fn clip_to_window(start: u16, end: u16, window: &TimeWindow) -> Option<(u16, u16)> {
    let window_start = window.start_minute();
    let window_end = window.end_minute();

    let start = start.max(window_start);
    let end = end.min(window_end);
    if end <= window_start || start >= window_end {
        return None;
    }

    Some((start, end.max(start + MIN_EVENT_MINUTES)))
}

/// Selects the events that apply on `weekday` and clips them to `window`.
///
/// Output keeps input order; indices refer back into `events`.
pub fn resolve_events(
    events: &[Event],
    weekday: Weekday,
    window: &TimeWindow,
) -> Vec<ClippedEvent> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.days().matches(weekday))
        .filter_map(|(index, event)| {
            let (start, end) = clip_to_window(event.start().get(), event.end().get(), window)?;
            Some(ClippedEvent { index, start, end })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use rstest::rstest;

    use super::{clip_to_window, resolve_events, ClippedEvent, MIN_EVENT_MINUTES};
    use crate::layout::window::TimeWindow;
    use crate::model::fixtures::{event, hm};
    use crate::model::{weekday_from_index, DayConstraint, Event, Minute, WeekdaySet};

    #[test]
    fn unconstrained_events_apply_every_weekday() {
        let events = vec![event("Daily", "09:00", "10:00")];
        let window = TimeWindow::new(6, 23);
        for idx in 0..7u8 {
            let weekday = weekday_from_index(idx).expect("weekday");
            assert_eq!(resolve_events(&events, weekday, &window).len(), 1, "weekday {idx}");
        }
    }

    #[test]
    fn day_constrained_events_apply_only_on_their_days() {
        let only_monday = [Weekday::Mon].into_iter().collect::<WeekdaySet>();
        let events = vec![
            event("Monday", "09:00", "10:00").with_days(DayConstraint::Only(only_monday)),
            event("Daily", "11:00", "12:00"),
        ];
        let window = TimeWindow::new(6, 23);

        let monday = resolve_events(&events, Weekday::Mon, &window);
        assert_eq!(monday.iter().map(|clipped| clipped.index).collect::<Vec<_>>(), vec![0, 1]);

        let tuesday = resolve_events(&events, Weekday::Tue, &window);
        assert_eq!(tuesday.iter().map(|clipped| clipped.index).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn clips_start_to_window() {
        let window = TimeWindow::new(8, 10);
        let events = vec![event("Early", "07:00", "09:30")];
        let clipped = resolve_events(&events, Weekday::Mon, &window);
        assert_eq!(
            clipped,
            vec![ClippedEvent { index: 0, start: hm("08:00").get(), end: hm("09:30").get() }]
        );
    }

    #[test]
    fn drops_events_ending_before_window_start() {
        let window = TimeWindow::new(8, 10);
        let events = vec![event("Too early", "07:00", "07:50")];
        assert!(resolve_events(&events, Weekday::Mon, &window).is_empty());
    }

    #[rstest]
    #[case("06:00", "08:00")]
    #[case("10:00", "11:00")]
    #[case("12:00", "13:00")]
    #[case("05:00", "07:59")]
    fn drops_ranges_outside_window(#[case] start: &str, #[case] end: &str) {
        let window = TimeWindow::new(8, 10);
        assert_eq!(clip_to_window(hm(start).get(), hm(end).get(), &window), None);
    }

    #[rstest]
    #[case("09:00", "09:01", (540, 545))]
    #[case("09:00", "09:00", (540, 545))]
    #[case("09:30", "09:00", (570, 575))]
    #[case("09:58", "11:00", (598, 603))]
    #[case("07:00", "11:00", (480, 600))]
    fn pads_to_minimum_duration(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: (u16, u16),
    ) {
        let window = TimeWindow::new(8, 10);
        let clipped = clip_to_window(hm(start).get(), hm(end).get(), &window).expect("clipped");
        assert_eq!(clipped, expected);
        assert!(clipped.1 - clipped.0 >= MIN_EVENT_MINUTES);
    }

    #[test]
    fn every_retained_event_lasts_at_least_the_minimum() {
        let window = TimeWindow::new(0, 24);
        let mut events = Vec::new();
        for start in (0..1440u16).step_by(37) {
            for len in [0u16, 1, 4, 5, 90] {
                let end = (start + len).min(1440);
                let start = Minute::new(start).expect("start");
                let end = Minute::new(end).expect("end");
                events.push(Event::new("e", start, end));
            }
        }
        for clipped in resolve_events(&events, Weekday::Wed, &window) {
            assert!(clipped.duration() >= MIN_EVENT_MINUTES, "{clipped:?}");
        }
    }
}
